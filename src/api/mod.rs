//! # API Module
//!
//! HTTP handlers for the backend's web surface. Each handler lives in its
//! own file and is re-exported here for the router in [`crate::server`].
//!
//! ## Endpoints
//!
//! - [`home`] / [`static_file`] - The static landing page and its assets.
//! - [`auth`] - Redirects the user to the provider's consent screen to
//!   start the OAuth 2.0 Authorization Code flow.
//! - [`callback`] - Receives the authorization code after consent,
//!   exchanges it for credentials, and sends the user back home.
//! - [`older_tracks`] - The JSON report of long-term favorites missing
//!   from the recent rotation.
//! - [`health`] - Health check returning status and version for monitoring.
//!
//! Handlers are stateless apart from the shared [`crate::spotify::TokenService`]
//! provided through an axum `Extension` layer.

mod auth;
mod callback;
mod health;
mod home;
mod older_tracks;

pub use auth::auth;
pub use callback::callback;
pub use health::health;
pub use home::home;
pub use home::static_file;
pub use older_tracks::older_tracks;
