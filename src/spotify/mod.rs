//! # Spotify Integration Module
//!
//! This module is the HTTP client layer against the Spotify Web API. It
//! covers the two external collaborators the backend depends on:
//!
//! - The **accounts service** (`auth`): OAuth 2.0 Authorization Code flow
//!   for a confidential client. The token endpoint is called with HTTP Basic
//!   auth using the application's client ID and secret, both for the initial
//!   code exchange and for refresh-token grants.
//! - The **top-items endpoint** (`tracks`): ranked track lists per time
//!   range, fetched with a bearer credential and retried exactly once after
//!   a fresh token refresh when the credential has expired.
//!
//! ## Credential lifecycle
//!
//! Access tokens are deliberately never cached: every data-fetching
//! operation re-derives a fresh one from the persisted refresh token. This
//! trades one extra token-endpoint round trip per request for the absence of
//! any in-memory expiry bookkeeping.
//!
//! ## Error handling
//!
//! All operations return [`SpotifyError`], which classifies failures the
//! way the HTTP surface needs to report them: a missing refresh credential
//! (`NotAuthenticated`), an upstream rejection of freshly refreshed
//! credentials (`Expired`), a response body that violates the documented
//! contract (`Malformed`), transport-level failures (`Http`), and durable
//! storage failures (`Store`). Decode failures from `reqwest` are routed to
//! `Malformed` so a body missing required fields surfaces as an upstream
//! protocol violation instead of an opaque transport error.

mod auth;
mod tracks;

use std::{fmt, io};

pub use auth::TokenService;
pub use tracks::get_top_tracks;

/// Failure classes for calls against the Spotify API.
#[derive(Debug)]
pub enum SpotifyError {
    /// No refresh credential on file; the user has never authorized.
    NotAuthenticated,
    /// The API rejected a freshly refreshed credential (second 401).
    Expired,
    /// Upstream response body violated the documented contract.
    Malformed(String),
    /// Transport failure or non-auth upstream error status.
    Http(reqwest::Error),
    /// Durable credential storage failed.
    Store(io::Error),
}

impl fmt::Display for SpotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpotifyError::NotAuthenticated => write!(f, "not authenticated"),
            SpotifyError::Expired => {
                write!(f, "upstream rejected freshly refreshed credentials")
            }
            SpotifyError::Malformed(msg) => write!(f, "malformed upstream response: {}", msg),
            SpotifyError::Http(e) => write!(f, "upstream request failed: {}", e),
            SpotifyError::Store(e) => write!(f, "credential storage failed: {}", e),
        }
    }
}

impl std::error::Error for SpotifyError {}

impl From<reqwest::Error> for SpotifyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SpotifyError::Malformed(err.to_string())
        } else {
            SpotifyError::Http(err)
        }
    }
}

impl From<io::Error> for SpotifyError {
    fn from(err: io::Error) -> Self {
        SpotifyError::Store(err)
    }
}
