//! Configuration management for the Trackrewind backend.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. Credentials for the Spotify
//! application are required; everything else carries a sensible default so a
//! registered application with the standard local redirect URI works out of
//! the box.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::Res;

/// Default bind address for the HTTP server.
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8000";

/// Redirect URI registered with the Spotify application.
///
/// Must match the value configured in the Spotify developer dashboard
/// exactly, including scheme and port.
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:8000/callback";

/// OAuth scope requested during authorization. Read access to the user's
/// top items is the only permission this backend needs.
pub const AUTH_SCOPE: &str = "user-top-read";

const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Loads environment variables from a `.env` file in the working directory.
///
/// A missing `.env` file is not an error; deployments may provide all
/// configuration through real environment variables instead.
///
/// # Errors
///
/// Returns an error only if a `.env` file exists but cannot be parsed.
pub async fn load_env() -> Res<()> {
    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(dotenv::Error::Io(_)) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Static application configuration, resolved once at startup.
///
/// Passed explicitly to the services that need it rather than read from
/// ambient process state at call time. Endpoint URLs are overridable via
/// environment variables, which also allows tests to point the client at a
/// local mock server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Spotify application client ID.
    pub client_id: String,
    /// Spotify application client secret.
    pub client_secret: String,
    /// OAuth redirect URI registered with the application.
    pub redirect_uri: String,
    /// OAuth scope requested during authorization.
    pub scope: String,
    /// Spotify authorization endpoint.
    pub auth_url: String,
    /// Spotify token exchange endpoint.
    pub token_url: String,
    /// Spotify Web API base URL.
    pub api_url: String,
    /// Address and port for the local HTTP server.
    pub server_addr: String,
    /// Location of the persisted refresh token.
    pub token_file: PathBuf,
    /// Directory holding the static landing page assets.
    pub static_dir: PathBuf,
}

impl Config {
    /// Resolves the configuration from the process environment.
    ///
    /// `CLIENT_ID` and `CLIENT_SECRET` are required; their absence is a
    /// fatal configuration error and the server must refuse to start.
    /// All other values fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error message naming the missing required variable.
    pub fn from_env() -> Result<Self, String> {
        let client_id = env::var("CLIENT_ID").map_err(|_| "CLIENT_ID must be set".to_string())?;
        let client_secret =
            env::var("CLIENT_SECRET").map_err(|_| "CLIENT_SECRET must be set".to_string())?;

        Ok(Config {
            client_id,
            client_secret,
            redirect_uri: env::var("REDIRECT_URI")
                .unwrap_or_else(|_| DEFAULT_REDIRECT_URI.to_string()),
            scope: AUTH_SCOPE.to_string(),
            auth_url: env::var("SPOTIFY_AUTH_URL")
                .unwrap_or_else(|_| DEFAULT_AUTH_URL.to_string()),
            token_url: env::var("SPOTIFY_TOKEN_URL")
                .unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string()),
            api_url: env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            server_addr: env::var("SERVER_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string()),
            token_file: env::var("TOKEN_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_token_file()),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("static")),
        })
    }
}

/// Default location of the refresh token file in the platform-specific
/// local data directory.
///
/// - Linux: `~/.local/share/trackrewind/refresh_token.txt`
/// - macOS: `~/Library/Application Support/trackrewind/refresh_token.txt`
/// - Windows: `%LOCALAPPDATA%/trackrewind/refresh_token.txt`
fn default_token_file() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("trackrewind/refresh_token.txt");
    path
}
