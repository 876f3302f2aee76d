use std::time::Duration;

use reqwest::Client;

use crate::{
    config::Config,
    management::TokenStore,
    types::{AccessToken, TokenResponse},
};

use super::SpotifyError;

/// Bounded timeout applied to every outbound call so a stalled upstream
/// cannot hang a request indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Performs OAuth 2.0 token grants against the Spotify accounts service.
///
/// Holds the static application configuration, the shared HTTP client, and
/// the durable credential store. Constructed once at startup and shared
/// across requests; credentials are never read from ambient process state
/// at call time.
///
/// Access tokens are ephemeral: each one lives for the outbound call
/// sequence it was derived for and is never persisted. Only the refresh
/// token is durable, and it is owned by the [`TokenStore`].
pub struct TokenService {
    client: Client,
    config: Config,
    store: TokenStore,
}

impl TokenService {
    /// Creates the service with a shared HTTP client carrying the bounded
    /// request timeout.
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized, which makes the
    /// process unusable anyway.
    pub fn new(config: Config, store: TokenStore) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to initialize HTTP client");

        TokenService {
            client,
            config,
            store,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    /// Builds the provider authorization URL the user is redirected to for
    /// consent.
    ///
    /// Requests an authorization code for the configured redirect URI and
    /// the `user-top-read` scope.
    pub fn authorize_url(&self) -> String {
        format!(
            "{auth_url}?response_type=code&client_id={client_id}&redirect_uri={redirect_uri}&scope={scope}",
            auth_url = self.config.auth_url,
            client_id = self.config.client_id,
            redirect_uri = self.config.redirect_uri,
            scope = self.config.scope,
        )
    }

    /// Exchanges a single-use authorization code for credentials.
    ///
    /// Posts a `grant_type=authorization_code` request authenticated with
    /// the application's client ID and secret via HTTP Basic auth. The
    /// redirect URI must exactly match the one used to initiate
    /// authorization.
    ///
    /// If the provider issues a refresh token it is persisted before the
    /// access token is returned; on repeat authorizations the provider may
    /// omit it, in which case the previously stored value remains in place.
    ///
    /// # Errors
    ///
    /// - [`SpotifyError::Malformed`] if the response body lacks
    ///   `access_token` or otherwise fails to decode
    /// - [`SpotifyError::Http`] on transport failures or error statuses
    /// - [`SpotifyError::Store`] if persisting the refresh token fails
    pub async fn exchange_code(&self, code: &str) -> Result<AccessToken, SpotifyError> {
        let res = self
            .client
            .post(&self.config.token_url)
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.config.redirect_uri.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let tokens = res.json::<TokenResponse>().await?;

        if let Some(refresh_token) = &tokens.refresh_token {
            self.store.save(refresh_token).await?;
        }

        Ok(AccessToken(tokens.access_token))
    }

    /// Derives a fresh access token from the persisted refresh token.
    ///
    /// Returns `Ok(None)` without any network call when no refresh token is
    /// on file; that is the backend's "not authenticated" signal, not an
    /// error. Otherwise posts a `grant_type=refresh_token` request and
    /// returns the new access token.
    ///
    /// If the provider rotates the refresh token, the rotated value is
    /// persisted so both grant paths keep the store consistent.
    ///
    /// # Errors
    ///
    /// Same classes as [`TokenService::exchange_code`].
    pub async fn refresh_access_token(&self) -> Result<Option<AccessToken>, SpotifyError> {
        let Some(refresh_token) = self.store.load().await? else {
            return Ok(None);
        };

        let res = self
            .client
            .post(&self.config.token_url)
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let tokens = res.json::<TokenResponse>().await?;

        if let Some(rotated) = &tokens.refresh_token {
            self.store.save(rotated).await?;
        }

        Ok(Some(AccessToken(tokens.access_token)))
    }
}
