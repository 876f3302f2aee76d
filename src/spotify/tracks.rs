use reqwest::{Response, StatusCode};

use crate::{
    info,
    types::{AccessToken, TimeRange, TopTracksResponse, Track, TrackItem},
    warning,
};

use super::{SpotifyError, TokenService};

/// Retrieves the user's top tracks for one ranking window from the Spotify
/// Web API.
///
/// Derives a fresh bearer credential via [`TokenService::refresh_access_token`]
/// before the request; a missing refresh credential short-circuits to
/// [`SpotifyError::NotAuthenticated`] without touching the network.
///
/// # Arguments
///
/// * `tokens` - Token service used to derive bearer credentials
/// * `time_range` - Provider ranking window to query
/// * `limit` - Maximum number of tracks to return (1-50)
///
/// # Returns
///
/// The ranked track list in the provider's relevance order, each item
/// normalized into a [`Track`] record.
///
/// # Retry Logic
///
/// A 401 response means the bearer credential expired between refresh and
/// use; the function derives one more fresh credential and retries the
/// request exactly once. A second 401 is classified as
/// [`SpotifyError::Expired`] rather than fed to the response decoder, so an
/// upstream error body is never mistaken for track data. Other error
/// statuses propagate immediately.
pub async fn get_top_tracks(
    tokens: &TokenService,
    time_range: TimeRange,
    limit: u8,
) -> Result<Vec<Track>, SpotifyError> {
    let Some(token) = tokens.refresh_access_token().await? else {
        return Err(SpotifyError::NotAuthenticated);
    };

    info!(
        "Fetching top {} tracks for time range: {}...",
        limit,
        time_range.as_str()
    );

    let mut response = send_top_tracks_request(tokens, &token, time_range, limit).await?;

    if response.status() == StatusCode::UNAUTHORIZED {
        warning!("Access token expired. Refreshing token...");

        let Some(token) = tokens.refresh_access_token().await? else {
            return Err(SpotifyError::NotAuthenticated);
        };

        response = send_top_tracks_request(tokens, &token, time_range, limit).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(SpotifyError::Expired);
        }
    }

    let res = response
        .error_for_status()?
        .json::<TopTracksResponse>()
        .await?;

    let tracks: Vec<Track> = res.items.into_iter().map(TrackItem::normalize).collect();
    info!("Fetched {} tracks.", tracks.len());

    Ok(tracks)
}

async fn send_top_tracks_request(
    tokens: &TokenService,
    token: &AccessToken,
    time_range: TimeRange,
    limit: u8,
) -> Result<Response, SpotifyError> {
    let api_url = format!(
        "{uri}/me/top/tracks?limit={limit}&time_range={time_range}",
        uri = tokens.config().api_url,
        limit = limit,
        time_range = time_range.as_str(),
    );

    let response = tokens
        .http()
        .get(&api_url)
        .bearer_auth(token.secret())
        .send()
        .await?;

    Ok(response)
}
