use std::collections::HashSet;

use crate::{
    info,
    spotify::{SpotifyError, TokenService, get_top_tracks},
    types::{TimeRange, Track},
};

/// How many tracks to request per ranking window. 50 is the API maximum.
pub const TOP_TRACKS_LIMIT: u8 = 50;

/// Computes the tracks favored over the long horizon that have fallen out
/// of the medium-horizon favorites.
///
/// Fetches both ranked lists sequentially; the long-horizon fetch is only
/// attempted once the medium-horizon fetch has succeeded. Any fetch failure
/// propagates unchanged so the caller never sees a partial result. An empty
/// difference is a successful, empty list.
pub async fn older_favorites(tokens: &TokenService) -> Result<Vec<Track>, SpotifyError> {
    let medium = get_top_tracks(tokens, TimeRange::Medium, TOP_TRACKS_LIMIT).await?;
    let long = get_top_tracks(tokens, TimeRange::Long, TOP_TRACKS_LIMIT).await?;

    let older = older_tracks(&medium, long);
    info!("Computed {} older favorite tracks", older.len());

    Ok(older)
}

/// Set difference over song names: long-horizon tracks whose song does not
/// appear in the medium-horizon list, in long-horizon ranking order.
///
/// Song names compare case-sensitively; the provider is treated as the
/// authority on naming.
pub fn older_tracks(medium: &[Track], long: Vec<Track>) -> Vec<Track> {
    let recent: HashSet<&str> = medium.iter().map(|t| t.song.as_str()).collect();

    long.into_iter()
        .filter(|t| !recent.contains(t.song.as_str()))
        .collect()
}
