use serde::{Deserialize, Serialize};

/// Provider-defined ranking window for top-item queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    Short,
    Medium,
    Long,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Short => "short_term",
            TimeRange::Medium => "medium_term",
            TimeRange::Long => "long_term",
        }
    }
}

/// Short-lived bearer credential. Never persisted; discarded after the
/// request sequence it was obtained for.
#[derive(Debug, Clone)]
pub struct AccessToken(pub String);

impl AccessToken {
    pub fn secret(&self) -> &str {
        &self.0
    }
}

/// Token endpoint response. `refresh_token` may be omitted on repeat
/// authorizations and on refresh grants that do not rotate.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

/// Normalized track record served to the front-end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub song: String,
    pub artist: String,
    pub album: String,
    pub popularity: u8,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopTracksResponse {
    pub items: Vec<TrackItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackItem {
    pub name: String,
    pub artists: Vec<TrackArtist>,
    pub album: TrackAlbum,
    pub popularity: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackAlbum {
    pub name: String,
    #[serde(default)]
    pub images: Vec<AlbumImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumImage {
    pub url: String,
}

impl TrackItem {
    /// Flattens the API item into the served record: first listed artist,
    /// first album image if any.
    pub fn normalize(self) -> Track {
        let artist = self
            .artists
            .into_iter()
            .next()
            .map(|a| a.name)
            .unwrap_or_default();
        let image = self.album.images.into_iter().next().map(|i| i.url);

        Track {
            song: self.name,
            artist,
            album: self.album.name,
            popularity: self.popularity,
            image,
        }
    }
}
