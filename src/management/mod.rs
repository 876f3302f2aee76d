mod favorites;
mod token;

pub use favorites::TOP_TRACKS_LIMIT;
pub use favorites::older_favorites;
pub use favorites::older_tracks;
pub use token::TokenStore;
