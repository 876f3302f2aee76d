use std::sync::Arc;

use axum::{Extension, http::StatusCode, response::Json};
use serde_json::{Value, json};

use crate::{
    management,
    spotify::{SpotifyError, TokenService},
    warning,
};

pub async fn older_tracks(
    Extension(tokens): Extension<Arc<TokenService>>,
) -> (StatusCode, Json<Value>) {
    match management::older_favorites(&tokens).await {
        Ok(tracks) => (StatusCode::OK, Json(json!({ "older_tracks": tracks }))),
        Err(SpotifyError::NotAuthenticated) => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Not authenticated" })),
        ),
        Err(e @ (SpotifyError::Expired | SpotifyError::Malformed(_))) => {
            warning!("Upstream protocol violation: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": "Invalid response from upstream service" })),
            )
        }
        Err(e) => {
            warning!("Failed to fetch tracks: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch tracks" })),
            )
        }
    }
}
