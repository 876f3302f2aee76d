use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{api, error, info, spotify::TokenService};

pub fn router(tokens: Arc<TokenService>) -> Router {
    Router::new()
        .route("/", get(api::home))
        .route("/static/{file}", get(api::static_file))
        .route("/auth", get(api::auth))
        .route("/callback", get(api::callback))
        .route("/api/older-tracks", get(api::older_tracks))
        .route("/health", get(api::health))
        .layer(Extension(tokens))
}

pub async fn start_api_server(tokens: Arc<TokenService>) {
    let addr = match SocketAddr::from_str(&tokens.config().server_addr) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let app = router(tokens);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    info!("Listening on http://{}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}
