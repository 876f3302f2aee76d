use std::sync::Arc;

use axum::{
    Extension,
    extract::Path,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};

use crate::{spotify::TokenService, warning};

pub async fn home(Extension(tokens): Extension<Arc<TokenService>>) -> Response {
    let path = tokens.config().static_dir.join("index.html");

    match async_fs::read_to_string(&path).await {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            warning!("Cannot read landing page {}: {}", path.display(), e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<h4>Landing page unavailable.</h4>"),
            )
                .into_response()
        }
    }
}

pub async fn static_file(
    Path(file): Path<String>,
    Extension(tokens): Extension<Arc<TokenService>>,
) -> Response {
    // Single flat asset directory; anything that looks like a path is out.
    if file.contains('/') || file.contains('\\') || file.contains("..") {
        return StatusCode::NOT_FOUND.into_response();
    }

    let path = tokens.config().static_dir.join(&file);

    match async_fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type(&file))], bytes).into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

fn content_type(file: &str) -> &'static str {
    match file.rsplit('.').next() {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "text/javascript",
        Some("css") => "text/css",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}
