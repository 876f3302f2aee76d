use std::sync::Arc;

use axum::{Extension, response::Redirect};

use crate::spotify::TokenService;

pub async fn auth(Extension(tokens): Extension<Arc<TokenService>>) -> Redirect {
    Redirect::to(&tokens.authorize_url())
}
