use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension,
    extract::Query,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{spotify::TokenService, success, warning};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(tokens): Extension<Arc<TokenService>>,
) -> Response {
    let Some(code) = params.get("code") else {
        return (
            StatusCode::BAD_REQUEST,
            Html("<h4>Missing authorization code.</h4>"),
        )
            .into_response();
    };

    // The access token is dropped here on purpose; data requests derive a
    // fresh one from the stored refresh token.
    match tokens.exchange_code(code).await {
        Ok(_) => {
            success!("Authorization successful!");
            Redirect::to("/").into_response()
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            (StatusCode::BAD_GATEWAY, Html("<h4>Login failed.</h4>")).into_response()
        }
    }
}
