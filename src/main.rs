use std::sync::Arc;

use trackrewind::{
    config::{self, Config},
    error,
    management::TokenStore,
    server, spotify::TokenService,
    warning,
};

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load .env file: {}", e);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Invalid configuration: {}", e),
    };

    let store = TokenStore::new(config.token_file.clone());
    let tokens = Arc::new(TokenService::new(config, store));

    server::start_api_server(tokens).await;
}
