use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, path::PathBuf, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{
    Res, api,
    config::{self, Credentials},
    errors::Error,
    info,
    management::TokenManager,
    utils,
};

/// State shared by the handlers and the `auth` command.
pub struct ServerState {
    pub credentials: Credentials,
    /// Per-process value for the OAuth `state` parameter.
    pub oauth_state: String,
    /// Token in use, filled by the callback or lazily from the disk cache.
    pub token: Mutex<Option<TokenManager>>,
    /// Where the token is cached on disk.
    pub token_path: PathBuf,
    /// `false` while only the `auth` command runs: the process exits after
    /// login, so the callback answers with a confirmation page.
    pub serve_dashboard: bool,
}

impl ServerState {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            oauth_state: utils::generate_state(),
            token: Mutex::new(None),
            token_path: TokenManager::token_path(),
            serve_dashboard: true,
        }
    }

    /// State for a login-only run of the server.
    pub fn for_login(credentials: Credentials) -> Self {
        Self {
            serve_dashboard: false,
            ..Self::new(credentials)
        }
    }

    pub fn with_token_path(mut self, token_path: PathBuf) -> Self {
        self.token_path = token_path;
        self
    }
}

pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(api::dashboard))
        .route("/health", get(api::health))
        .layer(Extension(state))
}

pub async fn start_api_server(state: Arc<ServerState>) -> Res<()> {
    let addr = SocketAddr::from_str(config::SERVER_ADDRESS)
        .map_err(|e| Error::Configuration(format!("Failed to parse server address: {}", e)))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Dashboard listening on {}", config::DASHBOARD_URL);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
