use std::sync::Arc;

use axum::{Extension, response::Json};
use serde_json::{Value, json};

use crate::server::ServerState;

/// `GET /health` - reports whether a token is currently loaded.
pub async fn health(Extension(shared_state): Extension<Arc<ServerState>>) -> Json<Value> {
    let authenticated = shared_state.token.lock().await.is_some();

    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "authenticated": authenticated
    }))
}
