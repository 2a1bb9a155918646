use std::sync::Arc;

use crate::{config::Credentials, server::ServerState, spotify};

pub async fn auth(credentials: Credentials) {
    let shared_state = Arc::new(ServerState::for_login(credentials));
    spotify::auth::auth(shared_state).await;
}
