use std::sync::Arc;

use crate::{
    config::{self, Credentials},
    error,
    server::{ServerState, start_api_server},
    warning,
};

/// Runs the dashboard server until the process is stopped.
///
/// With `open_browser` the dashboard is opened right away; on first use the
/// page redirects to the Spotify login.
pub async fn serve(credentials: Credentials, open_browser: bool) {
    let shared_state = Arc::new(ServerState::new(credentials));
    let server = tokio::spawn(start_api_server(Arc::clone(&shared_state)));

    if open_browser && webbrowser::open(config::DASHBOARD_URL).is_err() {
        warning!(
            "Failed to open browser. Please navigate to {} manually.",
            config::DASHBOARD_URL
        );
    }

    match server.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!("Dashboard server failed: {}", e),
        Err(e) => error!("Dashboard server task failed: {}", e),
    }
}
