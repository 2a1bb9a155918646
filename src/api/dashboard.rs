use std::sync::Arc;

use axum::{
    Extension,
    extract::Query,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{
    errors::Error,
    management::TokenManager,
    render,
    server::ServerState,
    spotify::{
        self,
        tracks::{SpotifyClient, fetch_dashboard},
    },
};

use super::callback::complete_authorization;

/// Query of `GET /`. Spotify redirects here with `code`/`state` or `error`.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// `GET /` - the dashboard page, also the OAuth redirect target.
pub async fn dashboard(
    Query(params): Query<DashboardQuery>,
    Extension(shared_state): Extension<Arc<ServerState>>,
) -> Result<Response, Error> {
    if let Some(err) = params.error {
        return Err(Error::Authentication(format!(
            "authorization denied: {}",
            err
        )));
    }

    if let Some(code) = params.code {
        complete_authorization(&shared_state, &code, params.state.as_deref()).await?;
        if !shared_state.serve_dashboard {
            return Ok(Html(render::login_complete_page()).into_response());
        }
        return Ok(Redirect::to("/").into_response());
    }

    let mut slot = shared_state.token.lock().await;
    if slot.is_none() {
        *slot = TokenManager::load_from(&shared_state.token_path).await.ok();
    }

    let Some(token_mgr) = slot.as_mut() else {
        let auth_url =
            spotify::auth::authorize_url(&shared_state.credentials, &shared_state.oauth_state)?;
        return Ok(Redirect::to(&auth_url).into_response());
    };

    let client = match SpotifyClient::connect(&shared_state.credentials, token_mgr).await {
        Ok(c) => c,
        Err(e @ Error::Authentication(_)) => {
            // refresh rejected, log in from scratch next time
            *slot = None;
            TokenManager::clear(&shared_state.token_path).await?;
            return Err(e);
        }
        Err(e) => return Err(e),
    };
    drop(slot);

    let dashboard = fetch_dashboard(&client).await?;
    Ok(Html(render::dashboard_page(&dashboard)).into_response())
}
