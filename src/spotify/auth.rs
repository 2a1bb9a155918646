use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::{Client, Url};

use crate::{
    Res,
    config::{self, Credentials},
    error,
    errors::Error,
    server::{ServerState, start_api_server},
    success,
    types::{Token, TokenResponse},
    warning,
};

/// Runs the authorization-code flow once from the command line.
///
/// 1. Starts the local server that receives the redirect on [`config::REDIRECT_URI`]
/// 2. Opens the Spotify authorization page in the default browser
/// 3. Waits up to 60 seconds for the callback handler to store a token
///
/// The callback handler persists the token, so on success there is nothing
/// left to do here but report it.
pub async fn auth(shared_state: Arc<ServerState>) {
    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        if let Err(e) = start_api_server(server_state).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    let auth_url = match authorize_url(&shared_state.credentials, &shared_state.oauth_state) {
        Ok(url) => url,
        Err(e) => error!("Cannot build authorization URL: {}", e),
    };

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    match wait_for_token(shared_state).await {
        Some(_) => success!("Authentication successful!"),
        None => error!("Authentication failed or timed out."),
    }
}

/// Polls the shared state until the callback handler has stored a token.
///
/// Gives up after 60 seconds, checking once per second.
async fn wait_for_token(shared_state: Arc<ServerState>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.token.lock().await;
        if let Some(token_mgr) = lock.as_ref() {
            return Some(token_mgr.current_token().clone());
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Builds the Spotify authorization URL the user is sent to.
///
/// `state` is echoed back by Spotify on the redirect and checked by the
/// callback handler.
pub fn authorize_url(credentials: &Credentials, state: &str) -> Res<String> {
    let url = Url::parse_with_params(
        config::SPOTIFY_AUTH_URL,
        &[
            ("client_id", credentials.client_id()),
            ("response_type", "code"),
            ("redirect_uri", config::REDIRECT_URI),
            ("scope", config::SPOTIFY_SCOPE),
            ("state", state),
        ],
    )
    .map_err(|e| Error::Configuration(format!("invalid authorization URL: {}", e)))?;

    Ok(url.to_string())
}

/// Exchanges the authorization code from the redirect for a token.
pub async fn exchange_code(credentials: &Credentials, code: &str) -> Res<Token> {
    let res = request_token(
        config::SPOTIFY_TOKEN_URL,
        credentials,
        &[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config::REDIRECT_URI),
        ],
    )
    .await?;

    token_from_response(res, None)
        .ok_or_else(|| Error::Authentication("token response without refresh token".into()))
}

/// Trades a refresh token for a fresh access token.
///
/// Spotify usually omits the refresh token on this grant; the old one is kept
/// in that case.
pub async fn refresh_token(credentials: &Credentials, refresh_token: &str) -> Res<Token> {
    let res = request_token(
        config::SPOTIFY_TOKEN_URL,
        credentials,
        &[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ],
    )
    .await?;

    token_from_response(res, Some(refresh_token))
        .ok_or_else(|| Error::Authentication("token response without refresh token".into()))
}

/// Turns a token endpoint response into a [`Token`] stamped with the current time.
///
/// Returns `None` when neither the response nor `previous_refresh` carry a
/// refresh token.
pub fn token_from_response(res: TokenResponse, previous_refresh: Option<&str>) -> Option<Token> {
    let refresh_token = res
        .refresh_token
        .or_else(|| previous_refresh.map(str::to_string))?;

    Some(Token {
        access_token: res.access_token,
        refresh_token,
        scope: res.scope,
        expires_in: res.expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    })
}

/// POSTs a grant to the token endpoint with HTTP Basic client authentication.
///
/// Only a non-success answer from the endpoint (e.g. `invalid_grant`) is an
/// [`Error::Authentication`]; transport and decoding failures stay
/// [`Error::Api`].
pub async fn request_token(
    token_url: &str,
    credentials: &Credentials,
    form: &[(&str, &str)],
) -> Res<TokenResponse> {
    let client = Client::new();
    let res = client
        .post(token_url)
        .basic_auth(credentials.client_id(), Some(credentials.client_secret()))
        .form(form)
        .send()
        .await?;

    if !res.status().is_success() {
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        return Err(Error::Authentication(format!(
            "token request rejected: {} - {}",
            status, body
        )));
    }

    Ok(res.json::<TokenResponse>().await?)
}
