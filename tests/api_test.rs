use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Extension,
    extract::Query,
    http::{StatusCode, header::LOCATION},
};
use spotwrapped::api::{DashboardQuery, complete_authorization, dashboard, health};
use spotwrapped::config::Credentials;
use spotwrapped::errors::Error;
use spotwrapped::management::TokenManager;
use spotwrapped::server::ServerState;
use spotwrapped::types::Token;
use spotwrapped::utils;

fn test_credentials() -> Credentials {
    Credentials::from_lookup(|key| match key {
        "CLIENT_ID" => Some("client-123".to_string()),
        "CLIENT_SECRET" => Some("secret-456".to_string()),
        _ => None,
    })
    .unwrap()
}

// Token path in a fresh directory, so nothing cached on this machine leaks in
fn temp_token_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("spotwrapped-test-{}", utils::generate_state()))
        .join("token.json")
}

fn test_state() -> Arc<ServerState> {
    Arc::new(ServerState::new(test_credentials()).with_token_path(temp_token_path()))
}

fn create_test_token() -> Token {
    Token {
        access_token: "acc".to_string(),
        refresh_token: "ref".to_string(),
        scope: "user-top-read".to_string(),
        expires_in: 3600,
        obtained_at: 1_000,
    }
}

#[tokio::test]
async fn test_denied_authorization_is_authentication_error() {
    let state = test_state();
    let query = DashboardQuery {
        error: Some("access_denied".to_string()),
        ..Default::default()
    };

    let result = dashboard(Query(query), Extension(state.clone())).await;

    match result {
        Err(e @ Error::Authentication(_)) => {
            assert!(e.to_string().contains("access_denied"));
            assert_eq!(e.status(), StatusCode::UNAUTHORIZED);
        }
        other => panic!("unexpected result: {:?}", other.map(|r| r.status())),
    }
    assert!(state.token.lock().await.is_none());
}

#[tokio::test]
async fn test_callback_with_wrong_state_is_rejected() {
    let state = test_state();
    let query = DashboardQuery {
        code: Some("auth-code".to_string()),
        state: Some("forged".to_string()),
        ..Default::default()
    };

    let result = dashboard(Query(query), Extension(state.clone())).await;

    assert!(matches!(result, Err(Error::Authentication(_))));
    // Rejected before the code exchange: nothing stored, nothing written
    assert!(state.token.lock().await.is_none());
    assert!(!state.token_path.exists());
}

#[tokio::test]
async fn test_callback_without_state_is_rejected() {
    let state = test_state();
    let query = DashboardQuery {
        code: Some("auth-code".to_string()),
        ..Default::default()
    };

    let result = dashboard(Query(query), Extension(state.clone())).await;

    assert!(matches!(result, Err(Error::Authentication(_))));
    assert!(!state.token_path.exists());
}

#[tokio::test]
async fn test_no_token_redirects_to_authorize_url() {
    let state = test_state();

    let response = dashboard(Query(DashboardQuery::default()), Extension(state.clone()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get(LOCATION)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(location.starts_with("https://accounts.spotify.com/authorize?"));
    assert!(location.contains("client_id=client-123"));
    assert!(location.contains(&format!("state={}", state.oauth_state)));
    assert!(state.token.lock().await.is_none());
}

#[tokio::test]
async fn test_complete_authorization_checks_state_first() {
    let state = test_state();

    let mismatched = complete_authorization(&state, "auth-code", Some("forged")).await;
    let missing = complete_authorization(&state, "auth-code", None).await;

    assert!(matches!(mismatched, Err(Error::Authentication(_))));
    assert!(matches!(missing, Err(Error::Authentication(_))));
    assert!(state.token.lock().await.is_none());
    assert!(!state.token_path.exists());
}

#[tokio::test]
async fn test_health_reports_authentication() {
    let state = test_state();

    let body = health(Extension(state.clone())).await.0;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["authenticated"], false);

    *state.token.lock().await = Some(TokenManager::with_path(
        create_test_token(),
        state.token_path.clone(),
    ));

    let body = health(Extension(state)).await.0;
    assert_eq!(body["authenticated"], true);
}

#[test]
fn test_login_only_state_does_not_serve_dashboard() {
    assert!(ServerState::new(test_credentials()).serve_dashboard);
    assert!(!ServerState::for_login(test_credentials()).serve_dashboard);
}

#[tokio::test]
async fn test_token_cache_round_trip_and_clear() {
    let path = temp_token_path();

    TokenManager::with_path(create_test_token(), path.clone())
        .persist()
        .await
        .unwrap();
    let loaded = TokenManager::load_from(&path).await.unwrap();

    assert_eq!(loaded.path(), path.as_path());
    assert_eq!(loaded.current_token().access_token, "acc");
    assert_eq!(loaded.current_token().refresh_token, "ref");
    assert_eq!(loaded.current_token().obtained_at, 1_000);

    TokenManager::clear(&path).await.unwrap();
    assert!(!path.exists());
    // Clearing an absent cache is not an error
    TokenManager::clear(&path).await.unwrap();
    assert!(matches!(
        TokenManager::load_from(&path).await,
        Err(Error::Io(_))
    ));
}
