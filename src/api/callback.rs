use crate::{
    Res, errors::Error, management::TokenManager, server::ServerState, spotify, success,
};

/// Finishes the OAuth redirect: checks `state`, exchanges the code, then
/// persists the token and makes it the one in use.
pub async fn complete_authorization(
    shared_state: &ServerState,
    code: &str,
    returned_state: Option<&str>,
) -> Res<()> {
    if returned_state != Some(shared_state.oauth_state.as_str()) {
        return Err(Error::Authentication(
            "state mismatch on authorization callback".into(),
        ));
    }

    let token = spotify::auth::exchange_code(&shared_state.credentials, code).await?;
    let token_mgr = TokenManager::with_path(token, shared_state.token_path.clone());
    token_mgr.persist().await?;

    *shared_state.token.lock().await = Some(token_mgr);
    success!("Authorization callback completed.");
    Ok(())
}
