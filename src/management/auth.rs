use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::{Res, config, config::Credentials, spotify, types::Token};

/// Refresh this many seconds before Spotify would reject the token.
pub const EXPIRY_MARGIN_SECS: u64 = 240;

pub struct TokenManager {
    token: Token,
    path: PathBuf,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        Self::with_path(token, Self::token_path())
    }

    pub fn with_path(token: Token, path: PathBuf) -> Self {
        TokenManager { token, path }
    }

    pub async fn load() -> Res<Self> {
        Self::load_from(&Self::token_path()).await
    }

    pub async fn load_from(path: &Path) -> Res<Self> {
        let content = async_fs::read_to_string(path).await?;
        let token: Token = serde_json::from_str(&content)?;
        Ok(Self::with_path(token, path.to_path_buf()))
    }

    pub async fn persist(&self) -> Res<()> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.token)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Forgets the cached token so the next page load starts a new login.
    pub async fn clear(path: &Path) -> Res<()> {
        match async_fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Returns an access token that is still valid, refreshing and persisting
    /// it first when it is about to expire.
    pub async fn get_valid_token(&mut self, credentials: &Credentials) -> Res<String> {
        if self.is_expired() {
            let new_token =
                spotify::auth::refresh_token(credentials, &self.token.refresh_token).await?;
            self.token = new_token;
            self.persist().await?;
        }

        Ok(self.token.access_token.clone())
    }

    fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp() as u64)
    }

    pub fn is_expired_at(&self, now: u64) -> bool {
        let lifetime = self.token.expires_in.saturating_sub(EXPIRY_MARGIN_SECS);
        now >= self.token.obtained_at.saturating_add(lifetime)
    }

    /// Default cache location, `<data dir>/spotwrapped/cache/token.json`.
    pub fn token_path() -> PathBuf {
        config::data_dir().join("cache/token.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }
}
