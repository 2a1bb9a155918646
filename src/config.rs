//! Configuration for spotwrapped.
//!
//! Spotify credentials come from the process environment. Before they are read,
//! two optional `.env` files are loaded (variables already set win):
//! 1. `.env` in the current working directory
//! 2. `.env` in the local data directory (`~/.local/share/spotwrapped/.env` on Linux)
//!
//! Everything else (redirect URI, scope, endpoints) is fixed.

use std::{env, path::PathBuf};

use crate::{Res, errors::Error};

/// Callback address registered with the Spotify application.
pub const REDIRECT_URI: &str = "http://localhost:8000";

/// Address the dashboard server binds to; must match [`REDIRECT_URI`].
pub const SERVER_ADDRESS: &str = "127.0.0.1:8000";

/// Dashboard URL opened in the browser by `serve`.
pub const DASHBOARD_URL: &str = "http://localhost:8000/";

pub const SPOTIFY_SCOPE: &str = "user-top-read user-library-read playlist-read-private";
pub const SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

pub const CLIENT_ID_VAR: &str = "CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "CLIENT_SECRET";

/// Loads the optional `.env` files into the process environment.
///
/// Missing files are not an error. A file that exists but cannot be parsed is
/// reported as a configuration error.
///
/// # Example
///
/// ```
/// use spotwrapped::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Res<()> {
    let cwd_env = PathBuf::from(".env");
    if cwd_env.is_file() {
        dotenv::from_path(&cwd_env).map_err(|e| Error::Configuration(e.to_string()))?;
    }

    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }
    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| Error::Configuration(e.to_string()))?;
    }

    Ok(())
}

/// Local data directory of the application, e.g. `~/.local/share/spotwrapped`.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotwrapped");
    path
}

/// Client credentials of the registered Spotify application.
///
/// The only way to obtain one is through [`Credentials::from_env`] or
/// [`Credentials::from_lookup`], so a Spotify client can never be built
/// without both values present.
#[derive(Debug, Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    /// Reads `CLIENT_ID` and `CLIENT_SECRET` from the process environment.
    pub fn from_env() -> Res<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds credentials from an arbitrary key lookup.
    ///
    /// Unset and empty values are both treated as missing.
    pub fn from_lookup<F>(lookup: F) -> Res<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| -> Res<String> {
            match lookup(key) {
                Some(value) if !value.trim().is_empty() => Ok(value),
                _ => Err(Error::Configuration(format!("{} must be set", key))),
            }
        };

        Ok(Self {
            client_id: require(CLIENT_ID_VAR)?,
            client_secret: require(CLIENT_SECRET_VAR)?,
        })
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}
