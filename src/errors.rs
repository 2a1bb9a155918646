use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::render;

/// Every failure that can abort a page load or a CLI command.
///
/// There is no recovery for any of these: the server answers with an error
/// page, the CLI prints the message and exits.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Spotify API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed data: {0}")]
    Serde(#[from] serde_json::Error),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Authentication(_) => StatusCode::UNAUTHORIZED,
            Error::Api(_) => StatusCode::BAD_GATEWAY,
            Error::Configuration(_) | Error::Io(_) | Error::Serde(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        crate::warning!("{}", self);
        (self.status(), Html(render::error_page(&self))).into_response()
    }
}
