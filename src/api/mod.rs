//! # API Module
//!
//! HTTP endpoints of the local dashboard server.
//!
//! - [`dashboard`] - `GET /`: renders the top-tracks page. Spotify redirects
//!   back to the same path after authorization (the registered redirect URI is
//!   `http://localhost:8000`), so it also completes the OAuth callback.
//! - [`health`] - `GET /health`: status and version.
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use spotwrapped::api::{dashboard, health};
//!
//! let app = Router::new()
//!     .route("/", get(dashboard))
//!     .route("/health", get(health));
//! ```

mod callback;
mod dashboard;
mod health;

pub use callback::complete_authorization;
pub use dashboard::DashboardQuery;
pub use dashboard::dashboard;
pub use health::health;
