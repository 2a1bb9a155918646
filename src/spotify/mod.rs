//! # Spotify Integration Module
//!
//! Thin layer over the Spotify Web API:
//!
//! - [`auth`] - Authorization-code OAuth flow: authorize URL, code exchange,
//!   token refresh and the interactive `auth` command flow
//! - [`tracks`] - The top-tracks endpoint and the dashboard fetch built on it
//!
//! All requests go through `reqwest`. There is no retry or backoff: a failed
//! request is returned to the caller as is.

pub mod auth;
pub mod tracks;
