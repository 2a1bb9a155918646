//! # CLI Module
//!
//! User-facing commands of the `spotwrapped` binary:
//!
//! - [`serve`] - Run the local dashboard on `http://localhost:8000`
//! - [`auth`] - Authorize once with Spotify and cache the token
//! - [`tracks`] - Print the top-track tables in the terminal
//!
//! Each command takes already loaded [`crate::config::Credentials`]; the
//! binary refuses to start any of them when `CLIENT_ID` or `CLIENT_SECRET`
//! is missing. Failures are fatal and reported through the `error!` macro.
//!
//! ```bash
//! spotwrapped auth                        # sign in once
//! spotwrapped serve                       # open the dashboard
//! spotwrapped tracks --time-range long-term --links
//! ```

mod auth;
mod serve;
mod tracks;

pub use auth::auth;
pub use serve::serve;
pub use tracks::tracks;
