use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config::Credentials,
    error, info,
    management::TokenManager,
    spotify::tracks::{SpotifyClient, fetch_sections},
    types::TimeRange,
    utils, warning,
};

/// Prints the top-track table for one or both time ranges.
///
/// Uses the token cached by `spotwrapped auth`; without one the command stops
/// before any request is made. With `links` the markdown links
/// (`[name](https://open.spotify.com/track/{id}) by artists`) follow each table.
pub async fn tracks(credentials: Credentials, time_range: Option<TimeRange>, links: bool) {
    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run spotwrapped auth\n Error: {}",
                e
            );
        }
    };

    let client = match SpotifyClient::connect(&credentials, &mut token_mgr).await {
        Ok(c) => c,
        Err(e) => error!("Cannot create Spotify client. Err: {}", e),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching top tracks...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let fetched = fetch_sections(&client, time_range).await;
    pb.finish_and_clear();

    let sections = match fetched {
        Ok(s) => s,
        Err(e) => error!("Failed to fetch top tracks: {}", e),
    };

    for section in sections {
        info!("{}", section.time_range.table_heading());
        if section.tracks.is_empty() {
            warning!("No top tracks for {} yet.", section.time_range);
            continue;
        }

        println!("{}", Table::new(utils::build_track_table(&section.tracks)));

        if links {
            info!("{}:", section.time_range.links_heading());
            for link in utils::build_track_links(&section.tracks) {
                println!("{}", utils::markdown_link(&link));
            }
        }
    }
}
