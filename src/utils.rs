use rand::{Rng, distr::Alphanumeric};

use crate::types::{Track, TrackLink, TrackTableRow};

pub const SPOTIFY_TRACK_URL: &str = "https://open.spotify.com/track";

/// Random value for the OAuth `state` parameter.
pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

pub fn join_artists(track: &Track) -> String {
    track
        .artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn track_url(track_id: &str) -> String {
    format!("{}/{}", SPOTIFY_TRACK_URL, track_id)
}

/// Projects tracks to name/artist rows, keeping the ranking order.
pub fn build_track_table(tracks: &[Track]) -> Vec<TrackTableRow> {
    tracks
        .iter()
        .map(|t| TrackTableRow {
            name: t.name.clone(),
            artists: join_artists(t),
        })
        .collect()
}

pub fn build_track_links(tracks: &[Track]) -> Vec<TrackLink> {
    tracks
        .iter()
        .map(|t| TrackLink {
            name: t.name.clone(),
            url: track_url(&t.id),
            artists: join_artists(t),
        })
        .collect()
}

/// `[name](url) by artists`
pub fn markdown_link(link: &TrackLink) -> String {
    format!("[{}]({}) by {}", link.name, link.url, link.artists)
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
