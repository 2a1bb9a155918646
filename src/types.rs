use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// Raw body of a successful call to the token endpoint.
///
/// `refresh_token` is omitted by Spotify on most refresh grants.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: String,
    pub expires_in: u64,
}

/// Ranking window accepted by the top-items endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    /// Roughly the last 4 weeks
    ShortTerm,
    /// Several years of listening history
    LongTerm,
}

impl TimeRange {
    pub const ALL: [TimeRange; 2] = [TimeRange::ShortTerm, TimeRange::LongTerm];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::ShortTerm => "short_term",
            TimeRange::LongTerm => "long_term",
        }
    }

    /// Heading shown above the table.
    pub fn table_heading(&self) -> &'static str {
        match self {
            TimeRange::ShortTerm => "Recent Top 20",
            TimeRange::LongTerm => "All Time Top 20",
        }
    }

    /// Heading shown above the list of links.
    pub fn links_heading(&self) -> &'static str {
        match self {
            TimeRange::ShortTerm => "Your Top Songs (Last 4 Weeks)",
            TimeRange::LongTerm => "Your Top Songs (All Time)",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    pub items: Vec<Track>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artists: Vec<TrackArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "Track Name")]
    pub name: String,
    #[tabled(rename = "Artists")]
    pub artists: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackLink {
    pub name: String,
    pub url: String,
    pub artists: String,
}

/// One fetched ranking, kept together with the window it was fetched for.
#[derive(Debug, Clone)]
pub struct TopTracks {
    pub time_range: TimeRange,
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub recent: TopTracks,
    pub all_time: TopTracks,
}

impl Dashboard {
    pub fn sections(&self) -> [&TopTracks; 2] {
        [&self.recent, &self.all_time]
    }
}
