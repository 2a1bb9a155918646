use std::future::Future;

use reqwest::Client;

use crate::{
    Res, config,
    config::Credentials,
    management::TokenManager,
    types::{Dashboard, TimeRange, TopTracks, TopTracksResponse, Track},
};

/// Number of tracks requested per ranking.
pub const TOP_TRACKS_LIMIT: u32 = 20;

/// Anything that can answer "what are the user's top tracks for this window".
pub trait TopTracksSource {
    fn top_tracks(
        &self,
        limit: u32,
        time_range: TimeRange,
    ) -> impl Future<Output = Res<Vec<Track>>> + Send;
}

/// Spotify Web API client bound to one valid access token.
pub struct SpotifyClient {
    http: Client,
    access_token: String,
}

impl SpotifyClient {
    /// Creates a client from the cached token, refreshing it first if needed.
    ///
    /// Requires [`Credentials`], so a client cannot exist without a complete
    /// configuration.
    pub async fn connect(credentials: &Credentials, token_mgr: &mut TokenManager) -> Res<Self> {
        let access_token = token_mgr.get_valid_token(credentials).await?;
        Ok(Self {
            http: Client::new(),
            access_token,
        })
    }

    /// `GET /me/top/tracks` for a single time range.
    ///
    /// Non-success statuses and network failures are returned as
    /// [`crate::errors::Error::Api`]; nothing is retried.
    pub async fn get_top_tracks(&self, limit: u32, time_range: TimeRange) -> Res<Vec<Track>> {
        let api_url = format!(
            "{uri}/me/top/tracks?limit={limit}&time_range={time_range}",
            uri = config::SPOTIFY_API_URL,
            limit = limit,
            time_range = time_range.as_str()
        );

        let res = self
            .http
            .get(&api_url)
            .bearer_auth(&self.access_token)
            .send()
            .await?
            .error_for_status()?;

        let res = res.json::<TopTracksResponse>().await?;
        Ok(res.items)
    }
}

impl TopTracksSource for SpotifyClient {
    async fn top_tracks(&self, limit: u32, time_range: TimeRange) -> Res<Vec<Track>> {
        self.get_top_tracks(limit, time_range).await
    }
}

/// Fetches both rankings, short term first, one after the other.
///
/// The first failure aborts the whole dashboard.
pub async fn fetch_dashboard<S>(source: &S) -> Res<Dashboard>
where
    S: TopTracksSource + Sync,
{
    let recent = fetch_top_tracks(source, TimeRange::ShortTerm).await?;
    let all_time = fetch_top_tracks(source, TimeRange::LongTerm).await?;

    Ok(Dashboard { recent, all_time })
}

pub async fn fetch_top_tracks<S>(source: &S, time_range: TimeRange) -> Res<TopTracks>
where
    S: TopTracksSource + Sync,
{
    let tracks = source.top_tracks(TOP_TRACKS_LIMIT, time_range).await?;
    Ok(TopTracks { time_range, tracks })
}

/// Fetches one ranking, or both when `time_range` is `None`.
///
/// Either every requested ranking is returned or the first error is, so a
/// caller never prints a partial result.
pub async fn fetch_sections<S>(source: &S, time_range: Option<TimeRange>) -> Res<Vec<TopTracks>>
where
    S: TopTracksSource + Sync,
{
    match time_range {
        Some(r) => Ok(vec![fetch_top_tracks(source, r).await?]),
        None => {
            let dashboard = fetch_dashboard(source).await?;
            Ok(vec![dashboard.recent, dashboard.all_time])
        }
    }
}
