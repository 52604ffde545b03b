use std::future::Future;
use std::time::Instant;

use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::upstream::{BoxScorePayload, CareerStatsPayload, ScoreboardPayload};

#[cfg(test)]
pub mod fake;

// stats.nba.com rejects requests that do not look like they come from nba.com
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:72.0) Gecko/20100101 Firefox/72.0";
const REFERER: &str = "https://stats.nba.com/";
const ORIGIN: &str = "https://www.nba.com";

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with {status}")]
    Status { url: String, status: StatusCode },
    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("invalid base url {url}: {reason}")]
    BaseUrl { url: String, reason: String },
}

/// The three lookups the gateway needs from the NBA data services.
pub trait StatsProvider: Clone + Send + Sync + 'static {
    /// Today's live scoreboard.
    fn scoreboard(&self) -> impl Future<Output = Result<ScoreboardPayload, UpstreamError>> + Send;

    /// Live box score for one game.
    fn box_score(
        &self,
        game_id: &str,
    ) -> impl Future<Output = Result<BoxScorePayload, UpstreamError>> + Send;

    /// Career totals for one player, split into result sets.
    fn player_career_stats(
        &self,
        player_id: &str,
    ) -> impl Future<Output = Result<CareerStatsPayload, UpstreamError>> + Send;
}

/// HTTP client for the NBA live CDN and stats service.
#[derive(Debug, Clone)]
pub struct NbaClient {
    client: Client,
    live_base_url: Url,
    stats_base_url: Url,
}

fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    let url = Url::parse(raw).map_err(|e| ClientError::BaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ClientError::BaseUrl {
            url: raw.to_string(),
            reason: "not a hierarchical url".to_string(),
        });
    }
    Ok(url)
}

/// Appends path segments to `base`, percent-encoding each one so a caller
/// supplied id can not add segments or a query string.
fn join_segments(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

impl NbaClient {
    pub fn new(live_base_url: &str, stats_base_url: &str) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
        headers.insert(header::REFERER, HeaderValue::from_static(REFERER));
        headers.insert(header::ORIGIN, HeaderValue::from_static(ORIGIN));
        headers.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
        headers.insert("x-nba-stats-token", HeaderValue::from_static("true"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(NbaClient {
            client,
            live_base_url: parse_base_url(live_base_url)?,
            stats_base_url: parse_base_url(stats_base_url)?,
        })
    }

    fn box_score_url(&self, game_id: &str) -> Url {
        let file = format!("boxscore_{}.json", game_id);
        join_segments(&self.live_base_url, &["boxscore", &file])
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> Result<T, UpstreamError> {
        let before = Instant::now();

        let response = self
            .client
            .get(url.clone())
            .query(query)
            .send()
            .await
            .map_err(|source| UpstreamError::Transport { url: url.to_string(), source })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("[NBA] GET {} returned {}", url, status);
            return Err(UpstreamError::Status { url: url.to_string(), status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| UpstreamError::Transport { url: url.to_string(), source })?;

        tracing::info!("[NBA] GET {} {:.2?}", url, before.elapsed());

        serde_json::from_slice(&body).map_err(|source| UpstreamError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

impl StatsProvider for NbaClient {
    async fn scoreboard(&self) -> Result<ScoreboardPayload, UpstreamError> {
        let url = join_segments(&self.live_base_url, &["scoreboard", "todaysScoreboard_00.json"]);
        self.get_json(url, &[]).await
    }

    async fn box_score(&self, game_id: &str) -> Result<BoxScorePayload, UpstreamError> {
        self.get_json(self.box_score_url(game_id), &[]).await
    }

    async fn player_career_stats(&self, player_id: &str) -> Result<CareerStatsPayload, UpstreamError> {
        let url = join_segments(&self.stats_base_url, &["playercareerstats"]);
        self.get_json(
            url,
            &[("LeagueID", "00"), ("PerMode", "Totals"), ("PlayerID", player_id)],
        )
        .await
    }
}
