use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{StatsProvider, UpstreamError};
use crate::models::upstream::{BoxScorePayload, CareerStatsPayload, ScoreboardPayload};

/// In-memory provider serving canned JSON. Anything not registered answers
/// with a 503 so handlers can be driven down their error paths.
#[derive(Clone, Default)]
pub struct FakeProvider {
    scoreboard: Option<Value>,
    box_scores: HashMap<String, Value>,
    career_stats: HashMap<String, Value>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeProvider {
    pub fn with_scoreboard(mut self, body: Value) -> Self {
        self.scoreboard = Some(body);
        self
    }

    pub fn with_box_score(mut self, game_id: &str, body: Value) -> Self {
        self.box_scores.insert(game_id.to_string(), body);
        self
    }

    pub fn with_career_stats(mut self, player_id: &str, body: Value) -> Self {
        self.career_stats.insert(player_id.to_string(), body);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn serve<T: DeserializeOwned>(&self, url: String, body: Option<&Value>) -> Result<T, UpstreamError> {
        self.requests.lock().unwrap().push(url.clone());
        let body = body.ok_or_else(|| UpstreamError::Status {
            url: url.clone(),
            status: StatusCode::SERVICE_UNAVAILABLE,
        })?;
        serde_json::from_value(body.clone()).map_err(|source| UpstreamError::Decode { url, source })
    }
}

impl StatsProvider for FakeProvider {
    async fn scoreboard(&self) -> Result<ScoreboardPayload, UpstreamError> {
        self.serve("fake://scoreboard".to_string(), self.scoreboard.as_ref())
    }

    async fn box_score(&self, game_id: &str) -> Result<BoxScorePayload, UpstreamError> {
        self.serve(format!("fake://boxscore/{game_id}"), self.box_scores.get(game_id))
    }

    async fn player_career_stats(&self, player_id: &str) -> Result<CareerStatsPayload, UpstreamError> {
        self.serve(format!("fake://playercareerstats/{player_id}"), self.career_stats.get(player_id))
    }
}
