use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{Identifier, SeasonAverageStats};

/// The thirteen counting stats reported per player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatLine<T> {
    pub points: T,
    pub rebounds: T,
    pub assists: T,
    pub steals: T,
    pub blocks: T,
    pub turnovers: T,
    pub minutes: T,
    pub field_goals_made: T,
    pub field_goals_attempted: T,
    pub three_pointers_made: T,
    pub three_pointers_attempted: T,
    pub free_throws_made: T,
    pub free_throws_attempted: T,
}

impl<T> StatLine<T> {
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> StatLine<U> {
        StatLine {
            points: f(&self.points),
            rebounds: f(&self.rebounds),
            assists: f(&self.assists),
            steals: f(&self.steals),
            blocks: f(&self.blocks),
            turnovers: f(&self.turnovers),
            minutes: f(&self.minutes),
            field_goals_made: f(&self.field_goals_made),
            field_goals_attempted: f(&self.field_goals_attempted),
            three_pointers_made: f(&self.three_pointers_made),
            three_pointers_attempted: f(&self.three_pointers_attempted),
            free_throws_made: f(&self.free_throws_made),
            free_throws_attempted: f(&self.free_throws_attempted),
        }
    }
}

/// Season totals for one player, as read from the upstream row.
///
/// Stat values are kept as raw JSON so a non-numeric cell only zeroes its own
/// average instead of failing the whole request.
#[derive(Debug, Clone)]
pub struct SeasonTotals {
    pub player_id: Identifier,
    pub season: String,
    pub games_played: Value,
    pub stats: StatLine<Value>,
}

/// Per-game averages, rounded to two decimals.
///
/// Identifiers pass through untouched. When games played is zero (or not a
/// number) every stat is 0.
pub fn calculate_averages(totals: &SeasonTotals) -> SeasonAverageStats {
    let games_played = totals.games_played.as_f64().unwrap_or(0.0);

    SeasonAverageStats {
        player_id: totals.player_id.clone(),
        season: totals.season.clone(),
        stats: totals.stats.map(|total| per_game(total, games_played)),
    }
}

pub fn per_game(total: &Value, games_played: f64) -> f64 {
    if games_played == 0.0 {
        return 0.0;
    }
    match total.as_f64().map(|total| total / games_played) {
        Some(average) if average.is_finite() => round2(average),
        _ => 0.0,
    }
}

/// Rounds the exact binary value to two decimals, ties to even, so 25.125
/// becomes 25.12.
fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(0.0)
}
