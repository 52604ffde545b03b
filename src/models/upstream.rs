//! Payloads returned by the NBA live CDN and the NBA stats service.
//!
//! Every field the gateway reads is optional upstream; missing keys and
//! explicit nulls decode to the documented default (0, "" or "Home"/"Away")
//! instead of failing.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

use super::{GamePlayerStats, Identifier, LiveGame, PlayerBoxScoreStats};
use crate::averages::{SeasonTotals, StatLine};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Scoreboard (todaysScoreboard_00.json)

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScoreboardPayload {
    pub scoreboard: Option<Scoreboard>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Scoreboard {
    pub games: Option<Vec<ScoreboardGame>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoreboardGame {
    #[serde(deserialize_with = "null_as_default")]
    pub game_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub game_status_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub home_team: ScoreboardTeam,
    #[serde(deserialize_with = "null_as_default")]
    pub away_team: ScoreboardTeam,
    #[serde(rename = "gameTimeUTC", deserialize_with = "null_as_default")]
    pub game_time_utc: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoreboardTeam {
    #[serde(deserialize_with = "null_as_default")]
    pub team_id: Identifier,
    #[serde(deserialize_with = "null_as_default")]
    pub score: i64,
}

impl ScoreboardPayload {
    /// Games on today's scoreboard; empty when the scoreboard or its game
    /// list is missing.
    pub fn into_live_games(self) -> Vec<LiveGame> {
        self.scoreboard
            .and_then(|s| s.games)
            .unwrap_or_default()
            .iter()
            .map(ScoreboardGame::to_live_game)
            .collect()
    }
}

impl ScoreboardGame {
    pub fn to_live_game(&self) -> LiveGame {
        LiveGame {
            game_id: self.game_id.clone(),
            game_status: self.game_status_text.clone(),
            home_team_id: self.home_team.team_id.clone(),
            home_score: self.home_team.score,
            away_team_id: self.away_team.team_id.clone(),
            away_score: self.away_team.score,
            game_time: self.game_time_utc.clone(),
        }
    }
}

// Box score (boxscore_{game_id}.json)

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BoxScorePayload {
    pub game: Option<BoxScoreGame>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoxScoreGame {
    #[serde(deserialize_with = "null_as_default")]
    pub home_team: BoxScoreTeam,
    #[serde(deserialize_with = "null_as_default")]
    pub away_team: BoxScoreTeam,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoxScoreTeam {
    pub team_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub players: Vec<BoxScorePlayer>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoxScorePlayer {
    #[serde(deserialize_with = "null_as_default")]
    pub person_id: Identifier,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(deserialize_with = "null_as_default")]
    pub team_tricode: String,
    #[serde(deserialize_with = "null_as_default")]
    pub statistics: BoxScoreStatistics,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoxScoreStatistics {
    #[serde(deserialize_with = "null_as_default")]
    pub points: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub rebounds_total: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub assists: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub steals: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub blocks: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub turnovers: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub minutes_calculated: String,
    #[serde(deserialize_with = "null_as_default")]
    pub field_goals_made: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub field_goals_attempted: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub three_pointers_made: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub three_pointers_attempted: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub free_throws_made: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub free_throws_attempted: i64,
}

impl BoxScoreGame {
    pub fn to_game_player_stats(&self, game_id: &str) -> GamePlayerStats {
        GamePlayerStats {
            game_id: game_id.to_string(),
            home_team: self.home_team.name_or("Home"),
            home_players: self.home_team.player_stats(),
            away_team: self.away_team.name_or("Away"),
            away_players: self.away_team.player_stats(),
        }
    }
}

impl BoxScoreTeam {
    fn name_or(&self, fallback: &str) -> String {
        self.team_name.clone().unwrap_or_else(|| fallback.to_string())
    }

    fn player_stats(&self) -> Vec<PlayerBoxScoreStats> {
        self.players.iter().map(BoxScorePlayer::to_player_stats).collect()
    }
}

impl BoxScorePlayer {
    pub fn to_player_stats(&self) -> PlayerBoxScoreStats {
        let s = &self.statistics;
        PlayerBoxScoreStats {
            player_id: self.person_id.clone(),
            name: self.name.clone(),
            position: self.position.clone(),
            team_tricode: self.team_tricode.clone(),
            points: s.points,
            rebounds: s.rebounds_total,
            assists: s.assists,
            steals: s.steals,
            blocks: s.blocks,
            turnovers: s.turnovers,
            minutes: s.minutes_calculated.clone(),
            field_goals_made: s.field_goals_made,
            field_goals_attempted: s.field_goals_attempted,
            three_pointers_made: s.three_pointers_made,
            three_pointers_attempted: s.three_pointers_attempted,
            free_throws_made: s.free_throws_made,
            free_throws_attempted: s.free_throws_attempted,
        }
    }
}

// Career stats (stats/playercareerstats)

pub const REGULAR_SEASON_TOTALS: &str = "SeasonTotalsRegularSeason";
pub const SEASON_ID: &str = "SEASON_ID";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerStatsPayload {
    pub result_sets: Vec<ResultSet>,
}

/// A named table of rows, each row positionally matching `headers`.
///
/// Only `name` is required; sets the gateway does not read may be partial.
#[derive(Debug, Deserialize)]
pub struct ResultSet {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub headers: Vec<String>,
    #[serde(default, rename = "rowSet", deserialize_with = "null_as_default")]
    pub row_set: Vec<Vec<Value>>,
}

#[derive(Debug, Error)]
#[error("result set {set} has no {column} column")]
pub struct MissingColumn {
    pub set: String,
    pub column: String,
}

/// One row keyed by column header.
#[derive(Debug)]
pub struct Record<'a> {
    fields: HashMap<&'a str, &'a Value>,
}

impl CareerStatsPayload {
    pub fn result_set(&self, name: &str) -> Option<&ResultSet> {
        self.result_sets.iter().find(|set| set.name == name)
    }
}

impl ResultSet {
    /// First row whose `column` cell is exactly the string `key`.
    pub fn find_record(&self, column: &str, key: &str) -> Result<Option<Record<'_>>, MissingColumn> {
        let index = self
            .headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| MissingColumn {
                set: self.name.clone(),
                column: column.to_string(),
            })?;

        Ok(self
            .row_set
            .iter()
            .find(|row| row.get(index).and_then(Value::as_str) == Some(key))
            .map(|row| self.record(row)))
    }

    fn record<'a>(&'a self, row: &'a [Value]) -> Record<'a> {
        Record {
            fields: self.headers.iter().map(String::as_str).zip(row).collect(),
        }
    }
}

impl Record<'_> {
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column).copied()
    }

    fn get_or(&self, column: &str, default: Value) -> Value {
        self.get(column).cloned().unwrap_or(default)
    }

    fn stat(&self, column: &str) -> Value {
        self.get_or(column, Value::from(0))
    }

    /// Season totals for this row; missing columns count as 0 (MIN as "0").
    pub fn to_season_totals(&self, season: &str) -> SeasonTotals {
        let player_id = match self.get("PLAYER_ID") {
            Some(Value::Number(n)) => n.as_i64().map(Identifier::Number).unwrap_or_default(),
            Some(Value::String(s)) => Identifier::Text(s.clone()),
            _ => Identifier::default(),
        };

        SeasonTotals {
            player_id,
            season: season.to_string(),
            games_played: self.stat("GP"),
            stats: StatLine {
                points: self.stat("PTS"),
                rebounds: self.stat("REB"),
                assists: self.stat("AST"),
                steals: self.stat("STL"),
                blocks: self.stat("BLK"),
                turnovers: self.stat("TOV"),
                minutes: self.get_or("MIN", Value::from("0")),
                field_goals_made: self.stat("FGM"),
                field_goals_attempted: self.stat("FGA"),
                three_pointers_made: self.stat("FG3M"),
                three_pointers_attempted: self.stat("FG3A"),
                free_throws_made: self.stat("FTM"),
                free_throws_attempted: self.stat("FTA"),
            },
        }
    }
}
