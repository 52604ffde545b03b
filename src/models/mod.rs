use serde::{Deserialize, Serialize};

use crate::averages::StatLine;

pub mod upstream;

/// An upstream identifier. The NBA feeds send numeric ids; a missing id is
/// reported as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Number(i64),
    Text(String),
}

impl Default for Identifier {
    fn default() -> Self {
        Identifier::Text(String::new())
    }
}

/// Game summary for the live games listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveGame {
    pub game_id: String,
    pub game_status: String,
    pub home_team_id: Identifier,
    pub home_score: i64,
    pub away_team_id: Identifier,
    pub away_score: i64,
    /// UTC timestamp as sent upstream
    pub game_time: String,
}

/// Response wrapper for live games endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct LiveGamesResponse {
    pub live_games: Vec<LiveGame>,
}

/// One player's line in a single game's box score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerBoxScoreStats {
    pub player_id: Identifier,
    pub name: String,
    pub position: String,
    pub team_tricode: String,
    pub points: i64,
    pub rebounds: i64,
    pub assists: i64,
    pub steals: i64,
    pub blocks: i64,
    pub turnovers: i64,
    /// Already formatted upstream, e.g. "PT34M"
    pub minutes: String,
    pub field_goals_made: i64,
    pub field_goals_attempted: i64,
    pub three_pointers_made: i64,
    pub three_pointers_attempted: i64,
    pub free_throws_made: i64,
    pub free_throws_attempted: i64,
}

/// Box score for both teams of a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GamePlayerStats {
    pub game_id: String,
    pub home_team: String,
    pub home_players: Vec<PlayerBoxScoreStats>,
    pub away_team: String,
    pub away_players: Vec<PlayerBoxScoreStats>,
}

/// `player_stats` is serialized as `{}` when upstream has no game data.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PlayerStatsBody {
    Game(GamePlayerStats),
    Empty {},
}

/// Response wrapper for game player stats endpoint
#[derive(Debug, Serialize)]
pub struct PlayerStatsResponse {
    pub player_stats: PlayerStatsBody,
}

/// Current-season per-game averages for a player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonAverageStats {
    pub player_id: Identifier,
    pub season: String,
    #[serde(flatten)]
    pub stats: StatLine<f64>,
}

/// Response wrapper for season average endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct SeasonAverageResponse {
    pub season_average_stats: SeasonAverageStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn identifier_keeps_upstream_type() {
        assert_eq!(serde_json::to_value(Identifier::Number(1628983)).unwrap(), json!(1628983));
        assert_eq!(serde_json::to_value(Identifier::default()).unwrap(), json!(""));
        assert_eq!(
            serde_json::from_value::<Identifier>(json!("1610612747")).unwrap(),
            Identifier::Text("1610612747".to_string())
        );
    }

    #[test]
    fn missing_game_serializes_as_empty_object() {
        let body = PlayerStatsResponse { player_stats: PlayerStatsBody::Empty {} };
        assert_eq!(serde_json::to_value(body).unwrap(), json!({ "player_stats": {} }));
    }

    #[test]
    fn season_averages_are_flat() {
        let stats = SeasonAverageStats {
            player_id: Identifier::Number(2544),
            season: "2024-25".to_string(),
            stats: StatLine { points: 24.4, ..StatLine::default() },
        };
        let value = serde_json::to_value(stats).unwrap();

        assert_eq!(value["player_id"], json!(2544));
        assert_eq!(value["season"], json!("2024-25"));
        assert_eq!(value["points"], json!(24.4));
        assert_eq!(value["free_throws_attempted"], json!(0.0));
        assert_eq!(value.as_object().unwrap().len(), 15);
    }
}
