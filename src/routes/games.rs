use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::error::{ApiError, Endpoint};
use crate::models::{LiveGamesResponse, PlayerStatsBody, PlayerStatsResponse};
use crate::nba::StatsProvider;

/// GET /live_games - Games on today's scoreboard
///
/// A scoreboard without a game list yields an empty `live_games`.
pub async fn get_live_games<P: StatsProvider>(
    State(provider): State<P>,
) -> Result<Json<LiveGamesResponse>, ApiError> {
    let scoreboard = provider
        .scoreboard()
        .await
        .map_err(ApiError::upstream(Endpoint::LiveGames))?;

    let live_games = scoreboard.into_live_games();
    tracing::debug!("Scoreboard has {} games", live_games.len());

    Ok(Json(LiveGamesResponse { live_games }))
}

/// GET /game/{game_id}/player_stats - Box score for both teams of a game
///
/// When upstream has no `game` block the response is `player_stats: {}`,
/// not a 404.
pub async fn get_player_stats<P: StatsProvider>(
    State(provider): State<P>,
    Path(game_id): Path<String>,
) -> Result<Json<PlayerStatsResponse>, ApiError> {
    let box_score = provider
        .box_score(&game_id)
        .await
        .map_err(ApiError::upstream(Endpoint::PlayerStats))?;

    let player_stats = match box_score.game {
        Some(game) => PlayerStatsBody::Game(game.to_game_player_stats(&game_id)),
        None => PlayerStatsBody::Empty {},
    };

    Ok(Json(PlayerStatsResponse { player_stats }))
}
