use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::averages::calculate_averages;
use crate::error::{ApiError, Endpoint};
use crate::models::upstream::{CareerStatsPayload, REGULAR_SEASON_TOTALS, SEASON_ID};
use crate::models::{SeasonAverageResponse, SeasonAverageStats};
use crate::nba::StatsProvider;
use crate::season;

const NO_REGULAR_SEASON_STATS: &str = "No regular season stats found for this player.";
const NO_CURRENT_SEASON_STATS: &str =
    "No regular season stats found for this player in the current season.";

/// GET /player/{player_id}/season_stats_average - Per-game averages for the current season
pub async fn get_season_stats_average<P: StatsProvider>(
    State(provider): State<P>,
    Path(player_id): Path<String>,
) -> Result<Json<SeasonAverageResponse>, ApiError> {
    let season = season::current_season();

    let career = provider
        .player_career_stats(&player_id)
        .await
        .map_err(ApiError::upstream(Endpoint::SeasonAverage))?;

    let season_average_stats = season_average(&career, &season)?;

    Ok(Json(SeasonAverageResponse { season_average_stats }))
}

/// Average the regular-season row for `season`.
fn season_average(career: &CareerStatsPayload, season: &str) -> Result<SeasonAverageStats, ApiError> {
    let regular_season = career
        .result_set(REGULAR_SEASON_TOTALS)
        .filter(|set| !set.row_set.is_empty())
        .ok_or(ApiError::NotFound(NO_REGULAR_SEASON_STATS))?;

    let record = regular_season
        .find_record(SEASON_ID, season)
        .map_err(|e| ApiError::malformed(Endpoint::SeasonAverage, e))?
        .ok_or(ApiError::NotFound(NO_CURRENT_SEASON_STATS))?;

    tracing::debug!("Season totals for {}: {:?}", season, record);

    Ok(calculate_averages(&record.to_season_totals(season)))
}
