use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::nba::StatsProvider;

pub mod games;
pub mod health;
pub mod players;

pub const BANNER: &str = "NBA Live Stats API";

/// Build the application router around an upstream stats provider.
pub fn router<P: StatsProvider>(provider: P) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(|| async { BANNER }))
        .route("/health", get(health::health_check))

        // Game endpoints
        .route("/live_games", get(games::get_live_games::<P>))
        .route("/game/{game_id}/player_stats", get(games::get_player_stats::<P>))

        // Player endpoints
        .route(
            "/player/{player_id}/season_stats_average",
            get(players::get_season_stats_average::<P>),
        )

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(provider)
}

#[cfg(test)]
pub(crate) mod test_util {
    use axum::{body::Body, http::Request, Router};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    pub async fn get(app: Router, uri: &str) -> (axum::http::StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}
