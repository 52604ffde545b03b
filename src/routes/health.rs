use axum::{http::StatusCode, response::Json};
use serde::Serialize;

use super::BANNER;

#[derive(Serialize)]
pub struct HealthResponse {
    service: &'static str,
    status: &'static str,
    timestamp: i64,
}

/// Liveness only. The NBA feeds are not contacted, so a slow upstream never
/// fails the check.
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            service: BANNER,
            status: "ok",
            timestamp: chrono::Utc::now().timestamp(),
        }),
    )
}
