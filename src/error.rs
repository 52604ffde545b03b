use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::nba::UpstreamError;

/// Which endpoint failed; each one words its 500 message differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    LiveGames,
    PlayerStats,
    SeasonAverage,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::LiveGames => f.write_str("Failed to fetch live games: "),
            Endpoint::PlayerStats => Ok(()),
            Endpoint::SeasonAverage => f.write_str("Failed to fetch season average stats: "),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{endpoint}{source}")]
    Upstream {
        endpoint: Endpoint,
        #[source]
        source: UpstreamError,
    },
    #[error("{endpoint}{detail}")]
    MalformedData { endpoint: Endpoint, detail: String },
}

impl ApiError {
    pub fn upstream(endpoint: Endpoint) -> impl FnOnce(UpstreamError) -> ApiError {
        move |source| ApiError::Upstream { endpoint, source }
    }

    pub fn malformed(endpoint: Endpoint, detail: impl fmt::Display) -> ApiError {
        ApiError::MalformedData { endpoint, detail: detail.to_string() }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream { .. } | ApiError::MalformedData { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = Json(ErrorResponse { error: self.to_string() });

        (status, body).into_response()
    }
}
