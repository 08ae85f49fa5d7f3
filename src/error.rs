use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::constants::{
    MSG_GAMERTAG_REQUIRED, MSG_INTERNAL_ERROR, MSG_STATS_NOT_FOUND, MSG_USER_NOT_FOUND,
};
use crate::models::Outcome;

/// Application error type
///
/// The record endpoints and the read endpoint answer with different JSON
/// shapes (code/message vs message/error), so store failures on the
/// record path carry their outcome to pick the right payload.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("gamertag is required")]
    MissingGamertag,

    #[error("gamertag does not resolve to a user")]
    UserNotFound,

    #[error("no statistics row for user")]
    StatsNotFound,

    #[error("failed to record {outcome}")]
    RecordFailed {
        outcome: Outcome,
        #[source]
        source: sqlx::Error,
    },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Implement IntoResponse to convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::MissingGamertag => (
                StatusCode::BAD_REQUEST,
                json!({ "code": 0, "message": MSG_GAMERTAG_REQUIRED }),
            ),
            AppError::UserNotFound => (
                StatusCode::NOT_FOUND,
                json!({ "code": 0, "message": MSG_USER_NOT_FOUND }),
            ),
            AppError::StatsNotFound => (
                StatusCode::NOT_FOUND,
                json!({ "message": MSG_STATS_NOT_FOUND }),
            ),
            AppError::RecordFailed { outcome, ref source } => {
                tracing::error!("Store error recording {}: {:?}", outcome, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "code": 0, "message": outcome.failure_message() }),
                )
            }
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": MSG_INTERNAL_ERROR }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;
