//! Request-level error type shared by both front-end variants.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::pipeline::PipelineError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The assembled feature row disagrees with a pipeline artifact schema.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// A submitted record failed domain validation.
    #[error("invalid property record: {0}")]
    InvalidRecord(String),

    /// Projection horizon outside the supported 1-10 year range.
    #[error("projection horizon must be between 1 and 10 years, got {0}")]
    InvalidHorizon(u32),

    /// Explorer chart view slug that does not exist.
    #[error("unknown chart view: {0}")]
    UnknownChart(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Pipeline(PipelineError::SchemaMismatch { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "SCHEMA_MISMATCH")
            }
            AppError::Pipeline(_) => (StatusCode::INTERNAL_SERVER_ERROR, "PIPELINE_ERROR"),
            AppError::InvalidRecord(_) => (StatusCode::BAD_REQUEST, "INVALID_RECORD"),
            AppError::InvalidHorizon(_) => (StatusCode::BAD_REQUEST, "INVALID_HORIZON"),
            AppError::UnknownChart(_) => (StatusCode::NOT_FOUND, "UNKNOWN_CHART"),
        };
        if status.is_server_error() {
            log::error!("request failed: {}", self);
        }
        let body = json!({
            "error": self.to_string(),
            "code": code,
        });
        (status, axum::Json(body)).into_response()
    }
}
