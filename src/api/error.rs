use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::error::SlotError;

/// Errors returned by the control endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Slot(#[from] SlotError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            // Both are expected control outcomes, so they stay at info level.
            ApiError::Slot(SlotError::AlreadyRunning) => StatusCode::CONFLICT,
            ApiError::Slot(SlotError::NotRunning) => StatusCode::BAD_REQUEST,
        };
        tracing::info!(status = status.as_u16(), "{self}");
        (status, self.to_string()).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
