//! Mapping of application errors onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use warikan_core::LedgerError;
use warikan_shared::AppError;

use crate::rates::RateError;

/// An [`AppError`] rendered as `{"error": CODE, "message": ...}`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": self.0.to_string(),
            })),
        )
            .into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        Self(AppError::Validation(err.to_string()))
    }
}

impl From<RateError> for ApiError {
    fn from(err: RateError) -> Self {
        Self(err.into())
    }
}
