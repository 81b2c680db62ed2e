//! Liveness endpoint.

use axum::{Json, Router, extract::State, routing::get};
use chrono::NaiveDate;
use serde::Serialize;

use crate::AppState;

/// Liveness report.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"healthy"` when the process answers.
    pub status: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Date of the cached exchange rates, if any were fetched yet.
    pub rates_as_of: Option<NaiveDate>,
}

/// GET `/health` - Liveness plus rate-cache status. Never triggers a fetch.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        rates_as_of: state.rates.cached().await.map(|s| s.as_of),
    })
}

/// Creates the health routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
