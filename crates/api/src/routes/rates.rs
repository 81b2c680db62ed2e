//! Exchange rate routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;
use warikan_core::RateSnapshot;

use crate::{AppState, error::ApiError};

/// Creates the exchange rate routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/rates", get(get_rates))
}

/// Query parameters for the rate lookup.
#[derive(Debug, Default, Deserialize)]
pub struct RatesQuery {
    /// Bypass the cache and fetch new rates.
    #[serde(default)]
    pub refresh: bool,
}

/// GET `/rates` - Current exchange-rate snapshot.
async fn get_rates(
    State(state): State<AppState>,
    Query(query): Query<RatesQuery>,
) -> Result<Json<RateSnapshot>, ApiError> {
    let snapshot = if query.refresh {
        state.rates.refresh().await?
    } else {
        state.rates.current().await?
    };
    Ok(Json(snapshot))
}
