//! Currency listing routes.

use axum::{Json, Router, routing::get};
use serde::Serialize;
use warikan_shared::types::Currency;

use crate::AppState;

/// Creates the currency routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/currencies", get(list_currencies))
}

/// Response listing supported currencies.
#[derive(Debug, Serialize)]
pub struct CurrenciesResponse {
    /// Currency balances and settlements are expressed in.
    pub reference: Currency,
    /// Every currency an expense may be recorded in.
    pub currencies: Vec<Currency>,
}

/// GET `/currencies` - List supported currencies.
async fn list_currencies() -> Json<CurrenciesResponse> {
    Json(CurrenciesResponse {
        reference: Currency::REFERENCE,
        currencies: Currency::ALL.to_vec(),
    })
}
