//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod currencies;
pub mod health;
pub mod ledger;
pub mod rates;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(currencies::routes())
        .merge(rates::routes())
        .merge(ledger::routes())
}
