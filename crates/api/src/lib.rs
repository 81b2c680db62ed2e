//! HTTP API layer with Axum routes and the exchange-rate provider.
//!
//! This crate provides:
//! - REST API routes
//! - Cached exchange rates from a remote source
//! - Error-to-response mapping

pub mod error;
pub mod rates;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::rates::RateProvider;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Exchange rates used when a request carries none.
    pub rates: Arc<RateProvider>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
