//! Warikan API Server
//!
//! Main entry point for the shared-expense settlement service.

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use warikan_api::rates::{FrankfurterSource, RateProvider};
use warikan_api::{AppState, create_router};
use warikan_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warikan=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    // Create rate provider
    let source = FrankfurterSource::from_config(&config.rates)?;
    let rates = RateProvider::new(Arc::new(source), Duration::from_secs(config.rates.ttl_secs));
    info!(
        api_url = %config.rates.api_url,
        ttl_secs = config.rates.ttl_secs,
        "Exchange rate provider configured"
    );

    // Create application state
    let state = AppState {
        rates: Arc::new(rates),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
