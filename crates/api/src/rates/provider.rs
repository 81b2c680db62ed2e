//! Cached access to exchange rates.
//!
//! A fetched snapshot is served from memory until it is older than the TTL.
//! When a refresh fails, the last complete snapshot keeps being served, however
//! old it is; only a provider that has never fetched successfully reports the
//! error.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};
use warikan_core::RateSnapshot;

use super::error::RateError;
use super::source::RateSource;

struct CachedSnapshot {
    snapshot: RateSnapshot,
    fetched_at: Instant,
}

/// Exchange rates with a time-to-live cache and stale fallback.
pub struct RateProvider {
    source: Arc<dyn RateSource>,
    ttl: Duration,
    cache: RwLock<Option<CachedSnapshot>>,
}

impl RateProvider {
    /// Creates a provider with an empty cache.
    #[must_use]
    pub fn new(source: Arc<dyn RateSource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            cache: RwLock::new(None),
        }
    }

    /// Returns the cached snapshot while fresh, fetching a new one otherwise.
    pub async fn current(&self) -> Result<RateSnapshot, RateError> {
        if let Some(snapshot) = self.fresh().await {
            debug!(as_of = %snapshot.as_of, "Serving cached exchange rates");
            return Ok(snapshot);
        }
        self.fetch_with_fallback().await
    }

    /// Fetches a new snapshot regardless of cache age.
    pub async fn refresh(&self) -> Result<RateSnapshot, RateError> {
        self.fetch_with_fallback().await
    }

    /// Returns the last complete snapshot without any I/O.
    pub async fn cached(&self) -> Option<RateSnapshot> {
        self.cache.read().await.as_ref().map(|c| c.snapshot.clone())
    }

    async fn fresh(&self) -> Option<RateSnapshot> {
        self.cache
            .read()
            .await
            .as_ref()
            .filter(|c| c.fetched_at.elapsed() < self.ttl)
            .map(|c| c.snapshot.clone())
    }

    async fn fetch_with_fallback(&self) -> Result<RateSnapshot, RateError> {
        let fetched = self.source.fetch_latest().await.and_then(|snapshot| {
            if snapshot.has_required() {
                Ok(snapshot)
            } else {
                Err(RateError::MissingCurrencies(snapshot.missing()))
            }
        });

        match fetched {
            Ok(snapshot) => {
                info!(as_of = %snapshot.as_of, "Exchange rates refreshed");
                *self.cache.write().await = Some(CachedSnapshot {
                    snapshot: snapshot.clone(),
                    fetched_at: Instant::now(),
                });
                Ok(snapshot)
            }
            Err(err) => {
                if let Some(stale) = self.cached().await {
                    warn!(error = %err, as_of = %stale.as_of, "Rate refresh failed, serving cached rates");
                    Ok(stale)
                } else {
                    error!(error = %err, "Rate refresh failed with nothing cached");
                    Err(err)
                }
            }
        }
    }
}
