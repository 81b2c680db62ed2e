//! Where exchange-rate snapshots come from.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;
use warikan_core::RateSnapshot;
use warikan_shared::config::RatesConfig;
use warikan_shared::types::Currency;

use super::error::RateError;

/// A source of the latest exchange rates against the reference currency.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Fetches the latest snapshot.
    async fn fetch_latest(&self) -> Result<RateSnapshot, RateError>;
}

/// Rates from a Frankfurter-compatible `latest` endpoint.
#[derive(Debug, Clone)]
pub struct FrankfurterSource {
    client: reqwest::Client,
    api_url: String,
}

/// Body of a `latest` response.
#[derive(Debug, Deserialize)]
struct LatestResponse {
    base: String,
    date: NaiveDate,
    rates: HashMap<String, Decimal>,
}

impl FrankfurterSource {
    /// Creates a source using an existing HTTP client.
    #[must_use]
    pub fn new(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }

    /// Creates a source with its own client, honouring the configured timeout.
    pub fn from_config(config: &RatesConfig) -> Result<Self, RateError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::new(client, config.api_url.clone()))
    }

    fn symbols() -> String {
        Currency::foreign()
            .map(Currency::code)
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[async_trait]
impl RateSource for FrankfurterSource {
    async fn fetch_latest(&self) -> Result<RateSnapshot, RateError> {
        debug!(url = %self.api_url, "Fetching exchange rates");

        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("base", Currency::REFERENCE.code().to_string()),
                ("symbols", Self::symbols()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RateError::Status(status.as_u16()));
        }

        let body: LatestResponse = response.json().await?;
        normalize(body)
    }
}

/// Turns a `latest` response into a complete reference snapshot.
fn normalize(body: LatestResponse) -> Result<RateSnapshot, RateError> {
    if body.base.parse::<Currency>() != Ok(Currency::REFERENCE) {
        return Err(RateError::UnexpectedBase(body.base));
    }

    // Codes outside the supported set are ignored.
    let snapshot = body
        .rates
        .iter()
        .filter_map(|(code, rate)| code.parse::<Currency>().ok().map(|c| (c, *rate)))
        .filter(|(currency, _)| !currency.is_reference())
        .fold(RateSnapshot::reference(body.date), |snapshot, (currency, rate)| {
            snapshot.with_rate(currency, rate)
        });

    if snapshot.has_required() {
        Ok(snapshot)
    } else {
        Err(RateError::MissingCurrencies(snapshot.missing()))
    }
}
