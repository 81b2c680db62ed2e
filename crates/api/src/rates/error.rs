//! Exchange-rate provider errors.

use thiserror::Error;
use warikan_shared::AppError;
use warikan_shared::types::Currency;

/// Errors raised while obtaining an exchange-rate snapshot.
#[derive(Debug, Error)]
pub enum RateError {
    /// Transport-level failure talking to the rate endpoint.
    #[error("Rate request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The rate endpoint answered with a non-success status.
    #[error("Rate endpoint returned status {0}")]
    Status(u16),

    /// The response was quoted against another base currency.
    #[error("Rates quoted against {0}, expected JPY")]
    UnexpectedBase(String),

    /// The response lacks a usable rate for some supported currencies.
    #[error("Rates missing for {}", format_currencies(.0))]
    MissingCurrencies(Vec<Currency>),
}

fn format_currencies(currencies: &[Currency]) -> String {
    currencies
        .iter()
        .map(|c| c.code())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<RateError> for AppError {
    fn from(err: RateError) -> Self {
        Self::ExternalService(err.to_string())
    }
}
