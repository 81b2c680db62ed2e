//! Exchange rate snapshots.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use warikan_shared::types::Currency;

/// Exchange rates quoted against a base currency at a point in time.
///
/// `rates[X]` is the number of units of `X` per one unit of `base`, so an
/// amount in `X` converts to the base as `amount / rates[X]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSnapshot {
    /// Currency the rates are quoted against.
    pub base: Currency,
    /// Date the rates were published.
    pub as_of: NaiveDate,
    /// Units of each currency per one unit of `base`.
    pub rates: BTreeMap<Currency, Decimal>,
}

impl RateSnapshot {
    /// Creates a snapshot based on the reference currency, seeded with
    /// `rates[REF] = 1`.
    #[must_use]
    pub fn reference(as_of: NaiveDate) -> Self {
        let mut rates = BTreeMap::new();
        rates.insert(Currency::REFERENCE, Decimal::ONE);
        Self {
            base: Currency::REFERENCE,
            as_of,
            rates,
        }
    }

    /// Adds or replaces the rate for `currency`.
    #[must_use]
    pub fn with_rate(mut self, currency: Currency, rate: Decimal) -> Self {
        self.rates.insert(currency, rate);
        self
    }

    /// Returns the quoted rate for `currency`, if any.
    #[must_use]
    pub fn rate(&self, currency: Currency) -> Option<Decimal> {
        self.rates.get(&currency).copied()
    }

    /// Returns true when the snapshot is based on the reference currency and
    /// carries a positive rate for every supported currency.
    #[must_use]
    pub fn has_required(&self) -> bool {
        self.base == Currency::REFERENCE
            && Currency::ALL
                .iter()
                .all(|c| self.rate(*c).is_some_and(|r| r > Decimal::ZERO))
    }

    /// Supported currencies without a usable (positive) rate.
    #[must_use]
    pub fn missing(&self) -> Vec<Currency> {
        Currency::ALL
            .into_iter()
            .filter(|c| !self.rate(*c).is_some_and(|r| r > Decimal::ZERO))
            .collect()
    }
}
