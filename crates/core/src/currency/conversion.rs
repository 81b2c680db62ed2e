//! Conversion into the reference currency.
//!
//! Conversion is total: an amount that cannot be converted (unknown currency,
//! zero or negative rate, arithmetic overflow) yields `None` so callers can
//! filter it out instead of handling an error.

use rust_decimal::Decimal;
use warikan_shared::types::Currency;

use super::snapshot::RateSnapshot;

/// Converts `amount` denominated in `from` into the reference currency.
///
/// Amounts already in the reference currency are returned unchanged, without
/// consulting the snapshot.
#[must_use]
pub fn convert(amount: Decimal, from: Currency, snapshot: &RateSnapshot) -> Option<Decimal> {
    if from.is_reference() {
        return Some(amount);
    }

    let rate = snapshot.rate(from)?;
    if rate <= Decimal::ZERO {
        return None;
    }

    amount.checked_div(rate)
}
