//! Property-based tests for currency conversion.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use warikan_shared::types::Currency;

use super::conversion::convert;
use super::snapshot::RateSnapshot;

/// Strategy to generate positive decimal amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

fn foreign_currency() -> impl Strategy<Value = Currency> {
    prop_oneof![Just(Currency::Usd), Just(Currency::Eur), Just(Currency::Ron)]
}

fn snapshot_with(currency: Currency, rate: Decimal) -> RateSnapshot {
    RateSnapshot::reference(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()).with_rate(currency, rate)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Reference-currency amounts pass through untouched.
    #[test]
    fn prop_reference_is_identity(amount in positive_amount()) {
        let snapshot = snapshot_with(Currency::Usd, Decimal::ONE);
        prop_assert_eq!(convert(amount, Currency::REFERENCE, &snapshot), Some(amount));
    }

    /// Converting back with the same rate recovers the original amount.
    #[test]
    fn prop_convert_inverts_rate(
        amount in positive_amount(),
        rate in positive_rate(),
        currency in foreign_currency(),
    ) {
        let snapshot = snapshot_with(currency, rate);
        let converted = convert(amount, currency, &snapshot).unwrap();
        let back = (converted * rate).round_dp(6);
        prop_assert_eq!(back, amount.round_dp(6));
    }

    /// Positive inputs always convert to a positive result.
    #[test]
    fn prop_positive_inputs_positive_output(
        amount in positive_amount(),
        rate in positive_rate(),
        currency in foreign_currency(),
    ) {
        let snapshot = snapshot_with(currency, rate);
        let converted = convert(amount, currency, &snapshot).unwrap();
        prop_assert!(converted > Decimal::ZERO);
    }

    /// A currency absent from the snapshot never converts.
    #[test]
    fn prop_missing_rate_never_converts(amount in positive_amount()) {
        let snapshot = snapshot_with(Currency::Usd, Decimal::ONE);
        prop_assert_eq!(convert(amount, Currency::Ron, &snapshot), None);
    }

    /// Conversion is deterministic.
    #[test]
    fn prop_convert_is_deterministic(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        let snapshot = snapshot_with(Currency::Eur, rate);
        prop_assert_eq!(
            convert(amount, Currency::Eur, &snapshot),
            convert(amount, Currency::Eur, &snapshot)
        );
    }
}
