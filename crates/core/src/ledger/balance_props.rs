//! Property-based tests for balance aggregation.
//!
//! - Conservation: nets always sum to zero
//! - Idempotence: identical inputs give identical balances
//! - Settled exclusion and missing-rate exclusion
//! - Shape: one balance per participant, in input order

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use warikan_shared::types::Currency;

use super::balance::{compute_balances, total_net};
use super::types::{Expense, Participant};
use crate::currency::RateSnapshot;

fn any_currency() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::Jpy),
        Just(Currency::Usd),
        Just(Currency::Eur),
        Just(Currency::Ron),
    ]
}

fn full_rates() -> RateSnapshot {
    RateSnapshot::reference(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap())
        .with_rate(Currency::Usd, dec!(0.0064))
        .with_rate(Currency::Eur, dec!(0.0058))
        .with_rate(Currency::Ron, dec!(0.0301))
}

/// Strategy for a participant list (2-6 people) and up to 12 expenses among
/// them. Every sharer and payer is a registered participant.
fn ledger() -> impl Strategy<Value = (Vec<Participant>, Vec<Expense>)> {
    (2usize..7)
        .prop_flat_map(|n| {
            let raw_expense = (
                0..n,
                prop::collection::vec(any::<bool>(), n),
                1i64..10_000_000,
                any_currency(),
                any::<bool>(),
            );
            (Just(n), prop::collection::vec(raw_expense, 0..12))
        })
        .prop_map(|(n, raw)| {
            let people: Vec<Participant> = (1..=n)
                .map(|i| Participant::new(i64::try_from(i).unwrap(), format!("P{i}")))
                .collect();
            let expenses = raw
                .into_iter()
                .enumerate()
                .map(|(k, (payer, mask, cents, currency, settled))| {
                    let mut sharers: Vec<Participant> = people
                        .iter()
                        .zip(&mask)
                        .filter(|(_, share)| **share)
                        .map(|(p, _)| p.clone())
                        .collect();
                    if sharers.is_empty() {
                        sharers.push(people[payer].clone());
                    }
                    Expense::new(
                        i64::try_from(k).unwrap() + 1,
                        people[payer].clone(),
                        Decimal::new(cents, 2),
                        currency,
                        sharers,
                    )
                    .with_settled(settled)
                })
                .collect();
            (people, expenses)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every converted amount credited to a payer is debited across sharers.
    #[test]
    fn prop_nets_sum_to_zero((people, expenses) in ledger()) {
        let balances = compute_balances(&people, &expenses, Some(&full_rates()));
        let total = total_net(&balances).unwrap_or(Decimal::MAX);
        prop_assert!(total.abs() < dec!(0.000001), "total net {} should be ~0", total);
    }

    /// Each balance satisfies net = paid - owed.
    #[test]
    fn prop_net_is_paid_minus_owed((people, expenses) in ledger()) {
        for b in compute_balances(&people, &expenses, Some(&full_rates())) {
            prop_assert_eq!(b.net, b.paid - b.owed);
        }
    }

    /// Repeated calls with identical inputs agree.
    #[test]
    fn prop_idempotent((people, expenses) in ledger()) {
        let rates = full_rates();
        let first = compute_balances(&people, &expenses, Some(&rates));
        let second = compute_balances(&people, &expenses, Some(&rates));
        prop_assert_eq!(first, second);
    }

    /// Without rates nothing is computed, whatever the expenses.
    #[test]
    fn prop_no_rates_no_balances((people, expenses) in ledger()) {
        prop_assert!(compute_balances(&people, &expenses, None).is_empty());
    }

    /// Dropping settled expenses changes nothing.
    #[test]
    fn prop_settled_expenses_ignored((people, expenses) in ledger()) {
        let rates = full_rates();
        let unsettled: Vec<Expense> = expenses.iter().filter(|e| !e.settled).cloned().collect();
        prop_assert_eq!(
            compute_balances(&people, &expenses, Some(&rates)),
            compute_balances(&people, &unsettled, Some(&rates))
        );
    }

    /// An expense whose currency has no rate behaves as if it were absent.
    #[test]
    fn prop_unconvertible_expenses_ignored((people, expenses) in ledger()) {
        let mut partial = full_rates();
        partial.rates.remove(&Currency::Ron);
        let convertible: Vec<Expense> = expenses
            .iter()
            .filter(|e| e.currency != Currency::Ron)
            .cloned()
            .collect();
        prop_assert_eq!(
            compute_balances(&people, &expenses, Some(&partial)),
            compute_balances(&people, &convertible, Some(&partial))
        );
    }

    /// One balance per participant, in the order given.
    #[test]
    fn prop_one_balance_per_participant((people, expenses) in ledger()) {
        let balances = compute_balances(&people, &expenses, Some(&full_rates()));
        prop_assert_eq!(balances.len(), people.len());
        for (balance, person) in balances.iter().zip(&people) {
            prop_assert_eq!(&balance.person, person);
        }
    }
}
