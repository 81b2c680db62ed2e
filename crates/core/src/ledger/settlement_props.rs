//! Property-based tests for settlement planning.
//!
//! - Applying the planned transfers clears every balance
//! - At most n - 1 transfers for n participants
//! - Transfers are positive and never self-directed

use proptest::prelude::*;
use rust_decimal::Decimal;
use warikan_shared::types::ParticipantId;

use super::balance::Balance;
use super::settlement::{DUST_THRESHOLD, compute_settlements};
use super::types::Participant;

fn balances_from(nets: &[Decimal]) -> Vec<Balance> {
    nets.iter()
        .enumerate()
        .map(|(i, net)| {
            let id = i64::try_from(i).unwrap() + 1;
            let mut b = Balance::new(Participant::new(id, format!("P{id}")));
            b.net = *net;
            b
        })
        .collect()
}

/// Whole-unit nets that sum to zero (2-9 participants).
fn zero_sum_nets() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(-100_000i64..100_000, 1..9).prop_map(|mut nets| {
        let sum: i64 = nets.iter().sum();
        nets.push(-sum);
        nets.into_iter().map(Decimal::from).collect()
    })
}

/// Arbitrary nets with cents, not necessarily balanced.
fn any_nets() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(
        (-10_000_000i64..10_000_000).prop_map(|c| Decimal::new(c, 2)),
        0..10,
    )
}

fn apply(balances: &[Balance], nets: &[Decimal]) -> Vec<Decimal> {
    let position = |id: ParticipantId| {
        balances
            .iter()
            .position(|b| b.person.id == id)
            .unwrap()
    };
    let mut residual = nets.to_vec();
    for s in compute_settlements(balances) {
        residual[position(s.from.id)] += s.amount;
        residual[position(s.to.id)] -= s.amount;
    }
    residual
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Settling whole-unit balances leaves everyone at zero.
    #[test]
    fn prop_settlements_clear_balances(nets in zero_sum_nets()) {
        let balances = balances_from(&nets);
        for residual in apply(&balances, &nets) {
            prop_assert!(residual.abs() <= DUST_THRESHOLD, "residual {} left over", residual);
        }
    }

    /// Never more than n - 1 transfers.
    #[test]
    fn prop_transfer_count_bound(nets in any_nets()) {
        let balances = balances_from(&nets);
        let settlements = compute_settlements(&balances);
        prop_assert!(settlements.len() <= nets.len().saturating_sub(1));
    }

    /// Transfers move a positive whole amount between two different people.
    #[test]
    fn prop_transfers_well_formed(nets in any_nets()) {
        let balances = balances_from(&nets);
        for s in compute_settlements(&balances) {
            prop_assert!(s.amount > Decimal::ZERO);
            prop_assert_eq!(s.amount, s.amount.trunc());
            prop_assert_ne!(s.from.id, s.to.id);
        }
    }

    /// Money only flows from debtors to creditors.
    #[test]
    fn prop_direction_follows_sign(nets in any_nets()) {
        let balances = balances_from(&nets);
        for s in compute_settlements(&balances) {
            let from = balances.iter().find(|b| b.person.id == s.from.id).unwrap();
            let to = balances.iter().find(|b| b.person.id == s.to.id).unwrap();
            prop_assert!(from.net < Decimal::ZERO);
            prop_assert!(to.net > Decimal::ZERO);
        }
    }
}
