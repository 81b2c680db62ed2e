//! Settlement planning.
//!
//! Turns a set of balances into transfers that bring every participant back
//! to zero, matching the largest remaining creditor with the largest
//! remaining debtor until one side runs out. Each transfer zeroes at least
//! one of the two, so `n` participants need at most `n - 1` transfers. The
//! greedy pairing is not guaranteed to be the global minimum when several
//! subsets of balances cancel out on their own.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::balance::Balance;
use super::types::Participant;

/// Residue (in reference-currency units) below which a balance counts as
/// settled. Amounts at or below it are never transferred.
pub const DUST_THRESHOLD: Decimal = dec!(0.01);

/// A single transfer from a debtor to a creditor, in whole reference-currency
/// units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Who pays.
    pub from: Participant,
    /// Who receives.
    pub to: Participant,
    /// Amount to transfer, rounded to a whole unit.
    pub amount: Decimal,
}

struct Working<'a> {
    person: &'a Participant,
    net: Decimal,
}

fn is_dust(value: Decimal) -> bool {
    value.abs() <= DUST_THRESHOLD
}

/// Computes the transfers that clear `balances`.
///
/// Works on a private copy of the net amounts; `balances` is left untouched.
/// Transfer amounts are rounded half away from zero only when emitted, so a
/// transfer whose exact amount rounds to zero is dropped.
#[must_use]
pub fn compute_settlements(balances: &[Balance]) -> Vec<Settlement> {
    let mut working: Vec<Working<'_>> = balances
        .iter()
        .map(|b| Working {
            person: &b.person,
            net: b.net,
        })
        .collect();
    working.sort_by(|a, b| b.net.cmp(&a.net));

    let mut settlements = Vec::new();
    if working.len() < 2 {
        return settlements;
    }

    let mut i = 0;
    let mut j = working.len() - 1;
    while i < j {
        let credit = working[i].net;
        let debt = -working[j].net;

        // Sorted descending: nothing further in can exceed the dust on either side.
        if credit <= DUST_THRESHOLD || debt <= DUST_THRESHOLD {
            break;
        }

        let amount = credit.min(debt);
        let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        if !rounded.is_zero() {
            trace!(
                from = %working[j].person.id,
                to = %working[i].person.id,
                amount = %rounded,
                "Settlement planned"
            );
            settlements.push(Settlement {
                from: working[j].person.clone(),
                to: working[i].person.clone(),
                amount: rounded,
            });
        }

        working[i].net -= amount;
        working[j].net += amount;

        if is_dust(working[i].net) {
            i += 1;
        }
        if is_dust(working[j].net) {
            j -= 1;
        }
    }

    settlements
}
