//! Per-participant balance aggregation.
//!
//! Folds an expense list into one [`Balance`] per participant: what they
//! paid and what they owe, both in the reference currency, plus the same
//! figures broken down by the currency the money actually moved in.

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use warikan_shared::types::{Currency, CurrencyAmount, ParticipantId};

use super::types::{Expense, Participant};
use crate::currency::{RateSnapshot, convert};

/// Amounts accumulated per currency, at most one bucket per currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CurrencyAmount>", into = "Vec<CurrencyAmount>")]
pub struct CurrencyBreakdown(BTreeMap<Currency, Decimal>);

impl CurrencyBreakdown {
    /// Adds `amount` to the bucket for `currency`, creating it if absent.
    ///
    /// Returns the new bucket total, or `None` with the breakdown unchanged
    /// when the sum is not representable.
    pub fn checked_add(&mut self, currency: Currency, amount: Decimal) -> Option<Decimal> {
        let total = self.get(currency).unwrap_or_default().checked_add(amount)?;
        self.0.insert(currency, total);
        Some(total)
    }

    /// Returns the accumulated amount for `currency`.
    #[must_use]
    pub fn get(&self, currency: Currency) -> Option<Decimal> {
        self.0.get(&currency).copied()
    }

    /// Iterates over the buckets in currency order.
    pub fn iter(&self) -> impl Iterator<Item = CurrencyAmount> + '_ {
        self.0
            .iter()
            .map(|(currency, amount)| CurrencyAmount::new(*currency, *amount))
    }

    /// Number of currencies with a bucket.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<CurrencyAmount>> for CurrencyBreakdown {
    fn from(amounts: Vec<CurrencyAmount>) -> Self {
        let mut breakdown = Self::default();
        for CurrencyAmount { currency, amount } in amounts {
            breakdown
                .0
                .entry(currency)
                .and_modify(|total| *total = total.saturating_add(amount))
                .or_insert(amount);
        }
        breakdown
    }
}

impl From<CurrencyBreakdown> for Vec<CurrencyAmount> {
    fn from(breakdown: CurrencyBreakdown) -> Self {
        breakdown.iter().collect()
    }
}

/// What one participant paid and owes across all unsettled expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// The participant.
    pub person: Participant,
    /// Total paid, in the reference currency.
    pub paid: Decimal,
    /// Total share owed, in the reference currency.
    pub owed: Decimal,
    /// `paid - owed`. Positive means the group owes this person.
    pub net: Decimal,
    /// Amounts paid, in the currencies they were paid in.
    pub paid_breakdown: CurrencyBreakdown,
    /// Shares owed, in the currencies of the underlying expenses.
    pub owed_breakdown: CurrencyBreakdown,
}

impl Balance {
    /// Creates a zero balance for `person`.
    #[must_use]
    pub fn new(person: Participant) -> Self {
        Self {
            person,
            paid: Decimal::ZERO,
            owed: Decimal::ZERO,
            net: Decimal::ZERO,
            paid_breakdown: CurrencyBreakdown::default(),
            owed_breakdown: CurrencyBreakdown::default(),
        }
    }

    fn credit(&mut self, converted: Decimal, currency: Currency, original: Decimal) -> Option<()> {
        self.paid = self.paid.checked_add(converted)?;
        self.net = self.paid.checked_sub(self.owed)?;
        self.paid_breakdown.checked_add(currency, original)?;
        Some(())
    }

    fn debit(&mut self, converted: Decimal, currency: Currency, original: Decimal) -> Option<()> {
        self.owed = self.owed.checked_add(converted)?;
        self.net = self.paid.checked_sub(self.owed)?;
        self.owed_breakdown.checked_add(currency, original)?;
        Some(())
    }
}

/// Computes one balance per participant from the unsettled expenses.
///
/// Returns an empty list when no rate snapshot is available: balances cannot
/// be computed yet. Otherwise the output holds exactly one entry per distinct
/// participant id, at the position of its first occurrence. When an id
/// repeats, the last listed participant record is the one reported.
///
/// Expenses are skipped entirely when they are settled, when their amount
/// cannot be converted with `snapshot`, when nobody shares them, or when
/// posting them would push any total past what `Decimal` can represent.
/// Payers and sharers missing from `participants` are ignored.
#[must_use]
pub fn compute_balances(
    participants: &[Participant],
    expenses: &[Expense],
    snapshot: Option<&RateSnapshot>,
) -> Vec<Balance> {
    let Some(snapshot) = snapshot else {
        return Vec::new();
    };

    let mut balances: Vec<Balance> = Vec::with_capacity(participants.len());
    let mut index: HashMap<ParticipantId, usize> = HashMap::with_capacity(participants.len());
    for person in participants {
        match index.entry(person.id) {
            Entry::Vacant(slot) => {
                slot.insert(balances.len());
                balances.push(Balance::new(person.clone()));
            }
            Entry::Occupied(slot) => balances[*slot.get()].person = person.clone(),
        }
    }

    for expense in expenses {
        if expense.settled {
            continue;
        }
        if expense.participants.is_empty() {
            debug!(expense_id = %expense.id, "Skipping expense without sharers");
            continue;
        }
        let Some(converted) = convert(expense.amount, expense.currency, snapshot) else {
            debug!(
                expense_id = %expense.id,
                currency = %expense.currency,
                "Skipping expense without a usable exchange rate"
            );
            continue;
        };

        if post_expense(&mut balances, &index, expense, converted).is_none() {
            debug!(
                expense_id = %expense.id,
                amount = %expense.amount,
                "Skipping expense whose totals overflow"
            );
        }
    }

    balances
}

/// Posts one expense to the payer and every sharer, all or nothing.
///
/// Affected balances are updated on copies and written back only when every
/// sum fits; `None` leaves `balances` untouched.
fn post_expense(
    balances: &mut [Balance],
    index: &HashMap<ParticipantId, usize>,
    expense: &Expense,
    converted: Decimal,
) -> Option<()> {
    let mut staged: BTreeMap<usize, Balance> = BTreeMap::new();

    if let Some(&i) = index.get(&expense.payer.id) {
        staged
            .entry(i)
            .or_insert_with(|| balances[i].clone())
            .credit(converted, expense.currency, expense.amount)?;
    }

    let sharers = Decimal::from(expense.participants.len());
    let share = converted.checked_div(sharers)?;
    let share_original = expense.amount.checked_div(sharers)?;
    for sharer in &expense.participants {
        if let Some(&i) = index.get(&sharer.id) {
            staged
                .entry(i)
                .or_insert_with(|| balances[i].clone())
                .debit(share, expense.currency, share_original)?;
        }
    }

    for (i, balance) in staged {
        balances[i] = balance;
    }
    Some(())
}

/// Sum of every net balance. Zero (up to division residue) for a consistent
/// ledger; `None` when the sum is not representable.
#[must_use]
pub fn total_net(balances: &[Balance]) -> Option<Decimal> {
    balances
        .iter()
        .try_fold(Decimal::ZERO, |total, b| total.checked_add(b.net))
}
