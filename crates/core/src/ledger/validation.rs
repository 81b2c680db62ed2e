//! Input validation for participants and expenses.

use std::collections::HashSet;

use rust_decimal::Decimal;
use warikan_shared::types::ParticipantId;

use super::error::LedgerError;
use super::types::{Expense, Participant};

/// Validates a participant list and expense list before computing balances.
///
/// Checks that ids are unique, every amount is positive, every expense has at
/// least one sharer, and every payer and sharer is a registered participant.
/// Settled expenses are validated too; they still belong to the ledger.
///
/// # Errors
///
/// Returns the first violation found, in input order.
pub fn validate_ledger(participants: &[Participant], expenses: &[Expense]) -> Result<(), LedgerError> {
    let mut known = HashSet::with_capacity(participants.len());
    for person in participants {
        if !known.insert(person.id) {
            return Err(LedgerError::DuplicateParticipant(person.id));
        }
    }

    let mut seen = HashSet::with_capacity(expenses.len());
    for expense in expenses {
        if !seen.insert(expense.id) {
            return Err(LedgerError::DuplicateExpense(expense.id));
        }
        validate_expense(expense, &known)?;
    }

    Ok(())
}

fn validate_expense(
    expense: &Expense,
    known: &HashSet<ParticipantId>,
) -> Result<(), LedgerError> {
    if expense.amount <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount {
            id: expense.id,
            amount: expense.amount,
        });
    }

    if expense.participants.is_empty() {
        return Err(LedgerError::NoSharers(expense.id));
    }

    std::iter::once(&expense.payer)
        .chain(&expense.participants)
        .find(|p| !known.contains(&p.id))
        .map_or(Ok(()), |p| {
            Err(LedgerError::UnknownParticipant {
                expense: expense.id,
                participant: p.id,
            })
        })
}
