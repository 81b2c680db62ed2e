//! Ledger validation errors.
//!
//! The balance and settlement computations never fail; these errors are
//! reported by [`super::validation::validate_ledger`] for callers that accept
//! participants and expenses from outside.

use rust_decimal::Decimal;
use thiserror::Error;
use warikan_shared::types::{ExpenseId, ParticipantId};

/// Errors found while validating participants and expenses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    // ========== Participant Errors ==========
    /// Two participants share an id.
    #[error("Duplicate participant id {0}")]
    DuplicateParticipant(ParticipantId),

    // ========== Expense Errors ==========
    /// Two expenses share an id.
    #[error("Duplicate expense id {0}")]
    DuplicateExpense(ExpenseId),

    /// Expense amount must be positive.
    #[error("Expense {id} has non-positive amount {amount}")]
    NonPositiveAmount {
        /// Offending expense.
        id: ExpenseId,
        /// The amount given.
        amount: Decimal,
    },

    /// Expense has nobody to share the cost.
    #[error("Expense {0} has no participants")]
    NoSharers(ExpenseId),

    /// Expense refers to a participant that is not registered.
    #[error("Expense {expense} refers to unknown participant {participant}")]
    UnknownParticipant {
        /// Offending expense.
        expense: ExpenseId,
        /// The unregistered participant id.
        participant: ParticipantId,
    },
}
