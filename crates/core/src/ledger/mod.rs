//! Shared-expense accounting.
//!
//! This module implements the settlement engine:
//! - Participants and expenses
//! - Per-participant balance aggregation in the reference currency
//! - Settlement planning (who pays whom)
//! - Input validation for callers accepting external data

pub mod balance;
pub mod error;
pub mod settlement;
pub mod types;
pub mod validation;

#[cfg(test)]
mod balance_props;
#[cfg(test)]
mod settlement_props;

pub use balance::{Balance, CurrencyBreakdown, compute_balances, total_net};
pub use error::LedgerError;
pub use settlement::{DUST_THRESHOLD, Settlement, compute_settlements};
pub use types::{Expense, Participant};
pub use validation::validate_ledger;
