//! Core business logic for Warikan.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Every computation here is synchronous, allocation-local and free of shared state.
//!
//! # Modules
//!
//! - `currency` - Exchange rate snapshots and conversion into the reference currency
//! - `ledger` - Participants, expenses, balances and settlement planning

pub mod currency;
pub mod ledger;

pub use currency::{RateSnapshot, convert};
pub use ledger::{
    Balance, Expense, LedgerError, Participant, Settlement, compute_balances, compute_settlements,
    total_net, validate_ledger,
};
