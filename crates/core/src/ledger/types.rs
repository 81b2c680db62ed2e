//! Participants and shared expenses.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use warikan_shared::types::{Currency, ExpenseId, ParticipantId};

/// A person taking part in the shared expenses.
///
/// Identity is by `id`; names may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participant {
    /// Unique identifier.
    pub id: ParticipantId,
    /// Display name.
    pub name: String,
}

impl Participant {
    /// Creates a new participant.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: ParticipantId::new(id),
            name: name.into(),
        }
    }
}

/// An amount paid by one participant and shared evenly by others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier.
    pub id: ExpenseId,
    /// Who paid.
    pub payer: Participant,
    /// Amount paid, in `currency`. Expected to be positive.
    pub amount: Decimal,
    /// Currency the expense was paid in.
    pub currency: Currency,
    /// Who shares the cost. The payer is not implicitly included.
    pub participants: Vec<Participant>,
    /// Free-form memo.
    #[serde(default, alias = "usage")]
    pub note: String,
    /// Already paid back; excluded from balances.
    #[serde(default)]
    pub settled: bool,
}

impl Expense {
    /// Creates an unsettled expense without a note.
    #[must_use]
    pub fn new(
        id: i64,
        payer: Participant,
        amount: Decimal,
        currency: Currency,
        participants: Vec<Participant>,
    ) -> Self {
        Self {
            id: ExpenseId::new(id),
            payer,
            amount,
            currency,
            participants,
            note: String::new(),
            settled: false,
        }
    }

    /// Sets the memo.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Marks the expense as settled (or not).
    #[must_use]
    pub fn with_settled(mut self, settled: bool) -> Self {
        self.settled = settled;
        self
    }
}
