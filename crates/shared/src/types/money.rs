//! Currency codes and per-currency amounts.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts wrap `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// ISO 4217 currency codes supported by the system.
///
/// `JPY` is the reference currency: balances and settlements are always
/// expressed in it, and exchange rates are quoted against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Japanese Yen (reference currency)
    Jpy,
    /// US Dollar
    Usd,
    /// Euro
    Eur,
    /// Romanian Leu
    Ron,
}

impl Currency {
    /// The reference (settlement) currency.
    pub const REFERENCE: Self = Self::Jpy;

    /// Every supported currency, reference first.
    pub const ALL: [Self; 4] = [Self::Jpy, Self::Usd, Self::Eur, Self::Ron];

    /// Returns the ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Jpy => "JPY",
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Ron => "RON",
        }
    }

    /// Returns true for the reference currency.
    #[must_use]
    pub fn is_reference(self) -> bool {
        self == Self::REFERENCE
    }

    /// Supported currencies other than the reference one.
    pub fn foreign() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(|c| !c.is_reference())
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "JPY" => Ok(Self::Jpy),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "RON" => Ok(Self::Ron),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}

/// An amount tagged with the currency it is denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyAmount {
    /// Currency of the amount.
    pub currency: Currency,
    /// The amount, in units of `currency`.
    pub amount: Decimal,
}

impl CurrencyAmount {
    /// Creates a new currency amount.
    #[must_use]
    pub const fn new(currency: Currency, amount: Decimal) -> Self {
        Self { currency, amount }
    }
}
