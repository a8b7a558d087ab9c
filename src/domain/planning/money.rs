//! Money value object.

use serde::Serialize;
use std::fmt;

use super::PlanningError;

/// A non-negative monetary amount tagged with a currency.
///
/// `amount` counts the currency's smallest unit (whole rupiah for IDR,
/// cents for USD) so budget arithmetic is exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Money {
    amount: i64,
    currency: String,
}

impl Money {
    /// Currency tag used when a caller does not name one.
    pub const DEFAULT_CURRENCY: &'static str = "IDR";

    /// Creates a new amount.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount` is negative
    pub fn new(amount: i64, currency: impl Into<String>) -> Result<Self, PlanningError> {
        if amount < 0 {
            return Err(PlanningError::InvalidAmount(amount));
        }
        Ok(Self {
            amount,
            currency: currency.into(),
        })
    }

    /// Creates an amount in the default currency.
    pub fn in_default_currency(amount: i64) -> Result<Self, PlanningError> {
        Self::new(amount, Self::DEFAULT_CURRENCY)
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
