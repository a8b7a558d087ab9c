//! Expense entity - a dated outflow charged against the plan budget.

use chrono::NaiveDate;
use serde::Serialize;

use super::Money;
use crate::domain::foundation::ExpenseId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expense {
    id: ExpenseId,
    description: String,
    cost: Money,
    date: NaiveDate,
}

impl Expense {
    /// Creates an expense with a fresh id.
    pub fn new(description: impl Into<String>, cost: Money, date: NaiveDate) -> Self {
        Self::with_id(ExpenseId::new(), description, cost, date)
    }

    /// Creates an expense with a known id (used when rebuilding from storage).
    pub fn with_id(
        id: ExpenseId,
        description: impl Into<String>,
        cost: Money,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            cost,
            date,
        }
    }

    pub fn id(&self) -> &ExpenseId {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn cost(&self) -> &Money {
        &self.cost
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}
