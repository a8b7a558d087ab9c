//! TravelPlan aggregate root.
//!
//! The plan owns its date range, budget, days, and expenses. It is the only
//! way to change any of them: callers get shared references to children,
//! never mutable ones, so every change passes the plan's checks.
//!
//! Each mutation validates first and commits second. A failed call leaves
//! the plan exactly as it was.

use chrono::NaiveDate;
use serde::Serialize;

use super::errors::DatedItem;
use super::{Activity, DateRange, Expense, Money, PlanningError, TravelDay};
use crate::domain::foundation::{ExpenseId, Timestamp, TravelPlanId, ValidationError};

/// Maximum length for a plan name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Travel plan aggregate.
///
/// # Invariants
///
/// - every day date lies within `date_range`
/// - every expense date lies within `date_range`
/// - the sum of expense amounts never exceeds `budget.amount()`
/// - no two days share a date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TravelPlan {
    id: TravelPlanId,
    name: String,
    date_range: DateRange,
    budget: Money,
    days: Vec<TravelDay>,
    expenses: Vec<Expense>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl TravelPlan {
    /// Create a new plan with no days and no expenses.
    ///
    /// # Errors
    ///
    /// - `Validation` if the name is empty or too long
    pub fn new(
        id: TravelPlanId,
        name: impl Into<String>,
        date_range: DateRange,
        budget: Money,
    ) -> Result<Self, PlanningError> {
        let name = name.into();
        Self::validate_name(&name)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            name,
            date_range,
            budget,
            days: Vec::new(),
            expenses: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a plan from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: TravelPlanId,
        name: String,
        date_range: DateRange,
        budget: Money,
        days: Vec<TravelDay>,
        expenses: Vec<Expense>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            date_range,
            budget,
            days,
            expenses,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &TravelPlanId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date_range(&self) -> &DateRange {
        &self.date_range
    }

    pub fn budget(&self) -> &Money {
        &self.budget
    }

    pub fn days(&self) -> &[TravelDay] {
        &self.days
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }

    /// Returns the day on `date`, if the plan has one.
    pub fn travel_day(&self, date: NaiveDate) -> Option<&TravelDay> {
        self.days.iter().find(|day| day.date() == date)
    }

    /// Returns the expense with `id`, if the plan has one.
    pub fn expense(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id() == id)
    }

    /// Sum of all expense amounts, saturating at `i64::MAX`.
    pub fn total_expenses(&self) -> i64 {
        self.expenses
            .iter()
            .fold(0i64, |total, e| total.saturating_add(e.cost().amount()))
    }

    /// Budget amount minus total expenses.
    pub fn remaining_budget(&self) -> i64 {
        self.budget.amount() - self.total_expenses()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Add an empty day on `date`.
    ///
    /// # Errors
    ///
    /// - `DateOutOfRange` if `date` is outside the plan's range
    /// - `DuplicateDate` if the plan already has a day on `date`
    pub fn add_travel_day(&mut self, date: NaiveDate) -> Result<&TravelDay, PlanningError> {
        self.ensure_in_range(DatedItem::TravelDay, date)?;
        if self.travel_day(date).is_some() {
            return Err(PlanningError::DuplicateDate(date));
        }

        let index = self.days.len();
        self.days.push(TravelDay::new(date));
        self.touch();
        Ok(&self.days[index])
    }

    /// Attach an activity to the day on `date`.
    ///
    /// # Errors
    ///
    /// - `DayNotFound` if the plan has no day on `date`
    /// - `ActivityConflict` if the activity overlaps one already on that day
    pub fn add_activity(
        &mut self,
        date: NaiveDate,
        activity: Activity,
    ) -> Result<&Activity, PlanningError> {
        let index = self
            .days
            .iter()
            .position(|day| day.date() == date)
            .ok_or(PlanningError::DayNotFound(date))?;

        let slot = self.days[index].activities().len();
        self.days[index].add_activity(activity)?;
        self.touch();
        Ok(&self.days[index].activities()[slot])
    }

    /// Charge an expense against the budget.
    ///
    /// The budget is checked before the date, so an expense violating both
    /// reports `BudgetExceeded`.
    ///
    /// # Errors
    ///
    /// - `BudgetExceeded` if the new total would exceed the budget or overflow
    /// - `DateOutOfRange` if the expense date is outside the plan's range
    pub fn add_expense(&mut self, expense: Expense) -> Result<&Expense, PlanningError> {
        let amount = expense.cost().amount();
        let total_after = self.total_expenses().checked_add(amount);
        match total_after {
            Some(total) if total <= self.budget.amount() => {}
            // An overflowing sum is over any representable budget.
            _ => {
                return Err(PlanningError::BudgetExceeded {
                    description: expense.description().to_string(),
                    amount,
                    total_after: total_after.unwrap_or(i64::MAX),
                    budget: self.budget.amount(),
                })
            }
        }
        self.ensure_in_range(DatedItem::Expense, expense.date())?;

        let index = self.expenses.len();
        self.expenses.push(expense);
        self.touch();
        Ok(&self.expenses[index])
    }

    /// Replace the budget (amount and currency together).
    ///
    /// # Errors
    ///
    /// - `BudgetBelowSpend` if the new amount is below current spending
    pub fn set_budget(&mut self, budget: Money) -> Result<(), PlanningError> {
        let spent = self.total_expenses();
        if budget.amount() < spent {
            return Err(PlanningError::BudgetBelowSpend {
                requested: budget.amount(),
                spent,
            });
        }

        self.budget = budget;
        self.touch();
        Ok(())
    }

    /// Replace the date range. Rejected wholesale if any day or expense
    /// would fall outside it; nothing is cascaded.
    ///
    /// # Errors
    ///
    /// - `DateOutOfRange` listing the stranded day dates, checked first
    /// - `DateOutOfRange` listing the stranded expense dates
    pub fn set_date_range(&mut self, range: DateRange) -> Result<(), PlanningError> {
        let stranded_days: Vec<NaiveDate> = self
            .days
            .iter()
            .map(TravelDay::date)
            .filter(|date| !range.contains(*date))
            .collect();
        if !stranded_days.is_empty() {
            return Err(PlanningError::DateOutOfRange {
                subject: DatedItem::TravelDay,
                dates: stranded_days,
                range,
            });
        }

        let stranded_expenses: Vec<NaiveDate> = self
            .expenses
            .iter()
            .map(Expense::date)
            .filter(|date| !range.contains(*date))
            .collect();
        if !stranded_expenses.is_empty() {
            return Err(PlanningError::DateOutOfRange {
                subject: DatedItem::Expense,
                dates: stranded_expenses,
                range,
            });
        }

        self.date_range = range;
        self.touch();
        Ok(())
    }

    /// Remove the day on `date` together with its activities.
    ///
    /// Returns false if there was no such day.
    pub fn remove_travel_day(&mut self, date: NaiveDate) -> bool {
        match self.days.iter().position(|day| day.date() == date) {
            Some(index) => {
                self.days.remove(index);
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Remove the expense with `id`.
    ///
    /// Returns false if there was no such expense.
    pub fn remove_expense(&mut self, id: &ExpenseId) -> bool {
        match self.expenses.iter().position(|e| e.id() == id) {
            Some(index) => {
                self.expenses.remove(index);
                self.touch();
                true
            }
            None => false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_in_range(&self, subject: DatedItem, date: NaiveDate) -> Result<(), PlanningError> {
        if self.date_range.contains(date) {
            Ok(())
        } else {
            Err(PlanningError::DateOutOfRange {
                subject,
                dates: vec![date],
                range: self.date_range,
            })
        }
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }

    fn validate_name(name: &str) -> Result<(), ValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        let length = trimmed.chars().count();
        if length > MAX_NAME_LENGTH {
            return Err(ValidationError::too_long("name", MAX_NAME_LENGTH, length));
        }
        Ok(())
    }
}
