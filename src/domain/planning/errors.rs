//! Planning-specific error types.
//!
//! Two layers of failure exist here:
//!
//! - [`PlanningError`] - a rule of the aggregate or one of its value objects
//!   rejected an input. The aggregate is left exactly as it was.
//! - [`TravelPlanError`] - what a use case reports: a rejected rule, a
//!   missing plan/day/expense, or a storage fault.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound / DayNotFound / ExpenseNotFound | 404 |
//! | Rejected | 400 |
//! | Infrastructure | 500 |

use chrono::{NaiveDate, NaiveTime};
use std::fmt;
use thiserror::Error;

use super::DateRange;
use crate::domain::foundation::{DomainError, ErrorCode, ExpenseId, TravelPlanId, ValidationError};

/// Kind of dated child that fell outside a plan's date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatedItem {
    TravelDay,
    Expense,
}

impl fmt::Display for DatedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatedItem::TravelDay => write!(f, "Travel day"),
            DatedItem::Expense => write!(f, "Expense"),
        }
    }
}

fn format_dates(dates: &[NaiveDate]) -> String {
    dates
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A rule of the travel plan or one of its parts was violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanningError {
    #[error("Amount must not be negative, got {0}")]
    InvalidAmount(i64),

    #[error("Start date {start} is after end date {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Activity start {start} is after its end {end}")]
    InvalidTimeWindow { start: NaiveTime, end: NaiveTime },

    #[error("{subject} date(s) {} outside the plan range {range}", format_dates(.dates))]
    DateOutOfRange {
        subject: DatedItem,
        dates: Vec<NaiveDate>,
        range: DateRange,
    },

    #[error(
        "Expense '{description}' of {amount} exceeds the budget: total would be {total_after}, budget is {budget}"
    )]
    BudgetExceeded {
        description: String,
        amount: i64,
        total_after: i64,
        budget: i64,
    },

    #[error("New budget {requested} is below current spending of {spent}")]
    BudgetBelowSpend { requested: i64, spent: i64 },

    #[error("Activity '{new}' overlaps with '{existing}'")]
    ActivityConflict { new: String, existing: String },

    #[error("A travel day on {0} already exists")]
    DuplicateDate(NaiveDate),

    #[error("No travel day on {0}")]
    DayNotFound(NaiveDate),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl PlanningError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PlanningError::InvalidAmount(_) => ErrorCode::InvalidAmount,
            PlanningError::InvalidRange { .. } => ErrorCode::InvalidRange,
            PlanningError::InvalidTimeWindow { .. } => ErrorCode::InvalidTimeWindow,
            PlanningError::DateOutOfRange { .. } => ErrorCode::DateOutOfRange,
            PlanningError::BudgetExceeded { .. } => ErrorCode::BudgetExceeded,
            PlanningError::BudgetBelowSpend { .. } => ErrorCode::BudgetBelowSpend,
            PlanningError::ActivityConflict { .. } => ErrorCode::ActivityConflict,
            PlanningError::DuplicateDate(_) => ErrorCode::DuplicateDate,
            PlanningError::DayNotFound(_) => ErrorCode::DayNotFound,
            PlanningError::Validation(_) => ErrorCode::ValidationFailed,
        }
    }
}

/// Errors reported by travel plan use cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TravelPlanError {
    /// Plan was not found.
    NotFound(TravelPlanId),
    /// The plan has no day on this date.
    DayNotFound(NaiveDate),
    /// The plan has no expense with this id.
    ExpenseNotFound(ExpenseId),
    /// The aggregate rejected the change.
    Rejected(PlanningError),
    /// Infrastructure error.
    Infrastructure(String),
}

impl TravelPlanError {
    pub fn not_found(id: TravelPlanId) -> Self {
        TravelPlanError::NotFound(id)
    }
    pub fn day_not_found(date: NaiveDate) -> Self {
        TravelPlanError::DayNotFound(date)
    }
    pub fn expense_not_found(id: ExpenseId) -> Self {
        TravelPlanError::ExpenseNotFound(id)
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        TravelPlanError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            TravelPlanError::NotFound(_) => ErrorCode::PlanNotFound,
            TravelPlanError::DayNotFound(_) => ErrorCode::DayNotFound,
            TravelPlanError::ExpenseNotFound(_) => ErrorCode::ExpenseNotFound,
            TravelPlanError::Rejected(err) => err.code(),
            TravelPlanError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            TravelPlanError::NotFound(id) => format!("Travel plan not found: {}", id),
            TravelPlanError::DayNotFound(date) => format!("Travel day not found: {}", date),
            TravelPlanError::ExpenseNotFound(id) => format!("Expense not found: {}", id),
            TravelPlanError::Rejected(err) => err.to_string(),
            TravelPlanError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl fmt::Display for TravelPlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for TravelPlanError {}

impl From<PlanningError> for TravelPlanError {
    fn from(err: PlanningError) -> Self {
        match err {
            PlanningError::DayNotFound(date) => TravelPlanError::DayNotFound(date),
            other => TravelPlanError::Rejected(other),
        }
    }
}

impl From<ValidationError> for TravelPlanError {
    fn from(err: ValidationError) -> Self {
        TravelPlanError::Rejected(PlanningError::Validation(err))
    }
}

impl From<DomainError> for TravelPlanError {
    fn from(err: DomainError) -> Self {
        TravelPlanError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_out_of_range_lists_every_date() {
        let range = DateRange::new(date(2024, 12, 6), date(2024, 12, 10)).unwrap();
        let err = PlanningError::DateOutOfRange {
            subject: DatedItem::TravelDay,
            dates: vec![date(2024, 12, 4), date(2024, 12, 5)],
            range,
        };
        assert_eq!(
            err.to_string(),
            "Travel day date(s) 2024-12-04, 2024-12-05 outside the plan range 2024-12-06..=2024-12-10"
        );
    }

    #[test]
    fn activity_conflict_names_both_activities() {
        let err = PlanningError::ActivityConflict {
            new: "Lunch".to_string(),
            existing: "Museum".to_string(),
        };
        assert_eq!(err.to_string(), "Activity 'Lunch' overlaps with 'Museum'");
        assert_eq!(err.code(), ErrorCode::ActivityConflict);
    }

    #[test]
    fn day_not_found_becomes_use_case_not_found() {
        let err: TravelPlanError = PlanningError::DayNotFound(date(2024, 12, 3)).into();
        assert_eq!(err, TravelPlanError::DayNotFound(date(2024, 12, 3)));
        assert_eq!(err.code(), ErrorCode::DayNotFound);
    }

    #[test]
    fn rule_violations_keep_their_code() {
        let err: TravelPlanError = PlanningError::DuplicateDate(date(2024, 12, 3)).into();
        assert_eq!(err.code(), ErrorCode::DuplicateDate);
        assert_eq!(err.message(), "A travel day on 2024-12-03 already exists");
    }

    #[test]
    fn domain_error_becomes_infrastructure() {
        let err: TravelPlanError = DomainError::new(ErrorCode::StorageError, "disk full").into();
        assert!(matches!(err, TravelPlanError::Infrastructure(_)));
        assert!(!err.code().is_client_error());
    }
}
