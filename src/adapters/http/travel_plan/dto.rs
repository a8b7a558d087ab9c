//! HTTP DTOs for travel plan endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ErrorCode;
use crate::domain::planning::{
    Activity, DateRange, Expense, Location, Money, PlanningError, TravelDay, TravelPlan,
};

// ════════════════════════════════════════════════════════════════════════════
// Shared shapes
// ════════════════════════════════════════════════════════════════════════════

/// Inclusive calendar range as sent and returned over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeDto {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRangeDto {
    pub fn into_domain(self) -> Result<DateRange, PlanningError> {
        DateRange::new(self.start, self.end)
    }
}

impl From<&DateRange> for DateRangeDto {
    fn from(range: &DateRange) -> Self {
        Self {
            start: range.start(),
            end: range.end(),
        }
    }
}

/// Amount in minor units plus an ISO currency tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyDto {
    pub amount: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    Money::DEFAULT_CURRENCY.to_string()
}

impl MoneyDto {
    pub fn into_domain(self) -> Result<Money, PlanningError> {
        Money::new(self.amount, self.currency)
    }
}

impl From<&Money> for MoneyDto {
    fn from(money: &Money) -> Self {
        Self {
            amount: money.amount(),
            currency: money.currency().to_string(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a new travel plan.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTravelPlanRequest {
    pub name: String,
    pub date_range: DateRangeDto,
    pub budget: MoneyDto,
}

/// Request to add an empty day.
#[derive(Debug, Clone, Deserialize)]
pub struct AddTravelDayRequest {
    pub date: NaiveDate,
}

/// Request to schedule an activity on an existing day.
#[derive(Debug, Clone, Deserialize)]
pub struct AddActivityRequest {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub location: Location,
    pub description: String,
}

/// Request to charge an expense to the plan.
#[derive(Debug, Clone, Deserialize)]
pub struct AddExpenseRequest {
    pub description: String,
    pub cost: MoneyDto,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetBudgetRequest {
    pub budget: MoneyDto,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetDateRangeRequest {
    pub date_range: DateRangeDto,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct ActivityResponse {
    pub id: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub location: Location,
    pub description: String,
}

impl From<&Activity> for ActivityResponse {
    fn from(activity: &Activity) -> Self {
        Self {
            id: activity.id().to_string(),
            start: activity.start(),
            end: activity.end(),
            location: activity.location().clone(),
            description: activity.description().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TravelDayResponse {
    pub id: String,
    pub date: NaiveDate,
    pub activities: Vec<ActivityResponse>,
}

impl From<&TravelDay> for TravelDayResponse {
    fn from(day: &TravelDay) -> Self {
        Self {
            id: day.id().to_string(),
            date: day.date(),
            activities: day.activities().iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpenseResponse {
    pub id: String,
    pub description: String,
    pub cost: MoneyDto,
    pub date: NaiveDate,
}

impl From<&Expense> for ExpenseResponse {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id().to_string(),
            description: expense.description().to_string(),
            cost: expense.cost().into(),
            date: expense.date(),
        }
    }
}

/// Full plan view including derived budget figures.
#[derive(Debug, Clone, Serialize)]
pub struct TravelPlanResponse {
    pub id: String,
    pub name: String,
    pub date_range: DateRangeDto,
    pub budget: MoneyDto,
    pub days: Vec<TravelDayResponse>,
    pub expenses: Vec<ExpenseResponse>,
    pub total_expenses: i64,
    pub remaining_budget: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&TravelPlan> for TravelPlanResponse {
    fn from(plan: &TravelPlan) -> Self {
        Self {
            id: plan.id().to_string(),
            name: plan.name().to_string(),
            date_range: plan.date_range().into(),
            budget: plan.budget().into(),
            days: plan.days().iter().map(Into::into).collect(),
            expenses: plan.expenses().iter().map(Into::into).collect(),
            total_expenses: plan.total_expenses(),
            remaining_budget: plan.remaining_budget(),
            created_at: plan.created_at().as_datetime().to_rfc3339(),
            updated_at: plan.updated_at().as_datetime().to_rfc3339(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn from_code(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InternalError.to_string(),
            message: message.into(),
        }
    }
}
