//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, and error types that form the
//! vocabulary shared by every part of the travel planner.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ActivityId, ExpenseId, TravelDayId, TravelPlanId};
pub use timestamp::Timestamp;
