//! Travel planning domain module.
//!
//! A [`TravelPlan`] is the aggregate root. It owns a [`DateRange`], a budget
//! expressed as [`Money`], a list of [`TravelDay`]s (each holding
//! [`Activity`] entries) and a list of [`Expense`]s.
//!
//! # Rules enforced by the plan
//!
//! - Days and expenses are dated inside the plan's range
//! - Total expenses never exceed the budget
//! - Day dates are unique within a plan
//! - Activities on a day never overlap (touching endpoints is fine)

mod activity;
mod aggregate;
mod date_range;
mod errors;
mod expense;
mod location;
mod money;
mod travel_day;

pub use activity::Activity;
pub use aggregate::{TravelPlan, MAX_NAME_LENGTH};
pub use date_range::DateRange;
pub use errors::{DatedItem, PlanningError, TravelPlanError};
pub use expense::Expense;
pub use location::Location;
pub use money::Money;
pub use travel_day::TravelDay;
