//! Travel plan command and query handlers.

mod add_activity;
mod add_expense;
mod add_travel_day;
mod create_travel_plan;
mod get_travel_plan;
mod remove_expense;
mod remove_travel_day;
mod set_budget;
mod set_date_range;
mod support;

pub use add_activity::{AddActivityCommand, AddActivityHandler, AddActivityResult};
pub use add_expense::{AddExpenseCommand, AddExpenseHandler, AddExpenseResult};
pub use add_travel_day::{AddTravelDayCommand, AddTravelDayHandler, AddTravelDayResult};
pub use create_travel_plan::{CreateTravelPlanCommand, CreateTravelPlanHandler};
pub use get_travel_plan::{GetTravelDayQuery, GetTravelPlanHandler, GetTravelPlanQuery};
pub use remove_expense::{RemoveExpenseCommand, RemoveExpenseHandler};
pub use remove_travel_day::{RemoveTravelDayCommand, RemoveTravelDayHandler};
pub use set_budget::{SetBudgetCommand, SetBudgetHandler};
pub use set_date_range::{SetDateRangeCommand, SetDateRangeHandler};
