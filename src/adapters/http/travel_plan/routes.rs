//! HTTP routes for travel plan endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{
    add_activity, add_expense, add_travel_day, create_travel_plan, get_travel_day,
    get_travel_plan, remove_expense, remove_travel_day, set_budget, set_date_range,
    TravelPlanHandlers,
};

/// Creates the travel plan router with all endpoints.
pub fn travel_plan_routes(handlers: TravelPlanHandlers) -> Router {
    Router::new()
        .route("/", post(create_travel_plan))
        .route("/:id", get(get_travel_plan))
        .route("/:id/days", post(add_travel_day))
        .route("/:id/days/:date", get(get_travel_day).delete(remove_travel_day))
        .route("/:id/days/:date/activities", post(add_activity))
        .route("/:id/expenses", post(add_expense))
        .route("/:id/expenses/:expense_id", delete(remove_expense))
        .route("/:id/budget", put(set_budget))
        .route("/:id/date-range", put(set_date_range))
        .with_state(handlers)
}
