//! HTTP handlers for travel plan endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;

use crate::application::handlers::travel_plan::{
    AddActivityCommand, AddActivityHandler, AddExpenseCommand, AddExpenseHandler,
    AddTravelDayCommand, AddTravelDayHandler, CreateTravelPlanCommand, CreateTravelPlanHandler,
    GetTravelDayQuery, GetTravelPlanHandler, GetTravelPlanQuery, RemoveExpenseCommand,
    RemoveExpenseHandler, RemoveTravelDayCommand, RemoveTravelDayHandler, SetBudgetCommand,
    SetBudgetHandler, SetDateRangeCommand, SetDateRangeHandler,
};
use crate::application::PlanLocks;
use crate::domain::foundation::{ExpenseId, TravelPlanId};
use crate::domain::planning::{Activity, Expense, PlanningError, TravelPlan, TravelPlanError};
use crate::ports::TravelPlanRepository;

use super::dto::{
    AddActivityRequest, AddExpenseRequest, AddTravelDayRequest, CreateTravelPlanRequest,
    ErrorResponse, SetBudgetRequest, SetDateRangeRequest, TravelDayResponse, TravelPlanResponse,
};

type HttpResult = Result<Response, Response>;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct TravelPlanHandlers {
    create_handler: Arc<CreateTravelPlanHandler>,
    get_handler: Arc<GetTravelPlanHandler>,
    add_day_handler: Arc<AddTravelDayHandler>,
    remove_day_handler: Arc<RemoveTravelDayHandler>,
    add_activity_handler: Arc<AddActivityHandler>,
    add_expense_handler: Arc<AddExpenseHandler>,
    remove_expense_handler: Arc<RemoveExpenseHandler>,
    set_budget_handler: Arc<SetBudgetHandler>,
    set_date_range_handler: Arc<SetDateRangeHandler>,
}

impl TravelPlanHandlers {
    /// Wires every use case against one repository and one lock registry.
    pub fn new(repository: Arc<dyn TravelPlanRepository>, locks: Arc<PlanLocks>) -> Self {
        Self {
            create_handler: Arc::new(CreateTravelPlanHandler::new(repository.clone())),
            get_handler: Arc::new(GetTravelPlanHandler::new(repository.clone())),
            add_day_handler: Arc::new(AddTravelDayHandler::new(repository.clone(), locks.clone())),
            remove_day_handler: Arc::new(RemoveTravelDayHandler::new(
                repository.clone(),
                locks.clone(),
            )),
            add_activity_handler: Arc::new(AddActivityHandler::new(
                repository.clone(),
                locks.clone(),
            )),
            add_expense_handler: Arc::new(AddExpenseHandler::new(repository.clone(), locks.clone())),
            remove_expense_handler: Arc::new(RemoveExpenseHandler::new(
                repository.clone(),
                locks.clone(),
            )),
            set_budget_handler: Arc::new(SetBudgetHandler::new(repository.clone(), locks.clone())),
            set_date_range_handler: Arc::new(SetDateRangeHandler::new(repository, locks)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/plans - Create a new travel plan
pub async fn create_travel_plan(
    State(handlers): State<TravelPlanHandlers>,
    Json(req): Json<CreateTravelPlanRequest>,
) -> HttpResult {
    let cmd = CreateTravelPlanCommand {
        name: req.name,
        date_range: req.date_range.into_domain().map_err(bad_input)?,
        budget: req.budget.into_domain().map_err(bad_input)?,
    };

    let plan = handlers
        .create_handler
        .handle(cmd)
        .await
        .map_err(handle_travel_plan_error)?;
    Ok(plan_response(StatusCode::CREATED, &plan))
}

/// GET /api/plans/:id - Get a plan with its days and expenses
pub async fn get_travel_plan(
    State(handlers): State<TravelPlanHandlers>,
    Path(plan_id): Path<String>,
) -> HttpResult {
    let query = GetTravelPlanQuery {
        plan_id: parse_plan_id(&plan_id)?,
    };

    let plan = handlers
        .get_handler
        .handle(query)
        .await
        .map_err(handle_travel_plan_error)?;
    Ok(plan_response(StatusCode::OK, &plan))
}

/// POST /api/plans/:id/days - Add an empty day
pub async fn add_travel_day(
    State(handlers): State<TravelPlanHandlers>,
    Path(plan_id): Path<String>,
    Json(req): Json<AddTravelDayRequest>,
) -> HttpResult {
    let cmd = AddTravelDayCommand {
        plan_id: parse_plan_id(&plan_id)?,
        date: req.date,
    };

    let result = handlers
        .add_day_handler
        .handle(cmd)
        .await
        .map_err(handle_travel_plan_error)?;
    Ok(plan_response(StatusCode::CREATED, &result.plan))
}

/// GET /api/plans/:id/days/:date - Get one day and its activities
pub async fn get_travel_day(
    State(handlers): State<TravelPlanHandlers>,
    Path((plan_id, date)): Path<(String, String)>,
) -> HttpResult {
    let query = GetTravelDayQuery {
        plan_id: parse_plan_id(&plan_id)?,
        date: parse_date(&date)?,
    };

    let day = handlers
        .get_handler
        .handle_day(query)
        .await
        .map_err(handle_travel_plan_error)?;
    Ok((StatusCode::OK, Json(TravelDayResponse::from(&day))).into_response())
}

/// DELETE /api/plans/:id/days/:date - Remove a day and its activities
pub async fn remove_travel_day(
    State(handlers): State<TravelPlanHandlers>,
    Path((plan_id, date)): Path<(String, String)>,
) -> HttpResult {
    let cmd = RemoveTravelDayCommand {
        plan_id: parse_plan_id(&plan_id)?,
        date: parse_date(&date)?,
    };

    let plan = handlers
        .remove_day_handler
        .handle(cmd)
        .await
        .map_err(handle_travel_plan_error)?;
    Ok(plan_response(StatusCode::OK, &plan))
}

/// POST /api/plans/:id/days/:date/activities - Schedule an activity
pub async fn add_activity(
    State(handlers): State<TravelPlanHandlers>,
    Path((plan_id, date)): Path<(String, String)>,
    Json(req): Json<AddActivityRequest>,
) -> HttpResult {
    let activity = Activity::new(req.start, req.end, req.location, req.description)
        .map_err(bad_input)?;
    let cmd = AddActivityCommand {
        plan_id: parse_plan_id(&plan_id)?,
        date: parse_date(&date)?,
        activity,
    };

    let result = handlers
        .add_activity_handler
        .handle(cmd)
        .await
        .map_err(handle_travel_plan_error)?;
    Ok(plan_response(StatusCode::CREATED, &result.plan))
}

/// POST /api/plans/:id/expenses - Charge an expense to the plan
pub async fn add_expense(
    State(handlers): State<TravelPlanHandlers>,
    Path(plan_id): Path<String>,
    Json(req): Json<AddExpenseRequest>,
) -> HttpResult {
    let cost = req.cost.into_domain().map_err(bad_input)?;
    let cmd = AddExpenseCommand {
        plan_id: parse_plan_id(&plan_id)?,
        expense: Expense::new(req.description, cost, req.date),
    };

    let result = handlers
        .add_expense_handler
        .handle(cmd)
        .await
        .map_err(handle_travel_plan_error)?;
    Ok(plan_response(StatusCode::CREATED, &result.plan))
}

/// DELETE /api/plans/:id/expenses/:expense_id - Remove an expense
pub async fn remove_expense(
    State(handlers): State<TravelPlanHandlers>,
    Path((plan_id, expense_id)): Path<(String, String)>,
) -> HttpResult {
    let expense_id = expense_id
        .parse::<ExpenseId>()
        .map_err(|_| bad_request("Invalid expense ID"))?;
    let cmd = RemoveExpenseCommand {
        plan_id: parse_plan_id(&plan_id)?,
        expense_id,
    };

    let plan = handlers
        .remove_expense_handler
        .handle(cmd)
        .await
        .map_err(handle_travel_plan_error)?;
    Ok(plan_response(StatusCode::OK, &plan))
}

/// PUT /api/plans/:id/budget - Replace the budget
pub async fn set_budget(
    State(handlers): State<TravelPlanHandlers>,
    Path(plan_id): Path<String>,
    Json(req): Json<SetBudgetRequest>,
) -> HttpResult {
    let cmd = SetBudgetCommand {
        plan_id: parse_plan_id(&plan_id)?,
        budget: req.budget.into_domain().map_err(bad_input)?,
    };

    let plan = handlers
        .set_budget_handler
        .handle(cmd)
        .await
        .map_err(handle_travel_plan_error)?;
    Ok(plan_response(StatusCode::OK, &plan))
}

/// PUT /api/plans/:id/date-range - Replace the date range
pub async fn set_date_range(
    State(handlers): State<TravelPlanHandlers>,
    Path(plan_id): Path<String>,
    Json(req): Json<SetDateRangeRequest>,
) -> HttpResult {
    let cmd = SetDateRangeCommand {
        plan_id: parse_plan_id(&plan_id)?,
        date_range: req.date_range.into_domain().map_err(bad_input)?,
    };

    let plan = handlers
        .set_date_range_handler
        .handle(cmd)
        .await
        .map_err(handle_travel_plan_error)?;
    Ok(plan_response(StatusCode::OK, &plan))
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

fn plan_response(status: StatusCode, plan: &TravelPlan) -> Response {
    (status, Json(TravelPlanResponse::from(plan))).into_response()
}

fn parse_plan_id(raw: &str) -> Result<TravelPlanId, Response> {
    raw.parse::<TravelPlanId>()
        .map_err(|_| bad_request("Invalid travel plan ID"))
}

fn parse_date(raw: &str) -> Result<NaiveDate, Response> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| bad_request(format!("Invalid date: {}", raw)))
}

fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(message)),
    )
        .into_response()
}

/// Construction failures of value objects in the request body.
fn bad_input(error: PlanningError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::from_code(error.code(), error.to_string())),
    )
        .into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_travel_plan_error(error: TravelPlanError) -> Response {
    let status = match &error {
        TravelPlanError::NotFound(_)
        | TravelPlanError::DayNotFound(_)
        | TravelPlanError::ExpenseNotFound(_) => StatusCode::NOT_FOUND,
        TravelPlanError::Rejected(_) => StatusCode::BAD_REQUEST,
        TravelPlanError::Infrastructure(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal(error.message())),
            )
                .into_response()
        }
    };

    (
        status,
        Json(ErrorResponse::from_code(error.code(), error.message())),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn plan_not_found_maps_to_404() {
        let response = handle_travel_plan_error(TravelPlanError::not_found(TravelPlanId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn missing_day_and_expense_map_to_404() {
        let day = handle_travel_plan_error(TravelPlanError::day_not_found(date(2024, 12, 3)));
        let expense = handle_travel_plan_error(TravelPlanError::expense_not_found(ExpenseId::new()));
        assert_eq!(day.status(), StatusCode::NOT_FOUND);
        assert_eq!(expense.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn rule_violation_maps_to_400() {
        let error = TravelPlanError::from(PlanningError::DuplicateDate(date(2024, 12, 3)));
        let response = handle_travel_plan_error(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn infrastructure_maps_to_500() {
        let response = handle_travel_plan_error(TravelPlanError::infrastructure("disk full"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn malformed_path_values_are_bad_requests() {
        assert_eq!(
            parse_plan_id("not-a-uuid").unwrap_err().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            parse_date("2024-13-01").unwrap_err().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(parse_date("2024-12-01").unwrap(), date(2024, 12, 1));
    }
}
