//! HTTP adapter for travel plan endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ActivityResponse, AddActivityRequest, AddExpenseRequest, AddTravelDayRequest,
    CreateTravelPlanRequest, DateRangeDto, ErrorResponse, ExpenseResponse, MoneyDto,
    SetBudgetRequest, SetDateRangeRequest, TravelDayResponse, TravelPlanResponse,
};
pub use handlers::TravelPlanHandlers;
pub use routes::travel_plan_routes;
