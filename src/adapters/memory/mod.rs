//! In-memory adapters for development and tests.

mod travel_plan_repository;

pub use travel_plan_repository::InMemoryTravelPlanRepository;
