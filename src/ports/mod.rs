//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TravelPlanRepository` - Persistence for the travel plan aggregate

mod travel_plan_repository;

pub use travel_plan_repository::TravelPlanRepository;
