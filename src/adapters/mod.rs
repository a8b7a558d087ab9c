//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - In-process repository
//! - `http` - axum REST surface

pub mod http;
pub mod memory;

pub use memory::InMemoryTravelPlanRepository;
