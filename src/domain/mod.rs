//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `planning` - Travel plan aggregate, its entities and value objects

pub mod foundation;
pub mod planning;
