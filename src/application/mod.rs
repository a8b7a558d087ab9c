//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers load a plan, apply one aggregate operation, and store
//! the result; query handlers only read.

pub mod handlers;
mod plan_locks;

pub use plan_locks::PlanLocks;
