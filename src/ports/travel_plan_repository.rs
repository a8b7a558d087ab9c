//! Travel plan repository port.
//!
//! Defines the contract for persisting and retrieving TravelPlan aggregates.
//! The whole aggregate is loaded and stored as a unit; days, activities and
//! expenses are never persisted on their own.
//!
//! # Concurrency
//!
//! Implementations do not serialize writers. Callers that mutate a plan
//! must hold that plan's lock (see `application::PlanLocks`) across
//! load, mutate and update.

use crate::domain::foundation::{DomainError, TravelPlanId};
use crate::domain::planning::TravelPlan;
use async_trait::async_trait;

/// Repository port for TravelPlan aggregate persistence.
#[async_trait]
pub trait TravelPlanRepository: Send + Sync {
    /// Save a new plan.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, plan: &TravelPlan) -> Result<(), DomainError>;

    /// Update an existing plan.
    ///
    /// # Errors
    ///
    /// - `PlanNotFound` if the plan doesn't exist
    /// - `StorageError` on persistence failure
    async fn update(&self, plan: &TravelPlan) -> Result<(), DomainError>;

    /// Find a plan by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &TravelPlanId) -> Result<Option<TravelPlan>, DomainError>;
}
