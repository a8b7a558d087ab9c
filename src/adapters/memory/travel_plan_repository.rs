//! In-Memory Travel Plan Repository
//!
//! Keeps whole aggregates in a map. Plans are cloned on the way in and out,
//! so no caller ever holds a live handle into the store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, TravelPlanId};
use crate::domain::planning::TravelPlan;
use crate::ports::TravelPlanRepository;

/// In-memory storage for travel plans
#[derive(Debug, Clone, Default)]
pub struct InMemoryTravelPlanRepository {
    plans: Arc<RwLock<HashMap<TravelPlanId, TravelPlan>>>,
}

impl InMemoryTravelPlanRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored plans
    pub async fn len(&self) -> usize {
        self.plans.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.plans.read().await.is_empty()
    }
}

#[async_trait]
impl TravelPlanRepository for InMemoryTravelPlanRepository {
    async fn save(&self, plan: &TravelPlan) -> Result<(), DomainError> {
        let mut plans = self.plans.write().await;
        if plans.contains_key(plan.id()) {
            return Err(DomainError::new(
                ErrorCode::StorageError,
                format!("Travel plan already stored: {}", plan.id()),
            ));
        }
        plans.insert(*plan.id(), plan.clone());
        tracing::debug!(plan_id = %plan.id(), "Stored new travel plan");
        Ok(())
    }

    async fn update(&self, plan: &TravelPlan) -> Result<(), DomainError> {
        let mut plans = self.plans.write().await;
        match plans.get_mut(plan.id()) {
            Some(stored) => {
                *stored = plan.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::PlanNotFound,
                format!("Travel plan not found: {}", plan.id()),
            )),
        }
    }

    async fn find_by_id(&self, id: &TravelPlanId) -> Result<Option<TravelPlan>, DomainError> {
        Ok(self.plans.read().await.get(id).cloned())
    }
}
