//! Helpers shared by the travel plan handlers.

use crate::domain::foundation::TravelPlanId;
use crate::domain::planning::{PlanningError, TravelPlan, TravelPlanError};
use crate::ports::TravelPlanRepository;

/// Load a plan or fail with `NotFound`.
pub(super) async fn load_plan(
    repository: &dyn TravelPlanRepository,
    plan_id: &TravelPlanId,
) -> Result<TravelPlan, TravelPlanError> {
    repository
        .find_by_id(plan_id)
        .await
        .map_err(|e| {
            tracing::error!(plan_id = %plan_id, error = %e, "Failed to load travel plan");
            TravelPlanError::from(e)
        })?
        .ok_or_else(|| TravelPlanError::not_found(*plan_id))
}

/// Store a mutated plan.
pub(super) async fn store_plan(
    repository: &dyn TravelPlanRepository,
    plan: &TravelPlan,
) -> Result<(), TravelPlanError> {
    repository.update(plan).await.map_err(|e| {
        tracing::error!(plan_id = %plan.id(), error = %e, "Failed to store travel plan");
        TravelPlanError::from(e)
    })
}

/// Log a rule violation and lift it into a use-case error.
pub(super) fn rejected(plan_id: &TravelPlanId, err: PlanningError) -> TravelPlanError {
    tracing::warn!(plan_id = %plan_id, code = %err.code(), "{}", err);
    TravelPlanError::from(err)
}

#[cfg(test)]
pub(super) mod testing {
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use crate::adapters::memory::InMemoryTravelPlanRepository;
    use crate::application::PlanLocks;
    use crate::domain::foundation::{DomainError, ErrorCode, TravelPlanId};
    use crate::domain::planning::{DateRange, Money, TravelPlan};
    use crate::ports::TravelPlanRepository;

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub fn idr(amount: i64) -> Money {
        Money::new(amount, "IDR").unwrap()
    }

    /// Repository seeded with a 2024-12-01..=2024-12-07 plan budgeted at 5,000,000 IDR.
    pub async fn seeded() -> (Arc<InMemoryTravelPlanRepository>, Arc<PlanLocks>, TravelPlanId) {
        let repo = Arc::new(InMemoryTravelPlanRepository::new());
        let plan = TravelPlan::new(
            TravelPlanId::new(),
            "Yogyakarta",
            DateRange::new(date(2024, 12, 1), date(2024, 12, 7)).unwrap(),
            idr(5_000_000),
        )
        .unwrap();
        repo.save(&plan).await.unwrap();
        (repo, Arc::new(PlanLocks::new()), *plan.id())
    }

    /// Repository whose reads succeed and whose writes always fail.
    pub struct FailingWrites {
        pub inner: InMemoryTravelPlanRepository,
    }

    #[async_trait]
    impl TravelPlanRepository for FailingWrites {
        async fn save(&self, _plan: &TravelPlan) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::StorageError, "Simulated save failure"))
        }

        async fn update(&self, _plan: &TravelPlan) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::StorageError, "Simulated update failure"))
        }

        async fn find_by_id(&self, id: &TravelPlanId) -> Result<Option<TravelPlan>, DomainError> {
            self.inner.find_by_id(id).await
        }
    }
}
