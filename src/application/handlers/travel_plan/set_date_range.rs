//! SetDateRangeHandler - Command handler for replacing a plan's date range.

use std::sync::Arc;

use super::support::{load_plan, rejected, store_plan};
use crate::application::PlanLocks;
use crate::domain::foundation::TravelPlanId;
use crate::domain::planning::{DateRange, TravelPlan, TravelPlanError};
use crate::ports::TravelPlanRepository;

#[derive(Debug, Clone)]
pub struct SetDateRangeCommand {
    pub plan_id: TravelPlanId,
    pub date_range: DateRange,
}

pub struct SetDateRangeHandler {
    repository: Arc<dyn TravelPlanRepository>,
    locks: Arc<PlanLocks>,
}

impl SetDateRangeHandler {
    pub fn new(repository: Arc<dyn TravelPlanRepository>, locks: Arc<PlanLocks>) -> Self {
        Self { repository, locks }
    }

    pub async fn handle(&self, cmd: SetDateRangeCommand) -> Result<TravelPlan, TravelPlanError> {
        let _guard = self.locks.acquire(cmd.plan_id).await;
        let mut plan = load_plan(self.repository.as_ref(), &cmd.plan_id).await?;

        plan.set_date_range(cmd.date_range)
            .map_err(|e| rejected(&cmd.plan_id, e))?;

        store_plan(self.repository.as_ref(), &plan).await?;
        tracing::debug!(plan_id = %cmd.plan_id, range = %cmd.date_range, "Replaced date range");
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::super::support::testing::{date, seeded};
    use super::*;
    use crate::domain::planning::PlanningError;

    #[tokio::test]
    async fn range_that_strands_a_day_is_rejected() {
        let (repo, locks, plan_id) = seeded().await;
        let mut plan = repo.find_by_id(&plan_id).await.unwrap().unwrap();
        plan.add_travel_day(date(2024, 12, 5)).unwrap();
        repo.update(&plan).await.unwrap();
        let original = *plan.date_range();
        let handler = SetDateRangeHandler::new(repo.clone(), locks);

        let result = handler
            .handle(SetDateRangeCommand {
                plan_id,
                date_range: DateRange::new(date(2024, 12, 6), date(2024, 12, 10)).unwrap(),
            })
            .await;

        assert!(matches!(
            result,
            Err(TravelPlanError::Rejected(PlanningError::DateOutOfRange { .. }))
        ));
        let stored = repo.find_by_id(&plan_id).await.unwrap().unwrap();
        assert_eq!(stored.date_range(), &original);
    }

    #[tokio::test]
    async fn compatible_range_is_stored() {
        let (repo, locks, plan_id) = seeded().await;
        let handler = SetDateRangeHandler::new(repo.clone(), locks);
        let range = DateRange::new(date(2024, 12, 2), date(2024, 12, 20)).unwrap();

        handler
            .handle(SetDateRangeCommand {
                plan_id,
                date_range: range,
            })
            .await
            .unwrap();

        let stored = repo.find_by_id(&plan_id).await.unwrap().unwrap();
        assert_eq!(stored.date_range(), &range);
    }
}
