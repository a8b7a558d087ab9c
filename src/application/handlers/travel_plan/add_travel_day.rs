//! AddTravelDayHandler - Command handler for adding a day to a plan.

use std::sync::Arc;

use chrono::NaiveDate;

use super::support::{load_plan, rejected, store_plan};
use crate::application::PlanLocks;
use crate::domain::foundation::{TravelDayId, TravelPlanId};
use crate::domain::planning::{TravelPlan, TravelPlanError};
use crate::ports::TravelPlanRepository;

/// Command to add an empty day to a plan.
#[derive(Debug, Clone)]
pub struct AddTravelDayCommand {
    pub plan_id: TravelPlanId,
    pub date: NaiveDate,
}

/// Result of a successful add.
#[derive(Debug, Clone)]
pub struct AddTravelDayResult {
    pub plan: TravelPlan,
    pub day_id: TravelDayId,
}

pub struct AddTravelDayHandler {
    repository: Arc<dyn TravelPlanRepository>,
    locks: Arc<PlanLocks>,
}

impl AddTravelDayHandler {
    pub fn new(repository: Arc<dyn TravelPlanRepository>, locks: Arc<PlanLocks>) -> Self {
        Self { repository, locks }
    }

    pub async fn handle(&self, cmd: AddTravelDayCommand) -> Result<AddTravelDayResult, TravelPlanError> {
        let _guard = self.locks.acquire(cmd.plan_id).await;
        let mut plan = load_plan(self.repository.as_ref(), &cmd.plan_id).await?;

        let day_id = match plan.add_travel_day(cmd.date) {
            Ok(day) => *day.id(),
            Err(e) => return Err(rejected(&cmd.plan_id, e)),
        };

        store_plan(self.repository.as_ref(), &plan).await?;
        tracing::debug!(plan_id = %cmd.plan_id, date = %cmd.date, "Added travel day");
        Ok(AddTravelDayResult { plan, day_id })
    }
}

#[cfg(test)]
mod tests {
    use super::super::support::testing::{date, seeded};
    use super::*;
    use crate::domain::planning::PlanningError;

    #[tokio::test]
    async fn adds_day_and_persists() {
        let (repo, locks, plan_id) = seeded().await;
        let handler = AddTravelDayHandler::new(repo.clone(), locks);

        let result = handler
            .handle(AddTravelDayCommand {
                plan_id,
                date: date(2024, 12, 3),
            })
            .await
            .unwrap();

        assert_eq!(result.plan.day_count(), 1);
        let stored = repo.find_by_id(&plan_id).await.unwrap().unwrap();
        assert_eq!(stored.travel_day(date(2024, 12, 3)).map(|d| *d.id()), Some(result.day_id));
    }

    #[tokio::test]
    async fn out_of_range_day_is_rejected_and_not_persisted() {
        let (repo, locks, plan_id) = seeded().await;
        let handler = AddTravelDayHandler::new(repo.clone(), locks);

        let result = handler
            .handle(AddTravelDayCommand {
                plan_id,
                date: date(2024, 12, 15),
            })
            .await;

        assert!(matches!(
            result,
            Err(TravelPlanError::Rejected(PlanningError::DateOutOfRange { .. }))
        ));
        let stored = repo.find_by_id(&plan_id).await.unwrap().unwrap();
        assert!(stored.days().is_empty());
    }

    #[tokio::test]
    async fn duplicate_day_is_rejected() {
        let (repo, locks, plan_id) = seeded().await;
        let handler = AddTravelDayHandler::new(repo, locks);
        let cmd = AddTravelDayCommand {
            plan_id,
            date: date(2024, 12, 4),
        };

        handler.handle(cmd.clone()).await.unwrap();
        let result = handler.handle(cmd).await;

        assert!(matches!(
            result,
            Err(TravelPlanError::Rejected(PlanningError::DuplicateDate(_)))
        ));
    }

    #[tokio::test]
    async fn concurrent_adds_of_one_date_admit_exactly_one() {
        let (repo, locks, plan_id) = seeded().await;
        let handler = Arc::new(AddTravelDayHandler::new(repo.clone(), locks));

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let handler = Arc::clone(&handler);
                tokio::spawn(async move {
                    handler
                        .handle(AddTravelDayCommand {
                            plan_id,
                            date: date(2024, 12, 5),
                        })
                        .await
                })
            })
            .collect();

        let mut successes = 0;
        for task in tasks {
            if task.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        let stored = repo.find_by_id(&plan_id).await.unwrap().unwrap();
        assert_eq!(stored.day_count(), 1);
    }
}
