//! RemoveTravelDayHandler - Command handler for dropping a day and its activities.

use std::sync::Arc;

use chrono::NaiveDate;

use super::support::{load_plan, store_plan};
use crate::application::PlanLocks;
use crate::domain::foundation::TravelPlanId;
use crate::domain::planning::{TravelPlan, TravelPlanError};
use crate::ports::TravelPlanRepository;

#[derive(Debug, Clone)]
pub struct RemoveTravelDayCommand {
    pub plan_id: TravelPlanId,
    pub date: NaiveDate,
}

pub struct RemoveTravelDayHandler {
    repository: Arc<dyn TravelPlanRepository>,
    locks: Arc<PlanLocks>,
}

impl RemoveTravelDayHandler {
    pub fn new(repository: Arc<dyn TravelPlanRepository>, locks: Arc<PlanLocks>) -> Self {
        Self { repository, locks }
    }

    /// Absence of the day is reported as `DayNotFound`; nothing is written.
    pub async fn handle(&self, cmd: RemoveTravelDayCommand) -> Result<TravelPlan, TravelPlanError> {
        let _guard = self.locks.acquire(cmd.plan_id).await;
        let mut plan = load_plan(self.repository.as_ref(), &cmd.plan_id).await?;

        if !plan.remove_travel_day(cmd.date) {
            return Err(TravelPlanError::day_not_found(cmd.date));
        }

        store_plan(self.repository.as_ref(), &plan).await?;
        tracing::debug!(plan_id = %cmd.plan_id, date = %cmd.date, "Removed travel day");
        Ok(plan)
    }
}
