//! AddActivityHandler - Command handler for scheduling an activity on a day.

use std::sync::Arc;

use chrono::NaiveDate;

use super::support::{load_plan, rejected, store_plan};
use crate::application::PlanLocks;
use crate::domain::foundation::{ActivityId, TravelPlanId};
use crate::domain::planning::{Activity, TravelPlan, TravelPlanError};
use crate::ports::TravelPlanRepository;

/// Command to add an activity to the day on `date`.
#[derive(Debug, Clone)]
pub struct AddActivityCommand {
    pub plan_id: TravelPlanId,
    pub date: NaiveDate,
    pub activity: Activity,
}

#[derive(Debug, Clone)]
pub struct AddActivityResult {
    pub plan: TravelPlan,
    pub activity_id: ActivityId,
}

pub struct AddActivityHandler {
    repository: Arc<dyn TravelPlanRepository>,
    locks: Arc<PlanLocks>,
}

impl AddActivityHandler {
    pub fn new(repository: Arc<dyn TravelPlanRepository>, locks: Arc<PlanLocks>) -> Self {
        Self { repository, locks }
    }

    pub async fn handle(&self, cmd: AddActivityCommand) -> Result<AddActivityResult, TravelPlanError> {
        let _guard = self.locks.acquire(cmd.plan_id).await;
        let mut plan = load_plan(self.repository.as_ref(), &cmd.plan_id).await?;

        let activity_id = match plan.add_activity(cmd.date, cmd.activity) {
            Ok(activity) => *activity.id(),
            Err(e) => return Err(rejected(&cmd.plan_id, e)),
        };

        store_plan(self.repository.as_ref(), &plan).await?;
        tracing::debug!(
            plan_id = %cmd.plan_id,
            date = %cmd.date,
            activity_id = %activity_id,
            "Added activity"
        );
        Ok(AddActivityResult { plan, activity_id })
    }
}
