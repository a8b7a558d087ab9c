//! SetBudgetHandler - Command handler for replacing a plan's budget.

use std::sync::Arc;

use super::support::{load_plan, rejected, store_plan};
use crate::application::PlanLocks;
use crate::domain::foundation::TravelPlanId;
use crate::domain::planning::{Money, TravelPlan, TravelPlanError};
use crate::ports::TravelPlanRepository;

#[derive(Debug, Clone)]
pub struct SetBudgetCommand {
    pub plan_id: TravelPlanId,
    pub budget: Money,
}

pub struct SetBudgetHandler {
    repository: Arc<dyn TravelPlanRepository>,
    locks: Arc<PlanLocks>,
}

impl SetBudgetHandler {
    pub fn new(repository: Arc<dyn TravelPlanRepository>, locks: Arc<PlanLocks>) -> Self {
        Self { repository, locks }
    }

    pub async fn handle(&self, cmd: SetBudgetCommand) -> Result<TravelPlan, TravelPlanError> {
        let _guard = self.locks.acquire(cmd.plan_id).await;
        let mut plan = load_plan(self.repository.as_ref(), &cmd.plan_id).await?;

        plan.set_budget(cmd.budget)
            .map_err(|e| rejected(&cmd.plan_id, e))?;

        store_plan(self.repository.as_ref(), &plan).await?;
        tracing::debug!(plan_id = %cmd.plan_id, budget = %plan.budget(), "Replaced budget");
        Ok(plan)
    }
}
