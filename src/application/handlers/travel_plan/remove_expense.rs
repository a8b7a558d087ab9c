//! RemoveExpenseHandler - Command handler for deleting an expense.

use std::sync::Arc;

use super::support::{load_plan, store_plan};
use crate::application::PlanLocks;
use crate::domain::foundation::{ExpenseId, TravelPlanId};
use crate::domain::planning::{TravelPlan, TravelPlanError};
use crate::ports::TravelPlanRepository;

#[derive(Debug, Clone)]
pub struct RemoveExpenseCommand {
    pub plan_id: TravelPlanId,
    pub expense_id: ExpenseId,
}

pub struct RemoveExpenseHandler {
    repository: Arc<dyn TravelPlanRepository>,
    locks: Arc<PlanLocks>,
}

impl RemoveExpenseHandler {
    pub fn new(repository: Arc<dyn TravelPlanRepository>, locks: Arc<PlanLocks>) -> Self {
        Self { repository, locks }
    }

    /// Absence of the expense is reported as `ExpenseNotFound`; nothing is written.
    pub async fn handle(&self, cmd: RemoveExpenseCommand) -> Result<TravelPlan, TravelPlanError> {
        let _guard = self.locks.acquire(cmd.plan_id).await;
        let mut plan = load_plan(self.repository.as_ref(), &cmd.plan_id).await?;

        if !plan.remove_expense(&cmd.expense_id) {
            return Err(TravelPlanError::expense_not_found(cmd.expense_id));
        }

        store_plan(self.repository.as_ref(), &plan).await?;
        tracing::debug!(plan_id = %cmd.plan_id, expense_id = %cmd.expense_id, "Removed expense");
        Ok(plan)
    }
}
