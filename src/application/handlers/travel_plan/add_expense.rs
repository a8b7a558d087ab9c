//! AddExpenseHandler - Command handler for charging an expense to a plan.

use std::sync::Arc;

use super::support::{load_plan, rejected, store_plan};
use crate::application::PlanLocks;
use crate::domain::foundation::{ExpenseId, TravelPlanId};
use crate::domain::planning::{Expense, TravelPlan, TravelPlanError};
use crate::ports::TravelPlanRepository;

#[derive(Debug, Clone)]
pub struct AddExpenseCommand {
    pub plan_id: TravelPlanId,
    pub expense: Expense,
}

#[derive(Debug, Clone)]
pub struct AddExpenseResult {
    pub plan: TravelPlan,
    pub expense_id: ExpenseId,
}

pub struct AddExpenseHandler {
    repository: Arc<dyn TravelPlanRepository>,
    locks: Arc<PlanLocks>,
}

impl AddExpenseHandler {
    pub fn new(repository: Arc<dyn TravelPlanRepository>, locks: Arc<PlanLocks>) -> Self {
        Self { repository, locks }
    }

    pub async fn handle(&self, cmd: AddExpenseCommand) -> Result<AddExpenseResult, TravelPlanError> {
        let _guard = self.locks.acquire(cmd.plan_id).await;
        let mut plan = load_plan(self.repository.as_ref(), &cmd.plan_id).await?;

        let expense_id = match plan.add_expense(cmd.expense) {
            Ok(expense) => *expense.id(),
            Err(e) => return Err(rejected(&cmd.plan_id, e)),
        };

        store_plan(self.repository.as_ref(), &plan).await?;
        tracing::debug!(
            plan_id = %cmd.plan_id,
            expense_id = %expense_id,
            total = plan.total_expenses(),
            remaining = plan.remaining_budget(),
            "Added expense"
        );
        Ok(AddExpenseResult { plan, expense_id })
    }
}
