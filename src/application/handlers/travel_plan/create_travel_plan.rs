//! CreateTravelPlanHandler - Command handler for creating new plans.

use std::sync::Arc;

use crate::domain::foundation::TravelPlanId;
use crate::domain::planning::{DateRange, Money, TravelPlan, TravelPlanError};
use crate::ports::TravelPlanRepository;

/// Command to create a new travel plan.
#[derive(Debug, Clone)]
pub struct CreateTravelPlanCommand {
    pub name: String,
    pub date_range: DateRange,
    pub budget: Money,
}

/// Handler for creating travel plans.
pub struct CreateTravelPlanHandler {
    repository: Arc<dyn TravelPlanRepository>,
}

impl CreateTravelPlanHandler {
    pub fn new(repository: Arc<dyn TravelPlanRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateTravelPlanCommand) -> Result<TravelPlan, TravelPlanError> {
        let plan = TravelPlan::new(TravelPlanId::new(), cmd.name, cmd.date_range, cmd.budget)?;

        self.repository.save(&plan).await.map_err(|e| {
            tracing::error!(plan_id = %plan.id(), error = %e, "Failed to save travel plan");
            TravelPlanError::from(e)
        })?;

        tracing::debug!(plan_id = %plan.id(), range = %plan.date_range(), "Created travel plan");
        Ok(plan)
    }
}
