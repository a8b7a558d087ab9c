//! Query handlers for reading plans and their days.

use std::sync::Arc;

use chrono::NaiveDate;

use super::support::load_plan;
use crate::domain::foundation::TravelPlanId;
use crate::domain::planning::{TravelDay, TravelPlan, TravelPlanError};
use crate::ports::TravelPlanRepository;

/// Query for a whole plan.
#[derive(Debug, Clone)]
pub struct GetTravelPlanQuery {
    pub plan_id: TravelPlanId,
}

/// Query for one day of a plan.
#[derive(Debug, Clone)]
pub struct GetTravelDayQuery {
    pub plan_id: TravelPlanId,
    pub date: NaiveDate,
}

/// Read-only handler; takes no plan lock.
pub struct GetTravelPlanHandler {
    repository: Arc<dyn TravelPlanRepository>,
}

impl GetTravelPlanHandler {
    pub fn new(repository: Arc<dyn TravelPlanRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetTravelPlanQuery) -> Result<TravelPlan, TravelPlanError> {
        load_plan(self.repository.as_ref(), &query.plan_id).await
    }

    pub async fn handle_day(&self, query: GetTravelDayQuery) -> Result<TravelDay, TravelPlanError> {
        let plan = load_plan(self.repository.as_ref(), &query.plan_id).await?;
        plan.travel_day(query.date)
            .cloned()
            .ok_or_else(|| TravelPlanError::day_not_found(query.date))
    }
}
