//! Per-plan mutation locks.
//!
//! Mutating handlers hold the plan's lock from load to update, so at most
//! one mutation per plan is in flight.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::domain::foundation::TravelPlanId;

/// Registry of one async mutex per travel plan.
#[derive(Debug, Default)]
pub struct PlanLocks {
    locks: Mutex<HashMap<TravelPlanId, Arc<AsyncMutex<()>>>>,
}

impl PlanLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `plan_id`. Access ends when the guard drops.
    pub async fn acquire(&self, plan_id: TravelPlanId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            // Entries nobody holds or waits on can go.
            locks.retain(|id, lock| *id == plan_id || Arc::strong_count(lock) > 1);
            Arc::clone(locks.entry(plan_id).or_default())
        };
        lock.lock_owned().await
    }

    /// Number of plans currently tracked.
    pub fn tracked(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
