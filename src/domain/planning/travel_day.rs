//! TravelDay entity - one calendar date of a plan and its activities.

use chrono::NaiveDate;
use serde::Serialize;

use super::{Activity, PlanningError};
use crate::domain::foundation::TravelDayId;

/// A single day holding activities in insertion order.
///
/// # Invariants
///
/// - No two activities overlap (strict overlap, see [`Activity::overlaps`])
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TravelDay {
    id: TravelDayId,
    date: NaiveDate,
    activities: Vec<Activity>,
}

impl TravelDay {
    /// Creates an empty day.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: TravelDayId::new(),
            date,
            activities: Vec::new(),
        }
    }

    /// Rebuilds a day from storage. Activities are re-checked for conflicts.
    pub fn reconstitute(
        id: TravelDayId,
        date: NaiveDate,
        activities: Vec<Activity>,
    ) -> Result<Self, PlanningError> {
        let mut day = Self {
            id,
            date,
            activities: Vec::with_capacity(activities.len()),
        };
        for activity in activities {
            day.add_activity(activity)?;
        }
        Ok(day)
    }

    pub fn id(&self) -> &TravelDayId {
        &self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Appends an activity unless it overlaps one already on this day.
    ///
    /// # Errors
    ///
    /// - `ActivityConflict` naming the new and the first conflicting activity
    pub fn add_activity(&mut self, activity: Activity) -> Result<&Activity, PlanningError> {
        if let Some(existing) = self.activities.iter().find(|a| a.overlaps(&activity)) {
            return Err(PlanningError::ActivityConflict {
                new: activity.description().to_string(),
                existing: existing.description().to_string(),
            });
        }

        let index = self.activities.len();
        self.activities.push(activity);
        Ok(&self.activities[index])
    }
}
