//! Activity entity - a time-boxed event within a travel day.

use chrono::NaiveTime;
use serde::Serialize;

use super::{Location, PlanningError};
use crate::domain::foundation::ActivityId;

/// A scheduled event with a `start..end` time window on one day.
///
/// # Invariants
///
/// - `start <= end` (zero-length windows are allowed)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    id: ActivityId,
    start: NaiveTime,
    end: NaiveTime,
    location: Location,
    description: String,
}

impl Activity {
    /// Creates a new activity with a fresh id.
    ///
    /// # Errors
    ///
    /// - `InvalidTimeWindow` if `start` is after `end`
    pub fn new(
        start: NaiveTime,
        end: NaiveTime,
        location: Location,
        description: impl Into<String>,
    ) -> Result<Self, PlanningError> {
        Self::with_id(ActivityId::new(), start, end, location, description)
    }

    /// Creates an activity with a known id (used when rebuilding from storage).
    pub fn with_id(
        id: ActivityId,
        start: NaiveTime,
        end: NaiveTime,
        location: Location,
        description: impl Into<String>,
    ) -> Result<Self, PlanningError> {
        if start > end {
            return Err(PlanningError::InvalidTimeWindow { start, end });
        }
        Ok(Self {
            id,
            start,
            end,
            location,
            description: description.into(),
        })
    }

    pub fn id(&self) -> &ActivityId {
        &self.id
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Strict overlap test: windows that only touch at an endpoint do not overlap.
    pub fn overlaps(&self, other: &Activity) -> bool {
        self.start < other.end && self.end > other.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn activity(start: NaiveTime, end: NaiveTime, description: &str) -> Activity {
        let location = Location::new("Somewhere", "Jl. Example 1", -6.2, 106.8);
        Activity::new(start, end, location, description).unwrap()
    }

    #[test]
    fn inverted_window_is_rejected() {
        let location = Location::new("Somewhere", "Jl. Example 1", -6.2, 106.8);
        let result = Activity::new(at(11, 0), at(9, 0), location, "Backwards");
        assert_eq!(
            result,
            Err(PlanningError::InvalidTimeWindow {
                start: at(11, 0),
                end: at(9, 0)
            })
        );
    }

    #[test]
    fn zero_length_window_is_allowed() {
        let a = activity(at(9, 0), at(9, 0), "Check-in");
        assert_eq!(a.start(), a.end());
    }

    #[test]
    fn touching_windows_do_not_overlap() {
        let morning = activity(at(9, 0), at(11, 0), "Museum");
        let noon = activity(at(11, 0), at(13, 0), "Lunch");
        assert!(!morning.overlaps(&noon));
        assert!(!noon.overlaps(&morning));
    }

    #[test]
    fn crossing_windows_overlap() {
        let morning = activity(at(9, 0), at(11, 0), "Museum");
        let late = activity(at(10, 0), at(12, 0), "Walk");
        assert!(morning.overlaps(&late));
        assert!(late.overlaps(&morning));
    }

    #[test]
    fn contained_window_overlaps() {
        let day = activity(at(8, 0), at(18, 0), "Tour");
        let coffee = activity(at(10, 0), at(10, 30), "Coffee");
        assert!(day.overlaps(&coffee));
    }

    fn minute() -> impl Strategy<Value = NaiveTime> {
        (0u32..24 * 60).prop_map(|m| at(m / 60, m % 60))
    }

    fn window() -> impl Strategy<Value = (NaiveTime, NaiveTime)> {
        (minute(), minute()).prop_map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
    }

    proptest! {
        #[test]
        fn overlap_matches_strict_inequalities((s1, e1) in window(), (s2, e2) in window()) {
            let a = activity(s1, e1, "a");
            let b = activity(s2, e2, "b");
            prop_assert_eq!(a.overlaps(&b), s1 < e2 && e1 > s2);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn back_to_back_never_overlaps((s, m) in window(), later in minute()) {
            prop_assume!(later >= m);
            let first = activity(s, m, "first");
            let second = activity(m, later, "second");
            prop_assert!(!first.overlaps(&second));
        }
    }
}
