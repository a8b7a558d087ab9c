//! Inclusive calendar date range.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::PlanningError;

/// An inclusive `start..=end` pair of dates with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a new range.
    ///
    /// # Errors
    ///
    /// - `InvalidRange` if `start` is after `end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, PlanningError> {
        if start > end {
            return Err(PlanningError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if `date` lies within the range, endpoints included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered, endpoints included.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn single_day_range_is_valid() {
        let range = DateRange::new(date(2024, 12, 1), date(2024, 12, 1)).unwrap();
        assert_eq!(range.num_days(), 1);
        assert!(range.contains(date(2024, 12, 1)));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let result = DateRange::new(date(2024, 12, 7), date(2024, 12, 1));
        assert!(matches!(result, Err(PlanningError::InvalidRange { .. })));
    }

    #[test]
    fn contains_includes_both_endpoints() {
        let range = DateRange::new(date(2024, 12, 1), date(2024, 12, 7)).unwrap();
        assert!(range.contains(date(2024, 12, 1)));
        assert!(range.contains(date(2024, 12, 7)));
        assert!(!range.contains(date(2024, 11, 30)));
        assert!(!range.contains(date(2024, 12, 8)));
        assert_eq!(range.num_days(), 7);
    }

    fn any_date() -> impl Strategy<Value = NaiveDate> {
        (0i64..20_000).prop_map(|offset| date(2000, 1, 1) + chrono::Duration::days(offset))
    }

    proptest! {
        #[test]
        fn construction_succeeds_iff_ordered(a in any_date(), b in any_date()) {
            let result = DateRange::new(a, b);
            if a <= b {
                let range = result.unwrap();
                prop_assert!(range.contains(a) && range.contains(b));
            } else {
                prop_assert_eq!(result, Err(PlanningError::InvalidRange { start: a, end: b }));
            }
        }
    }
}
