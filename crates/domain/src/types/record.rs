//! Time record and period types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::time::elapsed_ms;

/// A recorded work session against a task.
///
/// `end_time == None` denotes the open/active session. A record
/// transitions open -> closed exactly once; closed records are immutable
/// thereafter except for deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeRecord {
    pub id: Uuid,
    pub task_id: Uuid,
    pub user_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TimeRecord {
    /// Whether this record denotes a timer currently running.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    /// Elapsed milliseconds, measured against `now` while the record is
    /// open.
    #[must_use]
    pub fn duration_ms(&self, now: DateTime<Utc>) -> i64 {
        elapsed_ms(self.start_time, self.end_time, now)
    }
}

/// A half-open time interval `[start, end)` used to filter records for
/// reporting. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Period {
    #[must_use]
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Half-open containment: the lower bound is included, the upper
    /// bound is excluded.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn period() -> Period {
        Period::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_period_includes_lower_bound() {
        assert!(period().contains(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_period_excludes_upper_bound() {
        assert!(!period().contains(Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_period_contains_interior() {
        assert!(period().contains(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()));
        assert!(!period().contains(Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap()));
    }
}
