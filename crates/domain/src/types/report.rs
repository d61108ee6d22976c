//! Derived reporting types
//!
//! Everything here is ephemeral: recomputed from the raw record snapshot
//! on every pass, never persisted or cached.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{
    DAILY_REPORT_SPAN_DAYS, MONTHLY_REPORT_SPAN_DAYS, WEEKLY_REPORT_SPAN_DAYS,
};
use crate::types::{Period, TimeRecord};

/// Summed duration for one task over a filter period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedTaskTime {
    pub task_id: Uuid,
    /// Display title, or the deleted-task fallback label when the task
    /// no longer exists.
    pub title: String,
    pub duration_ms: i64,
}

/// Headline statistics for a filtered record set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_ms: i64,
    pub session_count: usize,
    /// Zero when the filtered set is empty.
    pub average_session_ms: i64,
    /// Distinct calendar dates with at least one session.
    pub active_days: usize,
}

/// One calendar day of the timeline view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub total_ms: i64,
    /// Records ordered by descending start time.
    pub records: Vec<TimeRecord>,
}

/// Built-in report ranges offered by the reports view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportRange {
    /// Last 7 days.
    Day,
    /// Last 4 weeks, aligned to the start of the week.
    Week,
    /// Last 3 months, aligned to the start of the month.
    Month,
}

impl ReportRange {
    /// Resolve the range into a concrete period ending at `now`.
    ///
    /// `Day` is a raw rolling offset; `Week` and `Month` align their
    /// start to the calendar boundary in the caller's timezone. The
    /// resulting period is expressed in UTC.
    pub fn period_ending<Tz: TimeZone>(self, now: DateTime<Tz>) -> Period {
        let tz = now.timezone();
        let (span_days, start_date) = match self {
            Self::Day => {
                let start = now.to_utc() - Duration::days(DAILY_REPORT_SPAN_DAYS);
                return Period::new(start, now.to_utc());
            }
            Self::Week => {
                let base = now.clone() - Duration::days(WEEKLY_REPORT_SPAN_DAYS);
                (WEEKLY_REPORT_SPAN_DAYS, base.date_naive().week(Weekday::Mon).first_day())
            }
            Self::Month => {
                let base = now.clone() - Duration::days(MONTHLY_REPORT_SPAN_DAYS);
                let date = base.date_naive();
                (
                    MONTHLY_REPORT_SPAN_DAYS,
                    date.with_day(1).unwrap_or(date),
                )
            }
        };

        let start = start_date
            .and_hms_opt(0, 0, 0)
            .and_then(|naive| tz.from_local_datetime(&naive).earliest())
            .map(|dt| dt.with_timezone(&Utc))
            // DST gap at local midnight: fall back to an unaligned span
            .unwrap_or_else(|| now.to_utc() - Duration::days(span_days));

        Period::new(start, now.to_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        // A Thursday
        Utc.with_ymd_and_hms(2024, 3, 14, 15, 30, 0).unwrap()
    }

    #[test]
    fn test_day_range_is_a_raw_seven_day_offset() {
        let period = ReportRange::Day.period_ending(now());
        assert_eq!(period.end, now());
        // No day alignment: exactly seven days back from the instant.
        assert_eq!(period.start, Utc.with_ymd_and_hms(2024, 3, 7, 15, 30, 0).unwrap());
    }

    #[test]
    fn test_week_range_aligns_to_monday() {
        let period = ReportRange::Week.period_ending(now());
        // 28 days back is 2024-02-15 (Thursday); the preceding Monday is
        // 2024-02-12.
        assert_eq!(period.start, Utc.with_ymd_and_hms(2024, 2, 12, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_month_range_aligns_to_month_start() {
        let period = ReportRange::Month.period_ending(now());
        // 90 days back is 2023-12-15; aligned to 2023-12-01.
        assert_eq!(period.start, Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap());
    }
}
