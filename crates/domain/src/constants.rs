//! Domain constants

/// Display label used when a record references a task that no longer
/// exists in the task collection.
pub const DELETED_TASK_LABEL: &str = "Deleted task";

/// Interval between live-display refreshes while a session is open.
pub const SESSION_REFRESH_INTERVAL_SECS: u64 = 1;

/// Span of the "daily" report range, in days.
pub const DAILY_REPORT_SPAN_DAYS: i64 = 7;

/// Span of the "weekly" report range, in days (aligned to week start).
pub const WEEKLY_REPORT_SPAN_DAYS: i64 = 28;

/// Span of the "monthly" report range, in days (aligned to month start).
pub const MONTHLY_REPORT_SPAN_DAYS: i64 = 90;
