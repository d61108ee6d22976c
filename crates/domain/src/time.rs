//! Pure time arithmetic: duration calculation and elapsed-time formatting
//!
//! These functions are called on every aggregation pass and once per second
//! while a session is open, so they are O(1) and allocation-free except for
//! the formatted output string.

use chrono::{DateTime, Utc};

use crate::errors::{Result, TempoError};

/// Compute elapsed milliseconds for a time record.
///
/// A missing `end` means the session is still running and is measured
/// against the caller-supplied `now`. Callers that only ever deal with
/// closed records can pass any instant as `now`; it is ignored when `end`
/// is present.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tempo_domain::time::elapsed_ms;
///
/// let start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
/// assert_eq!(elapsed_ms(start, Some(end), Utc::now()), 3_600_000);
/// ```
#[must_use]
pub fn elapsed_ms(start: DateTime<Utc>, end: Option<DateTime<Utc>>, now: DateTime<Utc>) -> i64 {
    let end = end.unwrap_or(now);
    end.signed_duration_since(start).num_milliseconds()
}

/// Format a millisecond count as zero-padded `HH:MM:SS`.
///
/// Hours are unbounded and may exceed 24. Negative input clamps to
/// `"00:00:00"` rather than producing a signed display.
///
/// # Examples
///
/// ```
/// use tempo_domain::time::format_elapsed;
///
/// assert_eq!(format_elapsed(0), "00:00:00");
/// assert_eq!(format_elapsed(3_661_000), "01:01:01");
/// assert_eq!(format_elapsed(90_000_000), "25:00:00");
/// ```
#[must_use]
pub fn format_elapsed(milliseconds: i64) -> String {
    let total_seconds = (milliseconds / 1000).max(0);
    let minutes = total_seconds / 60;
    let hours = minutes / 60;

    format!("{:02}:{:02}:{:02}", hours, minutes % 60, total_seconds % 60)
}

/// Parse an ISO-8601 timestamp from the wire into a UTC instant.
///
/// The remote store serializes timestamps as RFC 3339 strings. A string
/// that does not parse is a typed [`TempoError::InvalidTimestamp`]; the
/// failure never propagates silently into downstream formatting.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| TempoError::InvalidTimestamp(format!("{value}: {e}")))
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    #[test]
    fn test_elapsed_ms_closed_record() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 1, 11, 30, 0).unwrap();
        assert_eq!(elapsed_ms(start, Some(end), Utc::now()), 9_000_000);
    }

    #[test]
    fn test_elapsed_ms_open_record_uses_now() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 5, 0).unwrap();
        let start = now - Duration::minutes(5);
        assert_eq!(elapsed_ms(start, None, now), 300_000);
    }

    #[test]
    fn test_elapsed_ms_ignores_now_when_closed() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let end = start + Duration::seconds(1);
        let far_future = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(elapsed_ms(start, Some(end), far_future), 1_000);
    }

    #[test]
    fn test_format_elapsed_zero() {
        assert_eq!(format_elapsed(0), "00:00:00");
    }

    #[test]
    fn test_format_elapsed_pads_fields() {
        assert_eq!(format_elapsed(3_661_000), "01:01:01");
        assert_eq!(format_elapsed(61_000), "00:01:01");
    }

    #[test]
    fn test_format_elapsed_hours_unbounded() {
        assert_eq!(format_elapsed(90_000_000), "25:00:00");
    }

    #[test]
    fn test_format_elapsed_truncates_subsecond() {
        assert_eq!(format_elapsed(999), "00:00:00");
        assert_eq!(format_elapsed(1_999), "00:00:01");
    }

    #[test]
    fn test_format_elapsed_negative_clamps() {
        assert_eq!(format_elapsed(-5_000), "00:00:00");
    }

    #[test]
    fn test_format_round_trips_with_elapsed() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 1, 10, 30, 0).unwrap();
        assert_eq!(format_elapsed(elapsed_ms(start, Some(end), Utc::now())), "01:30:00");
    }

    #[test]
    fn test_parse_timestamp_valid() {
        let parsed = parse_timestamp("2024-01-01T09:00:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_offset_normalizes_to_utc() {
        let parsed = parse_timestamp("2024-01-01T09:00:00+09:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_invalid() {
        let err = parse_timestamp("not-a-timestamp").unwrap_err();
        assert!(matches!(err, TempoError::InvalidTimestamp(_)));
    }
}
