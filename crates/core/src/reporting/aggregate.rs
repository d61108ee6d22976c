//! Pure aggregation functions
//!
//! Every function here takes an immutable record snapshot plus a period
//! and derives display values; nothing is cached or mutated. Filtering
//! keys on the record's start time only: a session that starts inside the
//! window and ends outside it is counted in full, one that starts outside
//! but ends inside is excluded entirely.
//!
//! Open records contribute live durations measured against the
//! caller-supplied `now`.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use tempo_domain::constants::DELETED_TASK_LABEL;
use tempo_domain::{AggregatedTaskTime, DayBucket, Period, ReportSummary, Task, TimeRecord};

/// Records whose start timestamp falls within the half-open period.
fn filter_by_period<'a>(
    records: &'a [TimeRecord],
    period: &Period,
) -> impl Iterator<Item = &'a TimeRecord> {
    let period = *period;
    records.iter().filter(move |record| period.contains(record.start_time))
}

/// Sum durations per task over the period and rank descending.
///
/// Tasks are keyed by id; a record whose task no longer exists in the
/// task snapshot still produces an entry, labelled with
/// [`DELETED_TASK_LABEL`]. The sort is stable, so exactly-equal durations
/// keep their first-appearance order.
#[must_use]
pub fn aggregate_by_task(
    records: &[TimeRecord],
    tasks: &[Task],
    period: &Period,
    now: DateTime<Utc>,
) -> Vec<AggregatedTaskTime> {
    // First-appearance order keeps ties deterministic across runs.
    let mut totals: Vec<(uuid::Uuid, i64)> = Vec::new();

    for record in filter_by_period(records, period) {
        match totals.iter_mut().find(|(task_id, _)| *task_id == record.task_id) {
            Some((_, duration)) => *duration += record.duration_ms(now),
            None => totals.push((record.task_id, record.duration_ms(now))),
        }
    }

    let mut aggregated: Vec<AggregatedTaskTime> = totals
        .into_iter()
        .map(|(task_id, duration_ms)| AggregatedTaskTime {
            task_id,
            title: tasks
                .iter()
                .find(|task| task.id == task_id)
                .map_or_else(|| DELETED_TASK_LABEL.to_string(), |task| task.title.clone()),
            duration_ms,
        })
        .collect();

    aggregated.sort_by_key(|entry| std::cmp::Reverse(entry.duration_ms));
    aggregated
}

/// Total recorded duration = sum of the per-task durations.
#[must_use]
pub fn total_duration(totals: &[AggregatedTaskTime]) -> i64 {
    totals.iter().map(|entry| entry.duration_ms).sum()
}

/// Headline statistics for the filtered record set.
///
/// The average is zero for an empty set; an empty period never raises.
/// Active days are distinct calendar dates in the supplied timezone.
#[must_use]
pub fn summarize<Tz: TimeZone>(
    records: &[TimeRecord],
    period: &Period,
    now: DateTime<Utc>,
    tz: &Tz,
) -> ReportSummary {
    let mut total_ms = 0i64;
    let mut session_count = 0usize;
    let mut dates = std::collections::BTreeSet::new();

    for record in filter_by_period(records, period) {
        total_ms += record.duration_ms(now);
        session_count += 1;
        dates.insert(record.start_time.with_timezone(tz).date_naive());
    }

    let average_session_ms =
        if session_count == 0 { 0 } else { total_ms / session_count as i64 };

    ReportSummary { total_ms, session_count, average_session_ms, active_days: dates.len() }
}

/// Group the filtered records into calendar-day buckets.
///
/// Bucket dates are calendar dates in the supplied timezone. Buckets are
/// ordered by descending date; within a bucket, records are ordered by
/// descending start time and the bucket carries its summed duration.
#[must_use]
pub fn daily_timeline<Tz: TimeZone>(
    records: &[TimeRecord],
    period: &Period,
    now: DateTime<Utc>,
    tz: &Tz,
) -> Vec<DayBucket> {
    let mut days: BTreeMap<chrono::NaiveDate, Vec<TimeRecord>> = BTreeMap::new();

    for record in filter_by_period(records, period) {
        let date = record.start_time.with_timezone(tz).date_naive();
        days.entry(date).or_default().push(record.clone());
    }

    days.into_iter()
        .rev()
        .map(|(date, mut bucket)| {
            bucket.sort_by_key(|record| std::cmp::Reverse(record.start_time));
            let total_ms = bucket.iter().map(|record| record.duration_ms(now)).sum();
            DayBucket { date, total_ms, records: bucket }
        })
        .collect()
}
