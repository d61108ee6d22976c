//! Reporting service - snapshot retrieval plus aggregation

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use tempo_domain::{
    AggregatedTaskTime, DayBucket, Period, ReportRange, ReportSummary, Result,
};

use super::aggregate;
use crate::tracking::ports::{RecordStore, TaskStore};

/// A fully derived report for one period
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub period: Period,
    pub summary: ReportSummary,
    /// Ranked per-task totals, descending by duration.
    pub task_totals: Vec<AggregatedTaskTime>,
    /// Day buckets, descending by date.
    pub timeline: Vec<DayBucket>,
}

/// Builds reports from fresh store snapshots.
///
/// The service only fetches; all derivation lives in the pure functions
/// of [`aggregate`] and is recomputed per call.
pub struct ReportingService {
    record_store: Arc<dyn RecordStore>,
    task_store: Arc<dyn TaskStore>,
}

impl ReportingService {
    /// Create a new reporting service
    pub fn new(record_store: Arc<dyn RecordStore>, task_store: Arc<dyn TaskStore>) -> Self {
        Self { record_store, task_store }
    }

    /// Build a report over an explicit period.
    ///
    /// `tz` controls calendar-day bucketing; the desktop app passes the
    /// local timezone.
    pub async fn report<Tz: TimeZone>(&self, period: Period, tz: &Tz) -> Result<Report> {
        let records = self.record_store.list_records(None).await?;
        let tasks = self.task_store.list_tasks().await?;
        let now = Utc::now();

        Ok(Report {
            period,
            summary: aggregate::summarize(&records, &period, now, tz),
            task_totals: aggregate::aggregate_by_task(&records, &tasks, &period, now),
            timeline: aggregate::daily_timeline(&records, &period, now, tz),
        })
    }

    /// Build a report for one of the built-in ranges, ending at `now`.
    pub async fn report_range<Tz: TimeZone>(
        &self,
        range: ReportRange,
        now: DateTime<Tz>,
    ) -> Result<Report> {
        let tz = now.timezone();
        self.report(range.period_ending(now), &tz).await
    }
}
