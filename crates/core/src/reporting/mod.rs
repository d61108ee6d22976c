//! Report aggregation over time-record snapshots

pub mod aggregate;
mod service;

pub use aggregate::{aggregate_by_task, daily_timeline, summarize, total_duration};
pub use service::{Report, ReportingService};
