//! # Tempo Core
//!
//! Business services for Tempo and the port traits that bound them.
//!
//! This crate contains:
//! - Tracking service (start/stop sessions, task CRUD, the
//!   at-most-one-open-record invariant)
//! - Reporting aggregation (pure functions over record snapshots)
//! - Session state mirror (recording state pushed to the desktop shell)
//! - Settings service
//!
//! ## Architecture
//! - Depends only on `tempo-domain` and external crates
//! - Infrastructure is reached exclusively through port traits

pub mod reporting;
pub mod session;
pub mod settings;
pub mod tracking;

// Re-export the service types wired up by the application layer
pub use reporting::ReportingService;
pub use session::{SessionMirror, ShellNotifier};
pub use settings::SettingsService;
pub use tracking::TrackingService;
