//! Recording session state
//!
//! Per user session, never persisted. `Idle` and `Recording` are the only
//! states; there is no pause, stopping is the only way out of `Recording`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{Task, TimeRecord};

/// Current recording state derived from the record snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum SessionState {
    Idle,
    Recording { task_id: Uuid, record_id: Uuid, started_at: DateTime<Utc> },
}

impl SessionState {
    /// Derive the session state from a record snapshot.
    ///
    /// The open record is the one with no end timestamp. The store layer
    /// enforces at-most-one; if a snapshot nevertheless carries several,
    /// the most recently started one wins.
    #[must_use]
    pub fn derive(records: &[TimeRecord]) -> Self {
        records
            .iter()
            .filter(|record| record.is_open())
            .max_by_key(|record| record.start_time)
            .map_or(Self::Idle, |record| Self::Recording {
                task_id: record.task_id,
                record_id: record.id,
                started_at: record.start_time,
            })
    }

    #[must_use]
    pub fn is_recording(&self) -> bool {
        matches!(self, Self::Recording { .. })
    }
}

/// Snapshot pushed outward to the desktop shell for tray-label and
/// notification purposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingStatus {
    pub is_recording: bool,
    /// Resolved task for the active session, when one exists and the
    /// lookup succeeded.
    pub task: Option<Task>,
}

impl RecordingStatus {
    #[must_use]
    pub fn idle() -> Self {
        Self { is_recording: false, task: None }
    }

    #[must_use]
    pub fn recording(task: Option<Task>) -> Self {
        Self { is_recording: true, task }
    }
}
