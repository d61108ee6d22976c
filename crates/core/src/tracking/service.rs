//! Tracking service - core business logic for recording sessions

use std::sync::Arc;

use chrono::Utc;
use tempo_domain::{
    NewTask, Result, SessionState, Task, TaskPatch, TempoError, TimeRecord,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::ports::{RecordStore, TaskStore};
use crate::session::{SessionMirror, ShellNotifier};

/// Session tracking service.
///
/// All writes to the record store go through here, which is where the
/// at-most-one-open-record invariant is enforced: a start while a record
/// is already open is a typed [`TempoError::RecordingConflict`], not a
/// second insert.
pub struct TrackingService {
    record_store: Arc<dyn RecordStore>,
    task_store: Arc<dyn TaskStore>,
    notifier: Option<Arc<dyn ShellNotifier>>,
    mirror: Option<Arc<SessionMirror>>,
}

impl TrackingService {
    /// Create a new tracking service
    pub fn new(record_store: Arc<dyn RecordStore>, task_store: Arc<dyn TaskStore>) -> Self {
        Self { record_store, task_store, notifier: None, mirror: None }
    }

    /// Attach a shell notifier for start/stop notifications.
    ///
    /// Absent in non-desktop contexts; every notification call is then a
    /// no-op.
    pub fn with_notifier(mut self, notifier: Arc<dyn ShellNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Attach a session mirror to re-sync after every mutation.
    pub fn with_mirror(mut self, mirror: Arc<SessionMirror>) -> Self {
        self.mirror = Some(mirror);
        self
    }

    /// Start recording against a task.
    ///
    /// # Errors
    /// Returns [`TempoError::RecordingConflict`] when an open record
    /// already exists, carrying the active record and task ids.
    pub async fn start_recording(&self, task_id: Uuid) -> Result<TimeRecord> {
        let records = self.record_store.list_records(None).await?;

        if let SessionState::Recording { task_id: active_task_id, record_id, .. } =
            SessionState::derive(&records)
        {
            debug!(%record_id, "start rejected, a recording is already active");
            return Err(TempoError::RecordingConflict {
                active_record_id: record_id,
                active_task_id,
            });
        }

        let record = self.record_store.insert_open_record(task_id, Utc::now()).await?;
        info!(record_id = %record.id, %task_id, "recording started");

        self.notify("Recording started", "Task time recording has started").await;
        self.refresh_mirror().await;

        Ok(record)
    }

    /// Stop the currently open recording, stamping its end time.
    ///
    /// # Errors
    /// Returns [`TempoError::NotFound`] when no record is open.
    pub async fn stop_recording(&self) -> Result<TimeRecord> {
        let records = self.record_store.list_records(None).await?;

        let SessionState::Recording { record_id, .. } = SessionState::derive(&records) else {
            return Err(TempoError::NotFound("no active recording to stop".into()));
        };

        let record = self.record_store.close_record(record_id, Utc::now()).await?;
        info!(%record_id, "recording stopped");

        self.notify("Recording stopped", "Task time recording has stopped").await;
        self.refresh_mirror().await;

        Ok(record)
    }

    /// Delete a record by id.
    pub async fn delete_record(&self, record_id: Uuid) -> Result<()> {
        self.record_store.delete_record(record_id).await?;
        info!(%record_id, "record deleted");
        self.refresh_mirror().await;
        Ok(())
    }

    /// List records, optionally filtered to a single task.
    pub async fn list_records(&self, task_id: Option<Uuid>) -> Result<Vec<TimeRecord>> {
        self.record_store.list_records(task_id).await
    }

    /// The currently open record, if any.
    pub async fn active_record(&self) -> Result<Option<TimeRecord>> {
        let records = self.record_store.list_records(None).await?;
        Ok(records.into_iter().filter(TimeRecord::is_open).max_by_key(|r| r.start_time))
    }

    /// Current session state derived from the store snapshot.
    pub async fn session_state(&self) -> Result<SessionState> {
        let records = self.record_store.list_records(None).await?;
        Ok(SessionState::derive(&records))
    }

    /// List all tasks for the signed-in user.
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        self.task_store.list_tasks().await
    }

    /// Look up a task by id.
    pub async fn get_task(&self, task_id: Uuid) -> Result<Option<Task>> {
        self.task_store.get_task(task_id).await
    }

    /// Create a task.
    ///
    /// # Errors
    /// Returns [`TempoError::InvalidInput`] for an empty title.
    pub async fn create_task(&self, task: NewTask) -> Result<Task> {
        if task.title.trim().is_empty() {
            return Err(TempoError::InvalidInput("task title must not be empty".into()));
        }
        let task = self.task_store.create_task(task).await?;
        info!(task_id = %task.id, "task created");
        Ok(task)
    }

    /// Apply a partial update to a task.
    pub async fn update_task(&self, task_id: Uuid, patch: TaskPatch) -> Result<Task> {
        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return Err(TempoError::InvalidInput("task title must not be empty".into()));
            }
        }
        self.task_store.update_task(task_id, patch).await
    }

    /// Delete a task. Records referencing it survive and surface with the
    /// deleted-task fallback label in reports.
    pub async fn delete_task(&self, task_id: Uuid) -> Result<()> {
        self.task_store.delete_task(task_id).await?;
        info!(%task_id, "task deleted");
        Ok(())
    }

    async fn notify(&self, title: &str, body: &str) {
        if let Some(notifier) = &self.notifier {
            notifier.show_notification(title, body).await;
        }
    }

    /// Re-sync the mirror after a mutation.
    ///
    /// The mutation has already committed by the time this runs, so a
    /// failing refresh read must not fail the caller; the mirror keeps
    /// its last state until the next refresh.
    async fn refresh_mirror(&self) {
        if let Some(mirror) = &self.mirror {
            match self.record_store.list_records(None).await {
                Ok(records) => {
                    mirror.sync(&records).await;
                }
                Err(err) => warn!(error = %err, "mirror refresh read failed"),
            }
        }
    }
}
