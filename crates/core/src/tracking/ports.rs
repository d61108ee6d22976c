//! Port interfaces for the remote record and task stores
//!
//! These traits define the boundaries between core business logic
//! and the hosted-backend adapters.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tempo_domain::{NewTask, Result, Task, TaskPatch, TimeRecord};
use uuid::Uuid;

/// Trait for querying and mutating time records in the remote store
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// List records for the signed-in user, newest start time first,
    /// optionally filtered to a single task.
    async fn list_records(&self, task_id: Option<Uuid>) -> Result<Vec<TimeRecord>>;

    /// Insert a new open record (no end timestamp) for the given task.
    async fn insert_open_record(
        &self,
        task_id: Uuid,
        start_time: DateTime<Utc>,
    ) -> Result<TimeRecord>;

    /// Stamp the end time on a record, closing it.
    async fn close_record(&self, record_id: Uuid, end_time: DateTime<Utc>) -> Result<TimeRecord>;

    /// Remove a record by id.
    async fn delete_record(&self, record_id: Uuid) -> Result<()>;
}

/// Trait for querying and mutating tasks in the remote store
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// List tasks for the signed-in user, newest first.
    async fn list_tasks(&self) -> Result<Vec<Task>>;

    /// Look up a single task by id. `None` when the task has been
    /// deleted; callers fall back to a display label, never an error.
    async fn get_task(&self, task_id: Uuid) -> Result<Option<Task>>;

    /// Create a task.
    async fn create_task(&self, task: NewTask) -> Result<Task>;

    /// Apply a partial update to a task.
    async fn update_task(&self, task_id: Uuid, patch: TaskPatch) -> Result<Task>;

    /// Remove a task by id. Records referencing it are left in place.
    async fn delete_task(&self, task_id: Uuid) -> Result<()>;
}
