//! Task table adapter

use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use tempo_core::tracking::ports::TaskStore;
use tempo_domain::time::parse_timestamp;
use tempo_domain::{NewTask, Result, Task, TaskPatch, TaskStatus};
use uuid::Uuid;

use super::client::RemoteStore;

const TABLE: &str = "tasks";

#[derive(Debug, Clone, Deserialize)]
struct TaskRow {
    id: Uuid,
    user_id: Uuid,
    title: String,
    description: Option<String>,
    status: TaskStatus,
    created_at: String,
    updated_at: String,
}

impl TaskRow {
    fn into_task(self) -> Result<Task> {
        Ok(Task {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            description: self.description,
            status: self.status,
            created_at: parse_timestamp(&self.created_at)?,
            updated_at: parse_timestamp(&self.updated_at)?,
        })
    }
}

#[async_trait]
impl TaskStore for RemoteStore {
    async fn list_tasks(&self) -> Result<Vec<Task>> {
        let rows: Vec<TaskRow> =
            self.get_rows(&self.endpoint(TABLE, "select=*&order=created_at.desc")).await?;
        rows.into_iter().map(TaskRow::into_task).collect()
    }

    async fn get_task(&self, task_id: Uuid) -> Result<Option<Task>> {
        let query = format!("select=*&id=eq.{task_id}&limit=1");
        let rows: Vec<TaskRow> = self.get_rows(&self.endpoint(TABLE, &query)).await?;
        rows.into_iter().next().map(TaskRow::into_task).transpose()
    }

    async fn create_task(&self, task: NewTask) -> Result<Task> {
        let row: TaskRow = self.write_one(Method::POST, &self.endpoint(TABLE, ""), &task).await?;
        row.into_task()
    }

    async fn update_task(&self, task_id: Uuid, patch: TaskPatch) -> Result<Task> {
        let url = self.endpoint(TABLE, &format!("id=eq.{task_id}"));
        let row: TaskRow = self.write_one(Method::PATCH, &url, &patch).await?;
        row.into_task()
    }

    async fn delete_task(&self, task_id: Uuid) -> Result<()> {
        self.delete(&self.endpoint(TABLE, &format!("id=eq.{task_id}"))).await
    }
}
