//! In-memory mock implementations of the store ports.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tempo_domain::{
    NewTask, Result as DomainResult, SettingsPatch, Task, TaskPatch, TempoError, TimeRecord,
    UserSettings,
};
use tempo_core::settings::ports::SettingsStore;
use tempo_core::tracking::ports::{RecordStore, TaskStore};
use uuid::Uuid;

use super::user_id;

/// In-memory mock for [`RecordStore`].
///
/// Backed by a plain `Mutex<Vec<_>>`; the lock is never held across an
/// await point.
#[derive(Default)]
pub struct MockRecordStore {
    records: Mutex<Vec<TimeRecord>>,
    /// When set, every operation fails with this error.
    failure: Mutex<Option<TempoError>>,
    /// When set, `list_records` fails with the error once `usize`
    /// successful list calls have been served.
    list_failure: Mutex<Option<(usize, TempoError)>>,
    list_calls: Mutex<usize>,
}

impl MockRecordStore {
    pub fn new(records: Vec<TimeRecord>) -> Self {
        Self { records: Mutex::new(records), ..Self::default() }
    }

    /// Make every subsequent operation fail with `error`.
    pub fn fail_with(&self, error: TempoError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    /// Let the first `successes` list reads through, then fail the rest
    /// with `error`. Writes are unaffected.
    pub fn fail_lists_after(&self, successes: usize, error: TempoError) {
        *self.list_failure.lock().unwrap() = Some((successes, error));
    }

    pub fn snapshot(&self) -> Vec<TimeRecord> {
        self.records.lock().unwrap().clone()
    }

    fn check_failure(&self) -> DomainResult<()> {
        match self.failure.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn list_records(&self, task_id: Option<Uuid>) -> DomainResult<Vec<TimeRecord>> {
        self.check_failure()?;
        {
            let mut calls = self.list_calls.lock().unwrap();
            if let Some((successes, error)) = self.list_failure.lock().unwrap().clone() {
                if *calls >= successes {
                    return Err(error);
                }
            }
            *calls += 1;
        }
        let mut records: Vec<TimeRecord> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|record| task_id.map_or(true, |id| record.task_id == id))
            .cloned()
            .collect();
        records.sort_by_key(|record| std::cmp::Reverse(record.start_time));
        Ok(records)
    }

    async fn insert_open_record(
        &self,
        task_id: Uuid,
        start_time: DateTime<Utc>,
    ) -> DomainResult<TimeRecord> {
        self.check_failure()?;
        let record = TimeRecord {
            id: Uuid::new_v4(),
            task_id,
            user_id: user_id(),
            start_time,
            end_time: None,
            notes: None,
            created_at: start_time,
        };
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn close_record(
        &self,
        record_id: Uuid,
        end_time: DateTime<Utc>,
    ) -> DomainResult<TimeRecord> {
        self.check_failure()?;
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|record| record.id == record_id)
            .ok_or_else(|| TempoError::NotFound(format!("record {record_id}")))?;
        record.end_time = Some(end_time);
        Ok(record.clone())
    }

    async fn delete_record(&self, record_id: Uuid) -> DomainResult<()> {
        self.check_failure()?;
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|record| record.id != record_id);
        if records.len() == before {
            return Err(TempoError::NotFound(format!("record {record_id}")));
        }
        Ok(())
    }
}

/// In-memory mock for [`TaskStore`].
#[derive(Default)]
pub struct MockTaskStore {
    tasks: Mutex<Vec<Task>>,
}

impl MockTaskStore {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks: Mutex::new(tasks) }
    }

    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.lock().unwrap().clone()
    }
}

#[async_trait]
impl TaskStore for MockTaskStore {
    async fn list_tasks(&self) -> DomainResult<Vec<Task>> {
        let mut tasks = self.tasks.lock().unwrap().clone();
        tasks.sort_by_key(|task| std::cmp::Reverse(task.created_at));
        Ok(tasks)
    }

    async fn get_task(&self, task_id: Uuid) -> DomainResult<Option<Task>> {
        Ok(self.tasks.lock().unwrap().iter().find(|task| task.id == task_id).cloned())
    }

    async fn create_task(&self, task: NewTask) -> DomainResult<Task> {
        let now = Utc::now();
        let task = Task {
            id: Uuid::new_v4(),
            user_id: user_id(),
            title: task.title,
            description: task.description,
            status: task.status,
            created_at: now,
            updated_at: now,
        };
        self.tasks.lock().unwrap().push(task.clone());
        Ok(task)
    }

    async fn update_task(&self, task_id: Uuid, patch: TaskPatch) -> DomainResult<Task> {
        let mut tasks = self.tasks.lock().unwrap();
        let task = tasks
            .iter_mut()
            .find(|task| task.id == task_id)
            .ok_or_else(|| TempoError::NotFound(format!("task {task_id}")))?;
        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = Some(description);
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        task.updated_at = Utc::now();
        Ok(task.clone())
    }

    async fn delete_task(&self, task_id: Uuid) -> DomainResult<()> {
        self.tasks.lock().unwrap().retain(|task| task.id != task_id);
        Ok(())
    }
}

/// In-memory mock for [`SettingsStore`].
#[derive(Default)]
pub struct MockSettingsStore {
    settings: Mutex<Option<UserSettings>>,
}

impl MockSettingsStore {
    pub fn with_settings(settings: UserSettings) -> Self {
        Self { settings: Mutex::new(Some(settings)) }
    }
}

#[async_trait]
impl SettingsStore for MockSettingsStore {
    async fn get(&self, user_id: Uuid) -> DomainResult<Option<UserSettings>> {
        Ok(self
            .settings
            .lock()
            .unwrap()
            .clone()
            .filter(|settings| settings.user_id == user_id))
    }

    async fn insert(&self, settings: UserSettings) -> DomainResult<UserSettings> {
        *self.settings.lock().unwrap() = Some(settings.clone());
        Ok(settings)
    }

    async fn update(&self, user_id: Uuid, patch: SettingsPatch) -> DomainResult<UserSettings> {
        let mut guard = self.settings.lock().unwrap();
        let settings = guard
            .as_mut()
            .filter(|settings| settings.user_id == user_id)
            .ok_or_else(|| TempoError::NotFound(format!("settings for {user_id}")))?;
        if let Some(theme) = patch.theme {
            settings.theme = theme;
        }
        if let Some(show) = patch.show_in_menu_bar {
            settings.show_in_menu_bar = show;
        }
        Ok(settings.clone())
    }
}
