//! Time-record table adapter

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tempo_core::tracking::ports::RecordStore;
use tempo_domain::time::parse_timestamp;
use tempo_domain::{Result, TimeRecord};
use uuid::Uuid;

use super::client::RemoteStore;

const TABLE: &str = "time_records";

/// Row shape on the wire. Timestamps stay strings until
/// [`parse_timestamp`] validates them at this boundary.
#[derive(Debug, Clone, Deserialize)]
struct TimeRecordRow {
    id: Uuid,
    task_id: Uuid,
    user_id: Uuid,
    start_time: String,
    end_time: Option<String>,
    notes: Option<String>,
    created_at: String,
}

impl TimeRecordRow {
    fn into_record(self) -> Result<TimeRecord> {
        Ok(TimeRecord {
            id: self.id,
            task_id: self.task_id,
            user_id: self.user_id,
            start_time: parse_timestamp(&self.start_time)?,
            end_time: self.end_time.as_deref().map(parse_timestamp).transpose()?,
            notes: self.notes,
            created_at: parse_timestamp(&self.created_at)?,
        })
    }
}

#[derive(Debug, Serialize)]
struct InsertRecordBody {
    task_id: Uuid,
    start_time: String,
}

#[derive(Debug, Serialize)]
struct CloseRecordBody {
    end_time: String,
}

fn to_wire(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[async_trait]
impl RecordStore for RemoteStore {
    async fn list_records(&self, task_id: Option<Uuid>) -> Result<Vec<TimeRecord>> {
        let query = match task_id {
            Some(id) => format!("select=*&task_id=eq.{id}&order=start_time.desc"),
            None => "select=*&order=start_time.desc".to_string(),
        };
        let rows: Vec<TimeRecordRow> = self.get_rows(&self.endpoint(TABLE, &query)).await?;
        rows.into_iter().map(TimeRecordRow::into_record).collect()
    }

    async fn insert_open_record(
        &self,
        task_id: Uuid,
        start_time: DateTime<Utc>,
    ) -> Result<TimeRecord> {
        let body = InsertRecordBody { task_id, start_time: to_wire(start_time) };
        let row: TimeRecordRow =
            self.write_one(Method::POST, &self.endpoint(TABLE, ""), &body).await?;
        row.into_record()
    }

    async fn close_record(&self, record_id: Uuid, end_time: DateTime<Utc>) -> Result<TimeRecord> {
        let body = CloseRecordBody { end_time: to_wire(end_time) };
        let url = self.endpoint(TABLE, &format!("id=eq.{record_id}"));
        let row: TimeRecordRow = self.write_one(Method::PATCH, &url, &body).await?;
        row.into_record()
    }

    async fn delete_record(&self, record_id: Uuid) -> Result<()> {
        self.delete(&self.endpoint(TABLE, &format!("id=eq.{record_id}"))).await
    }
}
