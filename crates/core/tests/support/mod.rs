//! Shared test helpers for `tempo-core` integration tests.
//!
//! In-memory mocks for the store and shell ports plus fixture builders,
//! so the service tests can focus on behaviour instead of boilerplate.
#![allow(dead_code)]

pub mod shell;
pub mod stores;

use chrono::{DateTime, Duration, TimeZone, Utc};
use tempo_domain::{Task, TaskStatus, TimeRecord};
use uuid::Uuid;

/// Fixed user id shared by all fixtures.
pub fn user_id() -> Uuid {
    Uuid::from_u128(0x00c0_ffee)
}

/// A deterministic base instant for fixtures.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
}

/// Build a task fixture with the given title.
pub fn make_task(title: &str) -> Task {
    Task {
        id: Uuid::new_v4(),
        user_id: user_id(),
        title: title.to_string(),
        description: None,
        status: TaskStatus::InProgress,
        created_at: base_time(),
        updated_at: base_time(),
    }
}

/// Build a closed record fixture: starts at `base_time() + offset_min`,
/// runs for `duration_min`.
pub fn closed_record(task_id: Uuid, offset_min: i64, duration_min: i64) -> TimeRecord {
    let start = base_time() + Duration::minutes(offset_min);
    TimeRecord {
        id: Uuid::new_v4(),
        task_id,
        user_id: user_id(),
        start_time: start,
        end_time: Some(start + Duration::minutes(duration_min)),
        notes: None,
        created_at: start,
    }
}

/// Build an open record fixture starting at `base_time() + offset_min`.
pub fn open_record(task_id: Uuid, offset_min: i64) -> TimeRecord {
    let start = base_time() + Duration::minutes(offset_min);
    TimeRecord {
        id: Uuid::new_v4(),
        task_id,
        user_id: user_id(),
        start_time: start,
        end_time: None,
        notes: None,
        created_at: start,
    }
}
