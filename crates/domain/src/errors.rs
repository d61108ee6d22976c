//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Main error type for Tempo
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum TempoError {
    #[error("Store error: {0}")]
    Store(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// A session is already being recorded.
    ///
    /// Returned by the write boundary when a start is attempted while an
    /// open record exists, instead of inserting a second open record.
    #[error("A recording is already active for task {active_task_id}")]
    RecordingConflict { active_record_id: Uuid, active_task_id: Uuid },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Tempo operations
pub type Result<T> = std::result::Result<T, TempoError>;
