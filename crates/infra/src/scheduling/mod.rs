//! Background scheduling

pub mod error;
mod session_refresh;

pub use error::{SchedulerError, SchedulerResult};
pub use session_refresh::{SessionRefreshScheduler, SessionRefreshSchedulerConfig};
