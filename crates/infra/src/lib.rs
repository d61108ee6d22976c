//! # Tempo Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The hosted-backend store client (PostgREST-style REST API)
//! - HTTP client with retry/backoff
//! - Desktop shell notifier adapters
//! - Configuration loading
//! - The session display-refresh scheduler
//!
//! ## Architecture
//! - Implements traits defined in `tempo-core`
//! - Depends on `tempo-domain` and `tempo-core`
//! - Contains all "impure" code (I/O, timers, channels)

pub mod config;
pub mod errors;
pub mod http;
pub mod remote;
pub mod scheduling;
pub mod shell;

// Re-export commonly used items
pub use config::AppConfig;
pub use errors::InfraError;
pub use http::HttpClient;
pub use remote::{RemoteStore, RemoteStoreConfig};
pub use scheduling::{SessionRefreshScheduler, SessionRefreshSchedulerConfig};
pub use shell::{ChannelShellNotifier, NoopShellNotifier, ShellCommand};
