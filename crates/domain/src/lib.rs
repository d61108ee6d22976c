//! # Tempo Domain
//!
//! Business domain types and models for Tempo.
//!
//! This crate contains:
//! - Domain data types (Task, TimeRecord, Period, report types)
//! - Domain error types and Result definitions
//! - Pure time arithmetic (duration calculation, elapsed-time formatting)
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other Tempo crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod time;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
