//! Hosted-backend store adapter
//!
//! Implements the core store ports against a PostgREST-style REST API.
//! Row-level security on the backend scopes every query to the signed-in
//! user; the adapter only forwards the credentials it was configured
//! with.

mod client;
mod records;
mod settings;
mod tasks;

pub use client::{RemoteStore, RemoteStoreConfig};
