//! HTTP plumbing shared by the remote store adapters

mod client;

pub use client::{HttpClient, HttpClientBuilder};
