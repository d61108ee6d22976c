//! Session tracking: the write boundary over the remote stores

pub mod ports;
mod service;

pub use service::TrackingService;
