//! User settings service and port

pub mod ports;
mod service;

pub use service::SettingsService;
