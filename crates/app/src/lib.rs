//! # Tempo App
//!
//! Composition root: loads configuration, wires the service graph, and
//! runs background schedulers. The desktop shell talks to the services
//! exposed on [`AppContext`] and drains the shell command channel for
//! tray state and notifications.

pub mod context;

pub use context::AppContext;
