//! Recording mock for the shell notifier port.

use std::sync::Mutex;

use async_trait::async_trait;
use tempo_core::ShellNotifier;
use tempo_domain::RecordingStatus;

/// Captures every outward shell call for assertion.
#[derive(Default)]
pub struct RecordingShellNotifier {
    statuses: Mutex<Vec<RecordingStatus>>,
    notifications: Mutex<Vec<(String, String)>>,
}

impl RecordingShellNotifier {
    pub fn statuses(&self) -> Vec<RecordingStatus> {
        self.statuses.lock().unwrap().clone()
    }

    pub fn notifications(&self) -> Vec<(String, String)> {
        self.notifications.lock().unwrap().clone()
    }
}

#[async_trait]
impl ShellNotifier for RecordingShellNotifier {
    async fn set_recording_status(&self, status: RecordingStatus) {
        self.statuses.lock().unwrap().push(status);
    }

    async fn show_notification(&self, title: &str, body: &str) {
        self.notifications.lock().unwrap().push((title.to_string(), body.to_string()));
    }
}
