//! Port interface for the desktop shell

use async_trait::async_trait;
use tempo_domain::RecordingStatus;

/// One-way, fire-and-forget channel to the desktop shell.
///
/// Present only in the desktop build; when the shell is absent the core
/// runs with no notifier and every call site degrades to a no-op. There
/// is no acknowledgement and no retry: implementations swallow delivery
/// failures rather than surface them.
#[async_trait]
pub trait ShellNotifier: Send + Sync {
    /// Mirror the recording state into the tray label / menu bar.
    async fn set_recording_status(&self, status: RecordingStatus);

    /// Show a desktop notification.
    async fn show_notification(&self, title: &str, body: &str);
}
