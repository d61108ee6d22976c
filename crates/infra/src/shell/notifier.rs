//! Shell notifier implementations
//!
//! The desktop shell consumes recording state for its tray label and
//! shows OS notifications. The bridge is one-way and fire-and-forget:
//! nothing here ever blocks or fails the caller.

use async_trait::async_trait;
use tempo_core::ShellNotifier;
use tempo_domain::RecordingStatus;
use tokio::sync::mpsc;
use tracing::debug;

/// Command forwarded to the desktop shell process.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    /// Mirror the recording state into the tray / menu bar.
    SetRecordingStatus(RecordingStatus),
    /// Show a desktop notification.
    ShowNotification { title: String, body: String },
}

/// Notifier used in non-desktop contexts; every call is a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopShellNotifier;

#[async_trait]
impl ShellNotifier for NoopShellNotifier {
    async fn set_recording_status(&self, _status: RecordingStatus) {}

    async fn show_notification(&self, _title: &str, _body: &str) {}
}

/// Bridges notifications onto an mpsc channel drained by the shell
/// integration.
///
/// A closed or full channel drops the command silently; the shell is
/// free to be absent or slow, and the core never waits for it.
pub struct ChannelShellNotifier {
    tx: mpsc::Sender<ShellCommand>,
}

impl ChannelShellNotifier {
    /// Create the notifier plus the receiving end for the shell side.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<ShellCommand>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx }, rx)
    }

    fn push(&self, command: ShellCommand) {
        if let Err(err) = self.tx.try_send(command) {
            debug!(error = %err, "shell channel unavailable, dropping command");
        }
    }
}

#[async_trait]
impl ShellNotifier for ChannelShellNotifier {
    async fn set_recording_status(&self, status: RecordingStatus) {
        self.push(ShellCommand::SetRecordingStatus(status));
    }

    async fn show_notification(&self, title: &str, body: &str) {
        self.push(ShellCommand::ShowNotification {
            title: title.to_string(),
            body: body.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_commands_arrive_in_order() {
        let (notifier, mut rx) = ChannelShellNotifier::channel(8);

        notifier.set_recording_status(RecordingStatus::idle()).await;
        notifier.show_notification("Recording started", "Task time recording has started").await;

        assert_eq!(rx.recv().await, Some(ShellCommand::SetRecordingStatus(RecordingStatus::idle())));
        match rx.recv().await {
            Some(ShellCommand::ShowNotification { title, .. }) => {
                assert_eq!(title, "Recording started");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_closed_channel_is_silent() {
        let (notifier, rx) = ChannelShellNotifier::channel(1);
        drop(rx);

        // Must not panic or error once the shell has gone away.
        notifier.set_recording_status(RecordingStatus::idle()).await;
        notifier.show_notification("Recording stopped", "Task time recording has stopped").await;
    }

    #[tokio::test]
    async fn test_full_channel_drops_instead_of_blocking() {
        let (notifier, mut rx) = ChannelShellNotifier::channel(1);

        notifier.set_recording_status(RecordingStatus::idle()).await;
        // Second command exceeds capacity and is dropped.
        notifier.show_notification("Recording started", "ignored").await;

        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }
}
