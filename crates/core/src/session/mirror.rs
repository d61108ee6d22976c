//! Session state mirror - watches the record snapshot and pushes
//! recording state outward

use std::sync::Arc;

use tempo_domain::{RecordingStatus, SessionState, TimeRecord};
use tokio::sync::{watch, Mutex};
use tracing::{debug, warn};

use crate::session::ShellNotifier;
use crate::tracking::ports::TaskStore;

/// Mirrors the "currently open record" into OS-level affordances.
///
/// On every snapshot change the mirror derives the session state, pushes
/// a [`RecordingStatus`] to the optional shell notifier, and publishes
/// the state on a watch channel for in-process subscribers (for example
/// the display-refresh scheduler). Consecutive identical states are
/// coalesced so rapid refreshes do not spam the shell.
pub struct SessionMirror {
    task_store: Arc<dyn TaskStore>,
    notifier: Option<Arc<dyn ShellNotifier>>,
    state_tx: watch::Sender<SessionState>,
    last_pushed: Mutex<Option<RecordingStatus>>,
}

impl SessionMirror {
    /// Create a mirror without a shell notifier (non-desktop context).
    pub fn new(task_store: Arc<dyn TaskStore>) -> Self {
        let (state_tx, _) = watch::channel(SessionState::Idle);
        Self { task_store, notifier: None, state_tx, last_pushed: Mutex::new(None) }
    }

    /// Attach the desktop shell notifier.
    pub fn with_notifier(mut self, notifier: Arc<dyn ShellNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Subscribe to session state transitions.
    ///
    /// Slow or absent subscribers never block the mirror; `watch` keeps
    /// only the latest value.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    /// Latest derived session state.
    pub fn current_state(&self) -> SessionState {
        self.state_tx.borrow().clone()
    }

    /// Re-derive the session state from a record snapshot and mirror it
    /// outward.
    ///
    /// Infallible by contract: a failing task lookup degrades to a status
    /// without a task snapshot, and notifier delivery is fire-and-forget.
    pub async fn sync(&self, records: &[TimeRecord]) -> SessionState {
        let state = SessionState::derive(records);

        let status = match &state {
            SessionState::Idle => RecordingStatus::idle(),
            SessionState::Recording { task_id, .. } => {
                let task = match self.task_store.get_task(*task_id).await {
                    Ok(task) => task,
                    Err(err) => {
                        warn!(%task_id, error = %err, "task lookup for mirror failed");
                        None
                    }
                };
                RecordingStatus::recording(task)
            }
        };

        self.state_tx.send_if_modified(|current| {
            if *current == state {
                false
            } else {
                *current = state.clone();
                true
            }
        });

        self.push_status(status).await;

        state
    }

    async fn push_status(&self, status: RecordingStatus) {
        let mut last = self.last_pushed.lock().await;
        if last.as_ref() == Some(&status) {
            return;
        }

        if let Some(notifier) = &self.notifier {
            debug!(is_recording = status.is_recording, "pushing recording status to shell");
            notifier.set_recording_status(status.clone()).await;
        }

        *last = Some(status);
    }
}
