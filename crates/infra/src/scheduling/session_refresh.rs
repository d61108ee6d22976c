//! Session display-refresh scheduler.
//!
//! While a session is open, the live elapsed display and the shell
//! mirror must be re-derived once per second. This scheduler owns that
//! tick: on each interval it fetches the latest record snapshot and
//! re-syncs the [`SessionMirror`], which coalesces unchanged states.
//! While idle it parks on the mirror's state channel instead of polling
//! the store.
//!
//! A tick racing a data refresh elsewhere is harmless: both only read
//! the latest snapshot, and a stale push is overwritten within one tick.

use std::sync::Arc;
use std::time::Duration;

use tempo_core::tracking::ports::RecordStore;
use tempo_core::SessionMirror;
use tempo_domain::constants::SESSION_REFRESH_INTERVAL_SECS;
use tempo_domain::time::{elapsed_ms, format_elapsed};
use tempo_domain::SessionState;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use crate::scheduling::error::{SchedulerError, SchedulerResult};

/// Type alias for task handle to avoid complexity warnings
type TaskHandle = Arc<Mutex<Option<JoinHandle<()>>>>;

/// Configuration for the session refresh scheduler
#[derive(Debug, Clone)]
pub struct SessionRefreshSchedulerConfig {
    /// Tick interval while a session is open.
    pub interval: Duration,
}

impl Default for SessionRefreshSchedulerConfig {
    fn default() -> Self {
        Self { interval: Duration::from_secs(SESSION_REFRESH_INTERVAL_SECS) }
    }
}

/// Scheduler driving the one-second live-display refresh
pub struct SessionRefreshScheduler {
    record_store: Arc<dyn RecordStore>,
    mirror: Arc<SessionMirror>,
    config: SessionRefreshSchedulerConfig,
    cancellation_token: CancellationToken,
    task_handle: TaskHandle,
}

impl SessionRefreshScheduler {
    /// Create a new session refresh scheduler
    pub fn new(
        record_store: Arc<dyn RecordStore>,
        mirror: Arc<SessionMirror>,
        config: SessionRefreshSchedulerConfig,
    ) -> Self {
        Self {
            record_store,
            mirror,
            config,
            cancellation_token: CancellationToken::new(),
            task_handle: Arc::new(Mutex::new(None)),
        }
    }

    /// Start the scheduler
    ///
    /// Spawns a background task that refreshes the mirror while a
    /// session is open.
    ///
    /// # Errors
    /// Returns [`SchedulerError::AlreadyRunning`] if already started.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> SchedulerResult<()> {
        let mut handle_guard = self.task_handle.lock().await;
        if handle_guard.as_ref().is_some_and(|handle| !handle.is_finished()) {
            return Err(SchedulerError::AlreadyRunning);
        }

        info!("Starting session refresh scheduler");

        // A fresh token supports restart after stop
        self.cancellation_token = CancellationToken::new();

        let record_store = Arc::clone(&self.record_store);
        let mirror = Arc::clone(&self.mirror);
        let interval = self.config.interval;
        let cancel = self.cancellation_token.clone();

        let handle = tokio::spawn(async move {
            Self::refresh_loop(record_store, mirror, interval, cancel).await;
        });

        *handle_guard = Some(handle);
        info!("Session refresh scheduler started");
        Ok(())
    }

    /// Stop the scheduler gracefully
    ///
    /// Cancels the background task and awaits completion.
    ///
    /// # Errors
    /// Returns [`SchedulerError::NotRunning`] if not started.
    #[instrument(skip(self))]
    pub async fn stop(&mut self) -> SchedulerResult<()> {
        let mut handle_guard = self.task_handle.lock().await;
        let Some(handle) = handle_guard.take() else {
            return Err(SchedulerError::NotRunning);
        };

        info!("Stopping session refresh scheduler");
        self.cancellation_token.cancel();

        let join_timeout = Duration::from_secs(5);
        match tokio::time::timeout(join_timeout, handle).await {
            Ok(Ok(())) => {
                info!("Session refresh scheduler stopped");
                Ok(())
            }
            Ok(Err(err)) => Err(SchedulerError::TaskJoinFailed(err.to_string())),
            Err(_) => Err(SchedulerError::Timeout { seconds: join_timeout.as_secs() }),
        }
    }

    /// Whether the background task is currently running.
    pub async fn is_running(&self) -> bool {
        self.task_handle
            .lock()
            .await
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    async fn refresh_loop(
        record_store: Arc<dyn RecordStore>,
        mirror: Arc<SessionMirror>,
        interval: Duration,
        cancel: CancellationToken,
    ) {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        let mut state_rx = mirror.subscribe();
        let mut recording = mirror.current_state().is_recording();

        loop {
            tokio::select! {
                () = cancel.cancelled() => {
                    debug!("refresh loop cancelled");
                    break;
                }
                changed = state_rx.changed(), if !recording => {
                    if changed.is_err() {
                        // Mirror dropped; nothing left to refresh.
                        break;
                    }
                    recording = state_rx.borrow_and_update().is_recording();
                }
                _ = ticker.tick(), if recording => {
                    match record_store.list_records(None).await {
                        Ok(records) => {
                            let state = mirror.sync(&records).await;
                            if let SessionState::Recording { started_at, .. } = &state {
                                let elapsed =
                                    elapsed_ms(*started_at, None, chrono::Utc::now());
                                debug!(elapsed = %format_elapsed(elapsed), "live display refresh");
                            }
                            recording = state.is_recording();
                        }
                        // Keep the last-known state; the next tick retries.
                        Err(err) => warn!(error = %err, "record snapshot refresh failed"),
                    }
                }
            }
        }
    }
}
