//! Application context - dependency injection container

use std::sync::Arc;
use std::time::Duration;

use tempo_core::tracking::ports::{RecordStore, TaskStore};
use tempo_core::{
    ReportingService, SessionMirror, SettingsService, ShellNotifier, TrackingService,
};
use tempo_domain::{Result, TempoError};
use tempo_infra::{
    AppConfig, ChannelShellNotifier, RemoteStore, RemoteStoreConfig, SessionRefreshScheduler,
    SessionRefreshSchedulerConfig, ShellCommand,
};
use tokio::sync::mpsc;
use tokio::sync::Mutex;

const SHELL_CHANNEL_CAPACITY: usize = 32;
const SCHEDULER_START_TIMEOUT: Duration = Duration::from_secs(10);

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: AppConfig,
    pub tracking_service: Arc<TrackingService>,
    pub reporting_service: Arc<ReportingService>,
    pub settings_service: Arc<SettingsService>,
    pub session_mirror: Arc<SessionMirror>,

    session_scheduler: Mutex<SessionRefreshScheduler>,
    /// Receiver half of the shell command channel, handed out once to
    /// whichever shell integration drains it.
    shell_commands: Mutex<Option<mpsc::Receiver<ShellCommand>>>,
}

impl AppContext {
    /// Wire up the full service graph from configuration.
    ///
    /// # Errors
    /// Returns `TempoError::Config` for an unusable remote configuration.
    pub fn new(config: AppConfig) -> Result<Self> {
        let remote = Arc::new(RemoteStore::new(RemoteStoreConfig {
            base_url: config.remote_url.clone(),
            api_key: config.remote_api_key.clone(),
            access_token: config.remote_access_token.clone(),
            ..RemoteStoreConfig::default()
        })?);

        let record_store: Arc<dyn RecordStore> = remote.clone();
        let task_store: Arc<dyn TaskStore> = remote.clone();

        let (notifier, shell_rx) = if config.shell.notifications_enabled {
            let (notifier, rx) = ChannelShellNotifier::channel(SHELL_CHANNEL_CAPACITY);
            (Some(Arc::new(notifier) as Arc<dyn ShellNotifier>), Some(rx))
        } else {
            (None, None)
        };

        let mut mirror = SessionMirror::new(Arc::clone(&task_store));
        if let Some(notifier) = &notifier {
            mirror = mirror.with_notifier(Arc::clone(notifier));
        }
        let session_mirror = Arc::new(mirror);

        let mut tracking =
            TrackingService::new(Arc::clone(&record_store), Arc::clone(&task_store))
                .with_mirror(Arc::clone(&session_mirror));
        if let Some(notifier) = &notifier {
            tracking = tracking.with_notifier(Arc::clone(notifier));
        }

        let reporting_service =
            Arc::new(ReportingService::new(Arc::clone(&record_store), Arc::clone(&task_store)));
        let settings_service = Arc::new(SettingsService::new(remote.clone()));

        let session_scheduler = Mutex::new(SessionRefreshScheduler::new(
            Arc::clone(&record_store),
            Arc::clone(&session_mirror),
            SessionRefreshSchedulerConfig {
                interval: Duration::from_secs(config.refresh_interval_secs.max(1)),
            },
        ));

        Ok(Self {
            config,
            tracking_service: Arc::new(tracking),
            reporting_service,
            settings_service,
            session_mirror,
            session_scheduler,
            shell_commands: Mutex::new(shell_rx),
        })
    }

    /// Take the shell command receiver.
    ///
    /// Returns `None` on a second call or when shell notifications are
    /// disabled.
    pub async fn take_shell_commands(&self) -> Option<mpsc::Receiver<ShellCommand>> {
        self.shell_commands.lock().await.take()
    }

    /// Start the live-display refresh scheduler (fail-fast with timeout).
    ///
    /// # Errors
    /// Returns `TempoError::Internal` if the start times out, or the
    /// scheduler's own error when already running.
    pub async fn start_schedulers(&self) -> Result<()> {
        let mut scheduler = self.session_scheduler.lock().await;
        tokio::time::timeout(SCHEDULER_START_TIMEOUT, scheduler.start())
            .await
            .map_err(|_| {
                tracing::error!(
                    timeout_secs = SCHEDULER_START_TIMEOUT.as_secs(),
                    "session refresh scheduler start timed out"
                );
                TempoError::Internal("session refresh scheduler start timed out".into())
            })?
            .map_err(TempoError::from)
    }

    /// Stop background work; idempotent so shutdown paths can race.
    pub async fn shutdown(&self) {
        let mut scheduler = self.session_scheduler.lock().await;
        if let Err(err) = scheduler.stop().await {
            tracing::debug!(error = %err, "session refresh scheduler was not running");
        }
    }
}
