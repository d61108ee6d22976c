//! Tempo - desktop time tracking
//!
//! Headless entry point: wires the application context, keeps the
//! session mirror fresh, and logs shell commands until interrupted.
//! The desktop shell embeds [`tempo_app::AppContext`] directly and
//! consumes the same channel instead of this logger.

use tempo_app::AppContext;
use tempo_infra::ShellCommand;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging first so .env loading is visible
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    match dotenvy::dotenv() {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(err) => warn!(error = %err, "no .env file loaded"),
    }

    let config = tempo_infra::config::load()?;
    let ctx = AppContext::new(config)?;

    ctx.start_schedulers().await?;
    info!("tempo started");

    if let Some(mut shell_rx) = ctx.take_shell_commands().await {
        tokio::spawn(async move {
            while let Some(command) = shell_rx.recv().await {
                match command {
                    ShellCommand::SetRecordingStatus(status) => {
                        info!(is_recording = status.is_recording, "shell: recording status");
                    }
                    ShellCommand::ShowNotification { title, body } => {
                        info!(%title, %body, "shell: notification");
                    }
                }
            }
        });
    }

    tokio::signal::ctrl_c().await?;
    info!("shutting down");
    ctx.shutdown().await;

    Ok(())
}
