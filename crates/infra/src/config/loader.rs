//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `TEMPO_REMOTE_URL`: Base URL of the hosted backend
//! - `TEMPO_REMOTE_API_KEY`: Project API key
//! - `TEMPO_REMOTE_ACCESS_TOKEN`: Optional per-session bearer token
//! - `TEMPO_USER_ID`: Signed-in user id
//! - `TEMPO_SHELL_NOTIFICATIONS`: Whether shell notifications are enabled
//!   (true/false, default true)
//! - `TEMPO_REFRESH_INTERVAL`: Live-display refresh interval in seconds
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.toml` or `./config.json` (current working directory)
//! 2. `./tempo.toml` or `./tempo.json` (current working directory)
//! 3. `../config.toml` or `../config.json` (parent directory)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempo_domain::constants::SESSION_REFRESH_INTERVAL_SECS;
use tempo_domain::{Result, TempoError};
use uuid::Uuid;

/// Desktop shell integration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// When false the app runs headless: no notifier is wired up.
    #[serde(default = "default_true")]
    pub notifications_enabled: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self { notifications_enabled: true }
    }
}

fn default_true() -> bool {
    true
}

fn default_refresh_interval() -> u64 {
    SESSION_REFRESH_INTERVAL_SECS
}

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the hosted backend.
    pub remote_url: String,
    /// Project API key.
    pub remote_api_key: String,
    /// Optional per-session bearer token.
    #[serde(default)]
    pub remote_access_token: Option<String>,
    /// Signed-in user id.
    pub user_id: Uuid,
    #[serde(default)]
    pub shell: ShellConfig,
    /// Live-display refresh interval in seconds.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,
}

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `TempoError::Config` if configuration cannot be loaded from
/// either source, the file format is invalid, or required fields are
/// missing.
pub fn load() -> Result<AppConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// All required environment variables must be present.
///
/// # Errors
/// Returns `TempoError::Config` if required variables are missing or
/// have invalid values.
pub fn load_from_env() -> Result<AppConfig> {
    let remote_url = env_var("TEMPO_REMOTE_URL")?;
    let remote_api_key = env_var("TEMPO_REMOTE_API_KEY")?;
    let remote_access_token = std::env::var("TEMPO_REMOTE_ACCESS_TOKEN").ok();
    let user_id = env_var("TEMPO_USER_ID").and_then(|s| {
        s.parse::<Uuid>().map_err(|e| TempoError::Config(format!("Invalid user id: {e}")))
    })?;
    let notifications_enabled = env_bool("TEMPO_SHELL_NOTIFICATIONS", true);
    let refresh_interval_secs = match std::env::var("TEMPO_REFRESH_INTERVAL") {
        Ok(value) => value
            .parse::<u64>()
            .map_err(|e| TempoError::Config(format!("Invalid refresh interval: {e}")))?,
        Err(_) => SESSION_REFRESH_INTERVAL_SECS,
    };

    Ok(AppConfig {
        remote_url,
        remote_api_key,
        remote_access_token,
        user_id,
        shell: ShellConfig { notifications_enabled },
        refresh_interval_secs,
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `TempoError::Config` if the file is missing, unreadable, or
/// fails to parse.
pub fn load_from_file(path: Option<&Path>) -> Result<AppConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => probe_config_paths().ok_or_else(|| {
            TempoError::Config("no configuration file found in probed locations".into())
        })?,
    };

    let contents = std::fs::read_to_string(&path).map_err(|e| {
        TempoError::Config(format!("failed to read {}: {e}", path.display()))
    })?;

    let config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str::<AppConfig>(&contents)
            .map_err(|e| TempoError::Config(format!("invalid TOML config: {e}")))?,
        Some("json") => serde_json::from_str::<AppConfig>(&contents)
            .map_err(|e| TempoError::Config(format!("invalid JSON config: {e}")))?,
        other => {
            return Err(TempoError::Config(format!(
                "unsupported config extension: {other:?}"
            )))
        }
    };

    tracing::info!(path = %path.display(), "Configuration loaded from file");
    Ok(config)
}

fn probe_config_paths() -> Option<PathBuf> {
    const CANDIDATES: &[&str] = &[
        "config.toml",
        "config.json",
        "tempo.toml",
        "tempo.json",
        "../config.toml",
        "../config.json",
    ];

    CANDIDATES.iter().map(PathBuf::from).find(|path| path.is_file())
}

fn env_var(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| TempoError::Config(format!("missing environment variable {name}")))
}

fn env_bool(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .map(|value| matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(default)
}
