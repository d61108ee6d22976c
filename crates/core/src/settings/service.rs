//! Settings service

use std::sync::Arc;

use tempo_domain::{Result, SettingsPatch, UserSettings};
use tracing::info;
use uuid::Uuid;

use super::ports::SettingsStore;

/// Reads and updates per-user settings, bootstrapping defaults on first
/// read.
pub struct SettingsService {
    store: Arc<dyn SettingsStore>,
}

impl SettingsService {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    /// Fetch the user's settings, creating and persisting the defaults
    /// when no row exists yet.
    pub async fn get_or_init(&self, user_id: Uuid) -> Result<UserSettings> {
        if let Some(settings) = self.store.get(user_id).await? {
            return Ok(settings);
        }

        info!(%user_id, "no settings row, creating defaults");
        self.store.insert(UserSettings::defaults(user_id)).await
    }

    /// Apply a partial settings update.
    pub async fn update(&self, user_id: Uuid, patch: SettingsPatch) -> Result<UserSettings> {
        self.store.update(user_id, patch).await
    }
}
