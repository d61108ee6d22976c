//! Port interface for the settings store

use async_trait::async_trait;
use tempo_domain::{Result, SettingsPatch, UserSettings};
use uuid::Uuid;

/// Trait for the per-user settings row in the remote store
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Fetch the settings row, `None` when the user has none yet.
    async fn get(&self, user_id: Uuid) -> Result<Option<UserSettings>>;

    /// Insert a settings row.
    async fn insert(&self, settings: UserSettings) -> Result<UserSettings>;

    /// Apply a partial update.
    async fn update(&self, user_id: Uuid, patch: SettingsPatch) -> Result<UserSettings>;
}
