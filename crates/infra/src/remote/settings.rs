//! User-settings table adapter

use async_trait::async_trait;
use reqwest::Method;
use tempo_core::settings::ports::SettingsStore;
use tempo_domain::{Result, SettingsPatch, UserSettings};
use uuid::Uuid;

use super::client::RemoteStore;

const TABLE: &str = "user_settings";

#[async_trait]
impl SettingsStore for RemoteStore {
    async fn get(&self, user_id: Uuid) -> Result<Option<UserSettings>> {
        let query = format!("select=*&user_id=eq.{user_id}&limit=1");
        let rows: Vec<UserSettings> = self.get_rows(&self.endpoint(TABLE, &query)).await?;
        Ok(rows.into_iter().next())
    }

    async fn insert(&self, settings: UserSettings) -> Result<UserSettings> {
        self.write_one(Method::POST, &self.endpoint(TABLE, ""), &settings).await
    }

    async fn update(&self, user_id: Uuid, patch: SettingsPatch) -> Result<UserSettings> {
        let url = self.endpoint(TABLE, &format!("user_id=eq.{user_id}"));
        self.write_one(Method::PATCH, &url, &patch).await
    }
}
