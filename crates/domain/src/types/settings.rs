//! User settings owned by the remote store

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// UI theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    System,
}

/// Per-user application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub user_id: Uuid,
    pub is_premium: bool,
    pub theme: Theme,
    pub show_in_menu_bar: bool,
}

impl UserSettings {
    /// Defaults persisted on first read when no row exists yet.
    #[must_use]
    pub fn defaults(user_id: Uuid) -> Self {
        Self { user_id, is_premium: false, theme: Theme::System, show_in_menu_bar: true }
    }
}

/// Partial settings update; `None` fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_in_menu_bar: Option<bool>,
}
