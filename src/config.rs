//! UI Configuration
//!
//! Optional overrides stored as JSON in `localStorage`. Missing or invalid
//! values fall back to defaults.

use serde::{Deserialize, Serialize};

pub const CONFIG_STORAGE_KEY: &str = "shared-todos.config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tasks shown by the compact preview on the home screen
    pub dashboard_max_items: usize,
    /// Where "Add a partner" leads
    pub add_partner_path: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dashboard_max_items: 5,
            add_partner_path: "/settings/partners".to_string(),
        }
    }
}

impl UiConfig {
    /// Parse stored JSON, keeping defaults for absent fields
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Load from `localStorage`, or defaults
    pub fn load() -> Self {
        let stored = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten());

        match stored {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|err| {
                tracing::warn!(error = %err, key = CONFIG_STORAGE_KEY, "invalid stored config, using defaults");
                Self::default()
            }),
            None => Self::default(),
        }
    }
}
