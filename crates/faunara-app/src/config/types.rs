//! Configuration types for the FAUNARA client

use serde::{Deserialize, Serialize};

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Where the classification service lives
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServerSettings {
    /// Service root; endpoints resolve under it
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Input poll timeout, which is also the tick interval
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Offer the "add this animal" hint in the classification modal when the
    /// similarity score is below this value. Unset disables the hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_hint_below_score: Option<f64>,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            save_hint_below_score: None,
        }
    }
}

/// Service root used when the config file names none
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_tick_rate_ms() -> u64 {
    50
}
