//! Settings loader for `<config dir>/faunara/config.toml`

use std::path::{Path, PathBuf};

use super::types::{Settings, DEFAULT_BASE_URL};
use faunara_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const FAUNARA_DIR: &str = "faunara";

/// Default location of the config file, `None` when the platform has no
/// config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(FAUNARA_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`.
///
/// A missing or unreadable file is not an error: defaults are used.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write the default config file if none exists, pointing it at
/// `base_url` when one is given.
///
/// An existing file is never rewritten, even if it fails to parse. Returns
/// `true` when a file was created.
pub fn init_config(config_path: &Path, base_url: Option<&str>) -> Result<bool> {
    if config_path.exists() {
        debug!("Config already exists at {:?}, leaving it alone", config_path);
        return Ok(false);
    }

    if let Some(dir) = config_path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", dir, e)))?;
    }

    let base_url = base_url.unwrap_or(DEFAULT_BASE_URL);
    std::fs::write(config_path, generate_default_config(base_url))
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;
    info!("Created default config at {:?}", config_path);
    Ok(true)
}

const CONFIG_HEADER: &str = "# FAUNARA client configuration\n\n";

fn generate_default_config(base_url: &str) -> String {
    format!(
        r#"{}[server]
base_url = {}

[ui]
tick_rate_ms = 50
# Show a "save this animal" hint when the similarity score is below this value
# save_hint_below_score = 0.7
"#,
        CONFIG_HEADER,
        toml::Value::String(base_url.to_string())
    )
}
