//! Playground configuration, loaded from a JSON file under the user config
//! dir. Every failure path logs and falls back to defaults; a broken config
//! never prevents startup.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::error::{Result, ResultExt, StorybenchError};
use crate::theme::Theme;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Initial theme for new sessions.
    #[serde(default)]
    pub theme: Theme,
    /// Override for the JSONL log directory.
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "logDir")]
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: Theme::default(),
            log_dir: None, // logging::init picks the platform default
        }
    }
}

/// `<config dir>/storybench/config.json`
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("storybench").join("config.json"))
}

fn read_config(path: &Path) -> Result<Config> {
    let raw = fs::read_to_string(path).map_err(|source| StorybenchError::ConfigRead {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}

/// Load config from an explicit path, warning and defaulting on failure.
pub fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        info!(path = %path.display(), "Config file not found, using defaults");
        return Config::default();
    }
    read_config(path).warn_on_err().unwrap_or_default()
}

#[instrument(name = "load_config")]
pub fn load_config() -> Config {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("No user config directory available, using defaults");
            Config::default()
        }
    }
}
