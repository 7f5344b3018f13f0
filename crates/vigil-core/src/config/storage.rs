//! Document storage configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Document storage configuration.
///
/// All stored documents live under one data directory: the settings
/// document, the seen-session cache, and the preset directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for all agent state.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// File name of the settings document, relative to `data_dir`.
    #[serde(default = "default_settings_file")]
    pub settings_file: String,
    /// File name of the seen-session cache, relative to `data_dir`.
    #[serde(default = "default_session_cache_file")]
    pub session_cache_file: String,
    /// Directory holding preset documents, relative to `data_dir`.
    #[serde(default = "default_presets_dir")]
    pub presets_dir: String,
}

impl StorageConfig {
    /// Absolute or working-directory-relative path of the settings document.
    pub fn settings_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.settings_file)
    }

    /// Path of the seen-session cache document.
    pub fn session_cache_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.session_cache_file)
    }

    /// Path of the preset directory.
    pub fn presets_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.presets_dir)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            settings_file: default_settings_file(),
            session_cache_file: default_session_cache_file(),
            presets_dir: default_presets_dir(),
        }
    }
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_settings_file() -> String {
    "config.json".to_string()
}

fn default_session_cache_file() -> String {
    "sessionCache.json".to_string()
}

fn default_presets_dir() -> String {
    "rpc".to_string()
}
