//! Preset document store.
//!
//! One JSON file per preset under the preset directory, named
//! `<storage name>.json`. Lookups are case-sensitive: the store reads
//! exactly the file it is asked for.

use std::path::PathBuf;

use tokio::fs;
use tracing::{debug, warn};

use vigil_core::error::{AppError, ErrorKind};
use vigil_core::result::AppResult;
use vigil_entity::preset::Preset;

/// Store for Rich Presence preset documents.
#[derive(Debug, Clone)]
pub struct PresetStore {
    /// Directory holding one `<name>.json` per preset.
    dir: PathBuf,
}

impl PresetStore {
    /// Create a store rooted at the given directory, creating it if needed.
    pub async fn new(dir: impl Into<PathBuf>) -> AppResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create preset directory: {}", dir.display()),
                e,
            )
        })?;
        Ok(Self { dir })
    }

    /// Resolve a preset name to its document path.
    fn resolve(&self, name: &str) -> AppResult<PathBuf> {
        validate_name(name)?;
        Ok(self.dir.join(format!("{name}.json")))
    }

    /// Load a preset by exact name.
    ///
    /// Missing and undecodable documents both come back as `None`; an
    /// undecodable one is logged and otherwise ignored.
    pub async fn load(&self, name: &str) -> AppResult<Option<Preset>> {
        let path = self.resolve(name)?;
        let raw = match fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read preset: {name}"),
                    e,
                ));
            }
        };

        match serde_json::from_str(&raw) {
            Ok(preset) => Ok(Some(preset)),
            Err(e) => {
                warn!(name, error = %e, "Ignoring undecodable preset document");
                Ok(None)
            }
        }
    }

    /// Write a preset under the given storage name, replacing any
    /// existing document.
    pub async fn save(&self, name: &str, preset: &Preset) -> AppResult<()> {
        let path = self.resolve(name)?;
        let raw = serde_json::to_string_pretty(preset)?;
        fs::write(&path, raw).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write preset: {name}"),
                e,
            )
        })?;
        debug!(name, "Saved preset");
        Ok(())
    }

    /// Delete a preset by exact name. Returns whether a document existed.
    pub async fn delete(&self, name: &str) -> AppResult<bool> {
        let path = self.resolve(name)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!(name, "Deleted preset");
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete preset: {name}"),
                e,
            )),
        }
    }

    /// List stored preset names, sorted.
    pub async fn list(&self) -> AppResult<Vec<String>> {
        let mut dir = match fs::read_dir(&self.dir).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to list presets in {}", self.dir.display()),
                    e,
                ));
            }
        };

        let mut names = Vec::new();
        while let Some(entry) = dir.next_entry().await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, "Failed to read preset directory entry", e)
        })? {
            let file_name = entry.file_name().to_string_lossy().to_string();
            if let Some(stem) = file_name.strip_suffix(".json") {
                names.push(stem.to_string());
            }
        }

        names.sort();
        Ok(names)
    }
}

/// Reject names that could resolve outside the preset directory.
fn validate_name(name: &str) -> AppResult<()> {
    if name.is_empty() {
        return Err(AppError::validation("Preset name cannot be empty"));
    }
    if name.contains(['/', '\\']) || name.contains("..") {
        return Err(AppError::validation(format!(
            "Invalid preset name: '{name}'"
        )));
    }
    Ok(())
}
