//! Settings document store.
//!
//! The settings document is the single source of truth for presence
//! intent. Handlers snapshot it before deciding anything, and every
//! mutation rewrites the whole file before the change is reported
//! anywhere else.

use std::path::PathBuf;

use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use vigil_core::config::AgentSettings;
use vigil_core::error::{AppError, ErrorKind};
use vigil_core::result::AppResult;

/// Shared handle over the settings document.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    current: RwLock<AgentSettings>,
}

impl SettingsStore {
    /// Load the document, falling back to defaults when the file is
    /// missing or undecodable.
    pub async fn load(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let settings = match fs::read_to_string(&path).await {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "Settings document undecodable, starting from defaults"
                    );
                    AgentSettings::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No settings document, starting from defaults");
                AgentSettings::default()
            }
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read settings: {}", path.display()),
                    e,
                ));
            }
        };

        Ok(Self {
            path,
            current: RwLock::new(settings),
        })
    }

    /// Snapshot the current document.
    pub async fn read(&self) -> AgentSettings {
        self.current.read().await.clone()
    }

    /// Mutate the document and persist it before returning.
    ///
    /// The write lock is held across the file write, so concurrent
    /// updates serialize and the in-memory copy never runs ahead of
    /// disk. A failed write leaves the previous document in force.
    pub async fn update<F>(&self, mutate: F) -> AppResult<AgentSettings>
    where
        F: FnOnce(&mut AgentSettings),
    {
        let mut guard = self.current.write().await;
        let mut next = guard.clone();
        mutate(&mut next);
        self.persist(&next).await?;
        *guard = next.clone();
        Ok(next)
    }

    async fn persist(&self, settings: &AgentSettings) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Storage,
                        format!("Failed to create settings directory: {}", parent.display()),
                        e,
                    )
                })?;
            }
        }

        let raw = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, raw).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write settings: {}", self.path.display()),
                e,
            )
        })
    }
}
