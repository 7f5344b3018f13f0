//! Seen-session cache store.
//!
//! Snapshot filtering consults this store on every sessions-replace
//! event, so membership reads come from the in-memory copy; only
//! registration of a newly observed own session id touches disk.

use std::path::PathBuf;

use chrono::Utc;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use vigil_core::error::{AppError, ErrorKind};
use vigil_core::result::AppResult;
use vigil_core::types::SessionId;
use vigil_entity::session::SeenSessionCache;

/// Store for the seen-session cache document.
#[derive(Debug)]
pub struct SessionCacheStore {
    path: PathBuf,
    cache: RwLock<SeenSessionCache>,
}

impl SessionCacheStore {
    /// Load the document, falling back to an empty cache when the file
    /// is missing or undecodable.
    pub async fn load(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let cache = match fs::read_to_string(&path).await {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(cache) => cache,
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "Session cache undecodable, starting empty"
                    );
                    SeenSessionCache::new(Utc::now())
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                SeenSessionCache::new(Utc::now())
            }
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read session cache: {}", path.display()),
                    e,
                ));
            }
        };

        Ok(Self {
            path,
            cache: RwLock::new(cache),
        })
    }

    /// Whether the id is a recorded former own session.
    pub async fn contains(&self, id: &SessionId) -> bool {
        self.cache.read().await.contains(id)
    }

    /// Snapshot the current document.
    pub async fn snapshot(&self) -> SeenSessionCache {
        self.cache.read().await.clone()
    }

    /// Record one own session id, persisting when the document changed.
    ///
    /// Applies the rolling-window rule: a record untouched for more than
    /// 24 hours is discarded before the id is added. Returns whether the
    /// document changed.
    pub async fn register(&self, id: &SessionId) -> AppResult<bool> {
        let mut guard = self.cache.write().await;
        if !guard.record(id, Utc::now()) {
            return Ok(false);
        }
        self.persist(&guard).await?;
        debug!(session_id = %id, total = guard.session_ids.len(), "Recorded own session");
        Ok(true)
    }

    async fn persist(&self, cache: &SeenSessionCache) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Storage,
                        format!(
                            "Failed to create session cache directory: {}",
                            parent.display()
                        ),
                        e,
                    )
                })?;
            }
        }

        let raw = serde_json::to_string_pretty(cache)?;
        fs::write(&self.path, raw).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write session cache: {}", self.path.display()),
                e,
            )
        })
    }
}
