//! Filtering of raw session snapshots into the countable foreign set.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use vigil_core::events::SessionDescriptor;
use vigil_core::types::SessionId;
use vigil_entity::session::ForeignSession;
use vigil_store::SessionCacheStore;

/// Client kind the platform reports for connections it cannot classify.
const UNKNOWN_CLIENT: &str = "unknown";

/// Turns `SESSIONS_REPLACE` snapshots into the set of foreign sessions
/// that should count towards "the account is in use elsewhere".
pub struct SessionTracker {
    cache: Arc<SessionCacheStore>,
    own_session: RwLock<Option<SessionId>>,
}

impl SessionTracker {
    pub fn new(cache: Arc<SessionCacheStore>) -> Self {
        Self {
            cache,
            own_session: RwLock::new(None),
        }
    }

    /// Record the agent's own session id so snapshots can exclude it.
    pub async fn set_own_session(&self, id: SessionId) {
        let mut own = self.own_session.write().await;
        *own = Some(id);
    }

    /// Filter one snapshot down to the foreign sessions worth counting.
    ///
    /// A session survives when it is not the agent's own connection, has
    /// not been recorded in the rolling seen-session cache, and does not
    /// report the unclassified client kind. Duplicate ids within a single
    /// snapshot count once, first occurrence wins.
    pub async fn ingest(&self, snapshot: &[SessionDescriptor]) -> Vec<ForeignSession> {
        let own = self.own_session.read().await.clone();
        let mut seen_ids: HashSet<&str> = HashSet::new();
        let mut kept = Vec::new();

        for descriptor in snapshot {
            let id = descriptor.session_id.as_str();
            if own.as_ref().is_some_and(|o| o.as_str() == id) {
                continue;
            }
            if descriptor.client_kind() == Some(UNKNOWN_CLIENT) {
                continue;
            }
            if self.cache.contains(&descriptor.session_id).await {
                continue;
            }
            if !seen_ids.insert(id) {
                continue;
            }
            kept.push(ForeignSession::from(descriptor));
        }

        debug!(
            total = snapshot.len(),
            foreign = kept.len(),
            "Session snapshot ingested"
        );
        kept
    }
}
