//! Display state value object.

use serde::{Deserialize, Serialize};

use crate::preset::Preset;
use crate::session::ForeignSession;

/// The reconciler's working memory of what the platform currently shows
/// for the account.
///
/// This is in-memory state only. It starts from its default at process
/// start: no active preset, not suppressed, no known foreign sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayState {
    /// The preset currently applied to the account, if any.
    pub active_rpc: Option<Preset>,
    /// Whether the agent has put the account behind the offline facade.
    pub is_currently_offline: bool,
    /// Foreign sessions retained from the latest accepted snapshot.
    pub current_sessions: Vec<ForeignSession>,
}

impl DisplayState {
    /// Whether any other device currently holds a session.
    pub fn has_foreign_sessions(&self) -> bool {
        !self.current_sessions.is_empty()
    }
}
