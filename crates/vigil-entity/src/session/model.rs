//! Foreign session model.

use serde::{Deserialize, Serialize};

use vigil_core::events::SessionDescriptor;
use vigil_core::types::SessionId;

/// One foreign device session retained from a snapshot.
///
/// "Foreign" means the session survived filtering: it is not the agent's
/// own connection, not a cached former own session, and not an
/// unclassifiable client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignSession {
    /// Platform-assigned session id.
    pub id: SessionId,
    /// Client kind label from the descriptor; empty when the platform
    /// omitted client details.
    pub client_kind: String,
}

impl From<&SessionDescriptor> for ForeignSession {
    fn from(descriptor: &SessionDescriptor) -> Self {
        Self {
            id: descriptor.session_id.clone(),
            client_kind: descriptor.client_kind().unwrap_or_default().to_string(),
        }
    }
}
