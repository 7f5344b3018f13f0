//! Post-identify ready event.

use serde::{Deserialize, Serialize};

use crate::types::SessionId;

/// Identity of the account the agent is signed in as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountUser {
    /// Platform user id.
    pub id: String,
    /// Display name, when the platform includes it.
    #[serde(default)]
    pub username: String,
}

/// Payload of the ready frame sent once identification completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyEvent {
    /// Session id assigned to this connection.
    pub session_id: SessionId,
    /// The signed-in account.
    pub user: AccountUser,
}
