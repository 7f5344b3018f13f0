//! Session snapshot events.

use serde::{Deserialize, Serialize};

use crate::types::SessionId;

/// Client details the platform attaches to a session descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    /// Client kind label, e.g. `"desktop"`, `"mobile"`, `"web"`. The
    /// platform uses the sentinel `"unknown"` for sessions it cannot
    /// classify.
    #[serde(default)]
    pub client: String,
    /// Operating system label, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
}

/// One entry of a sessions-replace snapshot, as sent by the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDescriptor {
    /// Identifier of the described session.
    pub session_id: SessionId,
    /// Client details; absent for some relay sessions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_info: Option<ClientInfo>,
    /// Status the session advertises, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl SessionDescriptor {
    /// The client kind, when the platform reported one.
    pub fn client_kind(&self) -> Option<&str> {
        self.client_info.as_ref().map(|info| info.client.as_str())
    }
}
