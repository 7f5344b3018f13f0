//! The runtime-mutable settings document.
//!
//! Unlike the deployment configuration, this document changes while the
//! agent runs: command handlers mutate it and the settings store rewrites
//! the whole file. Field names follow the on-disk document shape, which
//! predates this implementation.

use serde::{Deserialize, Serialize};

use crate::types::PresenceStatus;

/// Offline-mode intent: what the account should look like while no other
/// device is online.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfflineSettings {
    /// Whether the configured facade replaces plain invisibility.
    #[serde(default)]
    pub enabled: bool,
    /// Status shown while the facade is active.
    #[serde(default = "default_offline_status")]
    pub status: PresenceStatus,
    /// Custom status text shown while the facade is active.
    #[serde(rename = "customStatus", default)]
    pub custom_status: String,
}

impl Default for OfflineSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            status: default_offline_status(),
            custom_status: String::new(),
        }
    }
}

/// The settings document: credentials, command prefix, and the persisted
/// presence intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSettings {
    /// Command prefix recognized in the account's own messages.
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Platform account token.
    #[serde(default)]
    pub token: String,
    /// Whether a Rich Presence should be shown while online.
    #[serde(rename = "rpcEnabled", default)]
    pub rpc_enabled: bool,
    /// Name of the preset to restore on startup and online transitions.
    #[serde(rename = "currentRPC", default)]
    pub current_rpc: Option<String>,
    /// Offline facade intent.
    #[serde(default)]
    pub offline: OfflineSettings,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            token: String::new(),
            rpc_enabled: false,
            current_rpc: None,
            offline: OfflineSettings::default(),
        }
    }
}

fn default_prefix() -> String {
    ".".to_string()
}

fn default_offline_status() -> PresenceStatus {
    PresenceStatus::Dnd
}
