//! Presence reconciliation configuration.

use serde::{Deserialize, Serialize};

/// Presence reconciliation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenceConfig {
    /// Seconds between reconciliation ticks.
    #[serde(default = "default_tick_interval")]
    pub tick_interval_seconds: u64,
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            tick_interval_seconds: default_tick_interval(),
        }
    }
}

fn default_tick_interval() -> u64 {
    5
}
