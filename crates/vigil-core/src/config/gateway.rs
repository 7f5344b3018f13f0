//! Gateway connection configuration.

use serde::{Deserialize, Serialize};

/// Gateway connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// WebSocket endpoint of the platform gateway bridge.
    #[serde(default = "default_url")]
    pub url: String,
    /// Seconds to wait before reconnecting after the feed closes.
    #[serde(default = "default_reconnect_delay")]
    pub reconnect_delay_seconds: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            reconnect_delay_seconds: default_reconnect_delay(),
        }
    }
}

fn default_url() -> String {
    "ws://127.0.0.1:3090/gateway".to_string()
}

fn default_reconnect_delay() -> u64 {
    5
}
