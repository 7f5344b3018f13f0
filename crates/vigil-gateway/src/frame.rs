//! Raw gateway frame definitions and translation into typed events.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use vigil_core::events::{GatewayEvent, MessageEvent, ReadyEvent, SessionDescriptor};
use vigil_core::types::{Activity, PresenceStatus};

/// A raw frame received from the platform gateway.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundFrame {
    /// Dispatch event name; absent on protocol-level frames.
    #[serde(default)]
    pub t: Option<String>,
    /// Event payload.
    #[serde(default)]
    pub d: serde_json::Value,
}

/// Frames sent by the agent to the platform gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum OutboundFrame {
    /// Identify with the account token after connecting.
    Identify {
        /// Platform account token.
        token: String,
    },
    /// Replace the account's advertised activity; `null` clears it.
    SetActivity {
        /// The activity to show, or nothing.
        activity: Option<Activity>,
    },
    /// Replace the account's status and activity list.
    SetPresence {
        /// Status to show.
        status: PresenceStatus,
        /// Activities to show alongside the status.
        activities: Vec<Activity>,
    },
    /// Send a chat message.
    SendMessage {
        /// Target channel.
        channel_id: String,
        /// Message text.
        content: String,
    },
}

/// Translate a raw dispatch frame into a typed event.
///
/// Frames with unknown event names produce nothing. A frame whose
/// payload does not decode also produces nothing; for session snapshots
/// this means the previously accepted session set stays in force.
pub fn translate(frame: InboundFrame) -> Option<GatewayEvent> {
    let name = frame.t.as_deref()?;
    match name {
        "READY" => match serde_json::from_value::<ReadyEvent>(frame.d) {
            Ok(ready) => Some(GatewayEvent::Ready(ready)),
            Err(e) => {
                warn!(error = %e, "Undecodable READY payload");
                None
            }
        },
        "SESSIONS_REPLACE" => match serde_json::from_value::<Vec<SessionDescriptor>>(frame.d) {
            Ok(sessions) => Some(GatewayEvent::SessionsReplace(sessions)),
            Err(e) => {
                warn!(error = %e, "Undecodable session snapshot, keeping previous set");
                None
            }
        },
        "MESSAGE_CREATE" => match serde_json::from_value::<MessageEvent>(frame.d) {
            Ok(message) => Some(GatewayEvent::MessageCreate(message)),
            Err(e) => {
                debug!(error = %e, "Undecodable message payload");
                None
            }
        },
        other => {
            debug!(event = other, "Ignoring unhandled gateway event");
            None
        }
    }
}
