//! Outbound operations on the platform connection.
//!
//! The reconciler and command layer depend on these seams only; the
//! gateway crate provides the wire implementation and an in-memory twin
//! for tests.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{Activity, PresenceStatus};

/// Outbound presence operations.
///
/// Implementations must apply calls in the order received. The reconciler
/// serializes its transitions and relies on that ordering.
#[async_trait]
pub trait PresenceChannel: Send + Sync {
    /// Replace the account's advertised activity. `None` clears it.
    async fn set_activity(&self, activity: Option<Activity>) -> AppResult<()>;

    /// Replace the account's status and activity list in one call.
    async fn set_presence(
        &self,
        status: PresenceStatus,
        activities: Vec<Activity>,
    ) -> AppResult<()>;
}

/// Outbound chat messages, used for command replies.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Send `content` as a message to the given channel.
    async fn send_message(&self, channel_id: &str, content: &str) -> AppResult<()>;
}
