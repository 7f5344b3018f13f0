//! Shared value types used across the agent.

pub mod activity;
pub mod presence;
pub mod session;

pub use activity::{Activity, ActivityAssets, ActivityKind, ActivityMetadata, ActivityTimestamps};
pub use presence::PresenceStatus;
pub use session::SessionId;
