//! Typed events delivered by the gateway feed.
//!
//! The gateway adapter decodes raw platform frames into these payloads;
//! everything downstream of the adapter works in typed terms only.

pub mod message;
pub mod ready;
pub mod session;

pub use message::{MessageAttachment, MessageAuthor, MessageEvent};
pub use ready::{AccountUser, ReadyEvent};
pub use session::{ClientInfo, SessionDescriptor};

/// A gateway frame the agent reacts to, decoded into its typed payload.
///
/// Frames with event names outside this set never leave the adapter.
#[derive(Debug, Clone)]
pub enum GatewayEvent {
    /// The connection finished identifying. Carries the session id the
    /// platform assigned to this very connection and the account identity.
    Ready(ReadyEvent),
    /// Authoritative replacement snapshot of every session currently
    /// connected for the account.
    SessionsReplace(Vec<SessionDescriptor>),
    /// A chat message was created somewhere the account can see.
    MessageCreate(MessageEvent),
}
