//! Trait seams between the agent core and the platform connection.

pub mod gateway;

pub use gateway::{Messenger, PresenceChannel};
