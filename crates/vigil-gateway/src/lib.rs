//! # vigil-gateway
//!
//! The platform connection: WebSocket transport, translation of raw
//! frames into typed [`vigil_core::events::GatewayEvent`]s, and the wire
//! implementations of the outbound channel traits. An in-memory twin of
//! the connection backs the test suites of the crates above this one.

pub mod frame;
pub mod memory;
pub mod ws;

pub use frame::{translate, InboundFrame, OutboundFrame};
pub use memory::{MemoryGateway, PresenceCall, SentMessage};
pub use ws::WsGateway;
