//! # vigil-command
//!
//! Self-command surface of the agent: parsing the account's own
//! prefixed messages, dispatching them to Rich Presence and offline
//! facade handlers, and replying in-channel.

pub mod context;
pub mod handlers;
pub mod parser;
pub mod router;

pub use context::CommandContext;
pub use parser::{parse, ParsedCommand};
pub use router::CommandRouter;
