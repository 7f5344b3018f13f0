//! Command handler implementations, grouped by concern.

pub mod offline;
pub mod rpc;
