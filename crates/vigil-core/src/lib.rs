//! # vigil-core
//!
//! Core crate for the Vigil presence agent. Contains traits, configuration
//! schemas, shared value types, typed gateway events, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other Vigil crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
