//! # vigil-entity
//!
//! Domain entity models for Vigil. Every struct in this crate represents
//! either a stored JSON document or an in-memory domain value object.
//! All entities derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod presence;
pub mod preset;
pub mod session;
