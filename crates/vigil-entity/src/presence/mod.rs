//! Presence display-state entities.

pub mod model;

pub use model::DisplayState;
