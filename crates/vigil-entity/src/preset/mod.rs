//! Rich Presence preset entities.

pub mod model;

pub use model::{Preset, PresetAssets, PresetButton, PresetTimestamps, TimestampSpec};
