//! # vigil-store
//!
//! File-backed JSON document stores for Vigil: the preset directory, the
//! settings document, and the seen-session cache. Every store reads and
//! writes whole documents; there is no partial update.

pub mod preset;
pub mod session_cache;
pub mod settings;

pub use preset::PresetStore;
pub use session_cache::SessionCacheStore;
pub use settings::SettingsStore;
