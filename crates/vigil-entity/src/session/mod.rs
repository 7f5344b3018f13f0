//! Session entities: foreign sessions and the seen-session cache.

pub mod cache;
pub mod model;

pub use cache::SeenSessionCache;
pub use model::ForeignSession;
