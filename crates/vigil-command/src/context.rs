//! Shared handles available to every command handler.

use std::sync::Arc;

use vigil_presence::PresenceReconciler;
use vigil_store::PresetStore;

/// Services a command handler can reach.
pub struct CommandContext {
    pub reconciler: Arc<PresenceReconciler>,
    pub presets: Arc<PresetStore>,
    /// Client used to download preset documents attached to messages.
    pub http: reqwest::Client,
}

impl CommandContext {
    pub fn new(reconciler: Arc<PresenceReconciler>, presets: Arc<PresetStore>) -> Self {
        Self {
            reconciler,
            presets,
            http: reqwest::Client::new(),
        }
    }
}
