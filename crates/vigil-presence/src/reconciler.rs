//! The two-state presence reconciler.
//!
//! The reconciler owns the account's [`DisplayState`] and converges it
//! with the persisted intent in the settings document. It knows exactly
//! two states: the account is visibly online, or it sits behind the
//! offline facade because no other device holds a session.
//!
//! Every transition talks to the wire first and commits its flags only
//! after the calls succeed, so a failed apply is retried by the next
//! tick from the last known-good state.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};

use vigil_core::config::{AgentSettings, OfflineSettings};
use vigil_core::traits::PresenceChannel;
use vigil_core::types::{Activity, PresenceStatus};
use vigil_core::AppResult;
use vigil_entity::presence::DisplayState;
use vigil_entity::preset::Preset;
use vigil_entity::session::ForeignSession;
use vigil_store::{PresetStore, SettingsStore};

use crate::activity::{build_activity, now_ms};

/// Outcome of selecting a preset with `rpcset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetPresetOutcome {
    /// Preset applied to the live presence.
    Applied(String),
    /// Preset stored; the account is suppressed, so it shows on the next
    /// online transition.
    Deferred(String),
    /// No preset document under that name.
    NotFound(String),
}

/// Outcome of flipping the Rich Presence flag with `rpctoggle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleRpcOutcome {
    Enabled,
    /// Flag turned on, but no preset is remembered or stored.
    EnabledNoPreset,
    Disabled,
}

/// Outcome of `rpcdelete`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletePresetOutcome {
    Deleted {
        name: String,
        /// Whether the deleted preset was the one being displayed.
        was_active: bool,
    },
    NotFound(String),
}

/// Snapshot answered to the `rpc` status query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcStatus {
    pub enabled: bool,
    /// Display name of the preset currently applied, if any.
    pub active: Option<String>,
    /// Stored preset selection.
    pub configured: Option<String>,
    /// Names of every stored preset.
    pub presets: Vec<String>,
}

/// Converges the displayed presence with the persisted intent.
pub struct PresenceReconciler {
    settings: Arc<SettingsStore>,
    presets: Arc<PresetStore>,
    channel: Arc<dyn PresenceChannel>,
    state: Mutex<DisplayState>,
}

impl PresenceReconciler {
    pub fn new(
        settings: Arc<SettingsStore>,
        presets: Arc<PresetStore>,
        channel: Arc<dyn PresenceChannel>,
    ) -> Self {
        Self {
            settings,
            presets,
            channel,
            state: Mutex::new(DisplayState::default()),
        }
    }

    /// Replace the tracked foreign-session set with a fresh snapshot.
    pub async fn replace_sessions(&self, sessions: Vec<ForeignSession>) {
        let mut state = self.state.lock().await;
        state.current_sessions = sessions;
    }

    /// Snapshot the current display state.
    pub async fn display_state(&self) -> DisplayState {
        self.state.lock().await.clone()
    }

    /// Run one reconciliation pass.
    ///
    /// Compares the foreign-session count against the suppression flag
    /// and performs at most one transition. When displayed state already
    /// matches, this is a no-op and nothing touches the wire.
    pub async fn tick(&self) -> AppResult<()> {
        let mut state = self.state.lock().await;
        let settings = self.settings.read().await;

        if !state.has_foreign_sessions() && !state.is_currently_offline {
            self.enter_suppressed(&settings.offline).await?;
            state.active_rpc = None;
            state.is_currently_offline = true;
            info!(
                facade = settings.offline.enabled,
                "No foreign sessions, presence suppressed"
            );
            return Ok(());
        }

        if state.has_foreign_sessions() && state.is_currently_offline {
            let applied = self.enter_online(&settings).await?;
            state.active_rpc = applied;
            state.is_currently_offline = false;
            info!("Foreign session active, presence restored");
        }

        Ok(())
    }

    /// Put the account behind the offline facade.
    async fn enter_suppressed(&self, offline: &OfflineSettings) -> AppResult<()> {
        if offline.enabled {
            let facade = Activity::custom_status(offline.custom_status.clone());
            self.channel
                .set_presence(offline.status, vec![facade])
                .await
        } else {
            self.channel
                .set_presence(PresenceStatus::Invisible, Vec::new())
                .await
        }
    }

    /// Bring the account back online, restoring the stored preset when
    /// the intent asks for one. Returns whatever ended up applied.
    async fn enter_online(&self, settings: &AgentSettings) -> AppResult<Option<Preset>> {
        if settings.rpc_enabled {
            if let Some(name) = &settings.current_rpc {
                if let Some(preset) = self.presets.load(name).await? {
                    self.apply_preset(&preset).await?;
                    return Ok(Some(preset));
                }
                warn!(preset = %name, "Stored preset missing, restoring plain online");
            }
        }

        self.channel.set_activity(None).await?;
        self.channel
            .set_presence(PresenceStatus::Online, Vec::new())
            .await?;
        Ok(None)
    }

    /// Resolve one preset and send it as the live activity.
    async fn apply_preset(&self, preset: &Preset) -> AppResult<()> {
        let activity = build_activity(preset, now_ms());
        self.channel.set_activity(Some(activity)).await
    }

    /// Select a preset by name, persist the intent, and apply it unless
    /// the account is currently suppressed.
    ///
    /// An unknown name leaves the stored intent untouched.
    pub async fn set_preset(&self, name: &str) -> AppResult<SetPresetOutcome> {
        let mut state = self.state.lock().await;

        let Some(preset) = self.presets.load(name).await? else {
            return Ok(SetPresetOutcome::NotFound(name.to_string()));
        };

        self.settings
            .update(|s| {
                s.rpc_enabled = true;
                s.current_rpc = Some(name.to_string());
            })
            .await?;

        if state.is_currently_offline {
            info!(preset = %name, "Preset stored, applying on next online transition");
            return Ok(SetPresetOutcome::Deferred(name.to_string()));
        }

        self.apply_preset(&preset).await?;
        state.active_rpc = Some(preset);
        info!(preset = %name, "Preset applied");
        Ok(SetPresetOutcome::Applied(name.to_string()))
    }

    /// Flip the Rich Presence flag, then reconcile the live activity
    /// with the new intent where the online branch allows it.
    pub async fn toggle_rpc(&self) -> AppResult<ToggleRpcOutcome> {
        let mut state = self.state.lock().await;
        let enabling = !self.settings.read().await.rpc_enabled;
        let updated = self.settings.update(|s| s.rpc_enabled = enabling).await?;

        if !enabling {
            if !state.is_currently_offline {
                self.channel.set_activity(None).await?;
            }
            state.active_rpc = None;
            info!("Rich Presence disabled");
            return Ok(ToggleRpcOutcome::Disabled);
        }

        let preset = match state.active_rpc.clone() {
            Some(preset) => Some(preset),
            None => match &updated.current_rpc {
                Some(name) => self.presets.load(name).await?,
                None => None,
            },
        };
        let Some(preset) = preset else {
            return Ok(ToggleRpcOutcome::EnabledNoPreset);
        };

        if state.is_currently_offline {
            // Suppressed: the flag is on, the activity shows on the next
            // online transition.
            return Ok(ToggleRpcOutcome::Enabled);
        }

        self.apply_preset(&preset).await?;
        state.active_rpc = Some(preset);
        info!("Rich Presence enabled");
        Ok(ToggleRpcOutcome::Enabled)
    }

    /// Store the offline facade's status and custom text. Does not touch
    /// the enabled flag or the live presence.
    pub async fn configure_offline(
        &self,
        status: PresenceStatus,
        text: String,
    ) -> AppResult<OfflineSettings> {
        let updated = self
            .settings
            .update(|s| {
                s.offline.status = status;
                s.offline.custom_status = text;
            })
            .await?;
        Ok(updated.offline)
    }

    /// Flip the offline facade flag.
    ///
    /// Turning the facade off while suppressed leaves it immediately,
    /// session count notwithstanding; the next tick re-suppresses if the
    /// account is still alone.
    pub async fn toggle_offline(&self) -> AppResult<bool> {
        let mut state = self.state.lock().await;
        let enabling = !self.settings.read().await.offline.enabled;
        let updated = self.settings.update(|s| s.offline.enabled = enabling).await?;

        if !enabling && state.is_currently_offline {
            let applied = self.enter_online(&updated).await?;
            state.active_rpc = applied;
            state.is_currently_offline = false;
            info!("Offline facade disabled, presence restored");
        }

        Ok(enabling)
    }

    /// Reapply the stored selection after a (re)connect.
    ///
    /// A stored name whose document disappeared is rolled back: the
    /// selection is cleared and the flag turned off, so later transitions
    /// stop chasing it. While suppressed, the facade is re-issued instead
    /// because the platform forgets presence across connections.
    pub async fn restore_startup(&self) -> AppResult<()> {
        let mut state = self.state.lock().await;
        let settings = self.settings.read().await;

        if state.is_currently_offline {
            self.enter_suppressed(&settings.offline).await?;
            return Ok(());
        }

        if !settings.rpc_enabled {
            return Ok(());
        }
        let Some(name) = settings.current_rpc.clone() else {
            return Ok(());
        };

        match self.presets.load(&name).await? {
            Some(preset) => {
                self.apply_preset(&preset).await?;
                state.active_rpc = Some(preset);
                info!(preset = %name, "Restored Rich Presence");
            }
            None => {
                self.settings
                    .update(|s| {
                        s.current_rpc = None;
                        s.rpc_enabled = false;
                    })
                    .await?;
                warn!(preset = %name, "Stored preset missing, intent cleared");
            }
        }
        Ok(())
    }

    /// Answer the `rpc` status query.
    pub async fn rpc_status(&self) -> AppResult<RpcStatus> {
        let state = self.state.lock().await;
        let settings = self.settings.read().await;
        let presets = self.presets.list().await?;

        let active = state.active_rpc.as_ref().map(|preset| {
            if preset.name.is_empty() {
                settings.current_rpc.clone().unwrap_or_default()
            } else {
                preset.name.clone()
            }
        });

        Ok(RpcStatus {
            enabled: settings.rpc_enabled,
            active,
            configured: settings.current_rpc.clone(),
            presets,
        })
    }

    /// Answer the `offline` status query.
    pub async fn offline_status(&self) -> OfflineSettings {
        self.settings.read().await.offline
    }

    /// Delete a preset by name. The on-disk lookup is exact; only the
    /// "is this the displayed preset" comparison is case-insensitive.
    ///
    /// Deleting the displayed preset clears the live activity and
    /// `active_rpc`; the stored selection is left alone and falls back
    /// gracefully on the next online transition.
    pub async fn delete_preset(&self, name: &str) -> AppResult<DeletePresetOutcome> {
        let mut state = self.state.lock().await;

        if !self.presets.delete(name).await? {
            return Ok(DeletePresetOutcome::NotFound(name.to_string()));
        }

        let was_active = state
            .active_rpc
            .as_ref()
            .is_some_and(|p| p.name.to_lowercase() == name.to_lowercase());

        if was_active {
            if !state.is_currently_offline {
                self.channel.set_activity(None).await?;
            }
            state.active_rpc = None;
        }

        info!(preset = %name, was_active, "Preset deleted");
        Ok(DeletePresetOutcome::Deleted {
            name: name.to_string(),
            was_active,
        })
    }
}
