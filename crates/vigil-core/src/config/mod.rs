//! Agent configuration schemas.
//!
//! Two layers exist side by side. [`AgentConfig`] is the read-only
//! deployment configuration, deserialized from TOML files via the
//! `config` crate. [`settings::AgentSettings`] is the runtime-mutable
//! settings document the command layer rewrites through the settings
//! store. Each sub-module represents a logical configuration section.

pub mod gateway;
pub mod logging;
pub mod presence;
pub mod settings;
pub mod storage;

use serde::{Deserialize, Serialize};

use self::gateway::GatewayConfig;
use self::logging::LoggingConfig;
use self::presence::PresenceConfig;
use self::storage::StorageConfig;

pub use self::settings::{AgentSettings, OfflineSettings};

use crate::error::AppError;

/// Root deployment configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay). Every
/// section has defaults, so the agent starts with no files present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Gateway connection settings.
    #[serde(default)]
    pub gateway: GatewayConfig,
    /// Presence reconciliation settings.
    #[serde(default)]
    pub presence: PresenceConfig,
    /// Document storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AgentConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `VIGIL_`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("VIGIL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
