//! Presence status values understood by the platform.

use serde::{Deserialize, Serialize};

/// Presence status for the account as shown to other users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceStatus {
    /// The account appears online.
    Online,
    /// The account appears idle.
    Idle,
    /// The account shows Do Not Disturb.
    Dnd,
    /// The account appears offline to everyone else.
    Invisible,
}

impl PresenceStatus {
    /// Check whether other users can see the account under this status.
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Invisible)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Idle => "idle",
            Self::Dnd => "dnd",
            Self::Invisible => "invisible",
        }
    }
}

impl std::fmt::Display for PresenceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PresenceStatus {
    type Err = crate::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "online" => Ok(Self::Online),
            "idle" => Ok(Self::Idle),
            "dnd" => Ok(Self::Dnd),
            "invisible" => Ok(Self::Invisible),
            _ => Err(crate::AppError::validation(format!(
                "Invalid presence status: '{s}'"
            ))),
        }
    }
}
