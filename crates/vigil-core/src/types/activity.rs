//! The wire-level activity descriptor sent to the platform.
//!
//! An [`Activity`] is the fully resolved form of a stored Rich Presence
//! preset: literal timestamps are computed, empty asset fields are dropped,
//! and button labels are split from their URLs the way the platform
//! expects them.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// The numeric activity category understood by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ActivityKind {
    /// "Playing ..." (type 0).
    Playing,
    /// "Streaming ..." (type 1).
    Streaming,
    /// "Listening to ..." (type 2).
    Listening,
    /// "Watching ..." (type 3).
    Watching,
    /// Custom status text (type 4).
    Custom,
    /// "Competing in ..." (type 5).
    Competing,
}

impl Default for ActivityKind {
    fn default() -> Self {
        Self::Playing
    }
}

impl From<ActivityKind> for u8 {
    fn from(kind: ActivityKind) -> Self {
        match kind {
            ActivityKind::Playing => 0,
            ActivityKind::Streaming => 1,
            ActivityKind::Listening => 2,
            ActivityKind::Watching => 3,
            ActivityKind::Custom => 4,
            ActivityKind::Competing => 5,
        }
    }
}

impl TryFrom<u8> for ActivityKind {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Playing),
            1 => Ok(Self::Streaming),
            2 => Ok(Self::Listening),
            3 => Ok(Self::Watching),
            4 => Ok(Self::Custom),
            5 => Ok(Self::Competing),
            other => Err(AppError::validation(format!(
                "Invalid activity kind: {other}"
            ))),
        }
    }
}

/// Millisecond start/end markers for an elapsed or countdown display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActivityTimestamps {
    /// Epoch milliseconds the activity started at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    /// Epoch milliseconds the activity ends at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
}

/// Large/small image keys and their hover texts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActivityAssets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_text: Option<String>,
}

impl ActivityAssets {
    /// Whether any field carries a value.
    pub fn is_empty(&self) -> bool {
        self.large_image.is_none()
            && self.large_text.is_none()
            && self.small_image.is_none()
            && self.small_text.is_none()
    }
}

/// Side-channel data accompanying an activity. Button URLs travel here,
/// parallel to the label list in [`Activity::buttons`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActivityMetadata {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub button_urls: Vec<String>,
}

/// A fully resolved activity ready to be sent over the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Display name of the activity.
    pub name: String,
    /// Activity category.
    #[serde(rename = "type", default)]
    pub kind: ActivityKind,
    /// First detail line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Second detail line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamps: Option<ActivityTimestamps>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets: Option<ActivityAssets>,
    /// Button labels, in display order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ActivityMetadata>,
}

impl Activity {
    /// A bare activity with only a name and kind.
    pub fn new(name: impl Into<String>, kind: ActivityKind) -> Self {
        Self {
            name: name.into(),
            kind,
            details: None,
            state: None,
            timestamps: None,
            assets: None,
            buttons: None,
            metadata: None,
        }
    }

    /// The custom-status activity the platform renders as plain text.
    pub fn custom_status(text: impl Into<String>) -> Self {
        Self::new(text, ActivityKind::Custom)
    }
}
