//! Preset document model.

use serde::{Deserialize, Serialize};

use vigil_core::types::ActivityKind;

/// A button on a Rich Presence card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetButton {
    /// Label shown on the button.
    pub label: String,
    /// URL the button opens.
    pub url: String,
}

/// A start or end marker stored in a preset document.
///
/// Numbers are epoch milliseconds and pass through unchanged. The literal
/// string `"now"` resolves to the moment the preset is applied; other
/// strings resolve only if they parse as milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimestampSpec {
    /// Epoch milliseconds.
    Millis(i64),
    /// A textual marker, normally `"now"`.
    Literal(String),
}

impl TimestampSpec {
    /// Resolve to epoch milliseconds against the given apply-time clock.
    pub fn resolve(&self, now_ms: i64) -> Option<i64> {
        match self {
            Self::Millis(ms) => Some(*ms),
            Self::Literal(text) if text == "now" => Some(now_ms),
            Self::Literal(text) => text.trim().parse().ok(),
        }
    }
}

/// Timestamp block of a preset document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PresetTimestamps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<TimestampSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
}

/// Asset block of a preset document. Values are stored as written;
/// trimming and the image/text pairing rules apply when the preset is
/// turned into a wire activity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PresetAssets {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small_text: Option<String>,
}

/// A stored Rich Presence preset.
///
/// Presets are JSON documents edited by hand or uploaded through the
/// `rpcadd` command. Absent fields fall back to serde defaults so sparse
/// documents stay valid; a document that fails to decode is treated as
/// absent by the store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Preset {
    /// Display name of the activity.
    #[serde(default)]
    pub name: String,
    /// Activity category; sparse documents omit it.
    #[serde(rename = "type", default)]
    pub kind: ActivityKind,
    /// First detail line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Second detail line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamps: Option<PresetTimestamps>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<PresetAssets>,
    /// Card buttons, at most two rendered by the platform.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<PresetButton>,
}

impl Preset {
    /// Derive the filesystem-safe storage name for a raw preset name:
    /// lowercased, with every character outside `[a-z0-9_-]` replaced
    /// by an underscore.
    pub fn safe_name(raw: &str) -> String {
        raw.to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }
}
