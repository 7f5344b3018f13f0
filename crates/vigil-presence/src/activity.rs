//! Resolution of stored presets into wire activities.

use chrono::Utc;

use vigil_core::types::{Activity, ActivityAssets, ActivityMetadata, ActivityTimestamps};
use vigil_entity::preset::Preset;

/// Millisecond clock used when a preset asks for an apply-time start.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Resolve one preset into the activity payload to put on the wire.
///
/// The preset is read, never modified: `"now"` markers resolve against
/// the given clock, asset values are trimmed with hover texts kept only
/// alongside their image, and buttons split into a label list plus the
/// URL side-channel.
pub fn build_activity(preset: &Preset, now_ms: i64) -> Activity {
    let (buttons, metadata) = resolve_buttons(preset);
    Activity {
        name: preset.name.clone(),
        kind: preset.kind,
        details: preset.details.clone(),
        state: preset.state.clone(),
        timestamps: resolve_timestamps(preset, now_ms),
        assets: resolve_assets(preset),
        buttons,
        metadata,
    }
}

/// The timestamp block ships only when start or end actually resolves.
fn resolve_timestamps(preset: &Preset, now_ms: i64) -> Option<ActivityTimestamps> {
    let stored = preset.timestamps.as_ref()?;
    let start = stored.start.as_ref().and_then(|spec| spec.resolve(now_ms));
    let end = stored.end;
    if start.is_none() && end.is_none() {
        return None;
    }
    Some(ActivityTimestamps { start, end })
}

/// Assets ship only when at least one image key survives trimming, and a
/// hover text ships only next to its image.
fn resolve_assets(preset: &Preset) -> Option<ActivityAssets> {
    let stored = preset.assets.as_ref()?;
    let large_image = trimmed(&stored.large_image);
    let small_image = trimmed(&stored.small_image);
    if large_image.is_none() && small_image.is_none() {
        return None;
    }
    Some(ActivityAssets {
        large_text: large_image.as_ref().and(trimmed(&stored.large_text)),
        small_text: small_image.as_ref().and(trimmed(&stored.small_text)),
        large_image,
        small_image,
    })
}

fn resolve_buttons(preset: &Preset) -> (Option<Vec<String>>, Option<ActivityMetadata>) {
    if preset.buttons.is_empty() {
        return (None, None);
    }
    let labels = preset.buttons.iter().map(|b| b.label.clone()).collect();
    let urls = preset.buttons.iter().map(|b| b.url.clone()).collect();
    (Some(labels), Some(ActivityMetadata { button_urls: urls }))
}

fn trimmed(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
