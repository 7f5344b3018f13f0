//! Rich Presence command handlers.

use tracing::debug;

use vigil_core::events::MessageEvent;
use vigil_core::{AppError, AppResult};
use vigil_entity::preset::Preset;
use vigil_presence::{DeletePresetOutcome, SetPresetOutcome, ToggleRpcOutcome};

use crate::context::CommandContext;

/// `rpc`: status overview.
pub async fn status(ctx: &CommandContext) -> AppResult<String> {
    let status = ctx.reconciler.rpc_status().await?;
    let enabled = if status.enabled { "enabled" } else { "disabled" };
    let active = status.active.unwrap_or_else(|| "nothing".to_string());
    let presets = if status.presets.is_empty() {
        "none".to_string()
    } else {
        status.presets.join(", ")
    };
    Ok(format!(
        "rpc status: {enabled}\nactive: {active}\npresets: {presets}"
    ))
}

/// `rpcset <name>`: select a preset and apply it.
pub async fn set(ctx: &CommandContext, args: &[String]) -> AppResult<String> {
    let name = args.join(" ");
    if name.is_empty() {
        return Ok("usage: rpcset <preset name>".to_string());
    }
    Ok(match ctx.reconciler.set_preset(&name).await? {
        SetPresetOutcome::Applied(name) => format!("rpc set to \"{name}\""),
        SetPresetOutcome::Deferred(name) => {
            format!("rpc set to \"{name}\" (applies on next online)")
        }
        SetPresetOutcome::NotFound(name) => format!("preset \"{name}\" not found"),
    })
}

/// `rpctoggle`: flip the Rich Presence flag.
pub async fn toggle(ctx: &CommandContext) -> AppResult<String> {
    Ok(match ctx.reconciler.toggle_rpc().await? {
        ToggleRpcOutcome::Enabled => "rpc enabled".to_string(),
        ToggleRpcOutcome::EnabledNoPreset => "no rpc preset configured".to_string(),
        ToggleRpcOutcome::Disabled => "rpc disabled".to_string(),
    })
}

/// `rpcadd <name> [json]`: store a preset from inline JSON or from the
/// first attachment on the message.
pub async fn add(
    ctx: &CommandContext,
    event: &MessageEvent,
    args: &[String],
) -> AppResult<String> {
    let Some(raw_name) = args.first() else {
        return Ok("usage: rpcadd <name> <json or attachment>".to_string());
    };

    let document = if let Some(attachment) = event.attachments.first() {
        fetch_attachment(ctx, &attachment.url).await?
    } else if args.len() > 1 {
        args[1..].join(" ")
    } else {
        return Ok("usage: rpcadd <name> <json or attachment>".to_string());
    };

    let mut preset: Preset = match serde_json::from_str(&document) {
        Ok(preset) => preset,
        Err(e) => {
            debug!(error = %e, "Rejected preset document");
            return Ok("invalid preset json".to_string());
        }
    };
    if preset.name.is_empty() {
        preset.name = raw_name.clone();
    }

    let storage_name = Preset::safe_name(raw_name);
    ctx.presets.save(&storage_name, &preset).await?;
    Ok(format!(
        "added preset \"{}\" as {storage_name}.json",
        preset.name
    ))
}

/// `rpcdelete <name>`: remove a stored preset.
pub async fn delete(ctx: &CommandContext, args: &[String]) -> AppResult<String> {
    let name = args.join(" ");
    if name.is_empty() {
        return Ok("usage: rpcdelete <preset name>".to_string());
    }
    Ok(match ctx.reconciler.delete_preset(&name).await? {
        DeletePresetOutcome::Deleted { name, .. } => {
            format!("preset \"{name}\" has been deleted")
        }
        DeletePresetOutcome::NotFound(name) => format!("preset \"{name}\" not found"),
    })
}

/// `rpcget <name>`: reply with the stored preset document.
pub async fn get(ctx: &CommandContext, args: &[String]) -> AppResult<String> {
    let name = args.join(" ");
    if name.is_empty() {
        return Ok("usage: rpcget <preset name>".to_string());
    }
    let Some(preset) = ctx.presets.load(&name).await? else {
        return Ok(format!("preset \"{name}\" not found"));
    };
    let document = serde_json::to_string_pretty(&preset)?;
    Ok(format!("\"{name}\" preset:\n{document}"))
}

async fn fetch_attachment(ctx: &CommandContext, url: &str) -> AppResult<String> {
    let response = ctx
        .http
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| AppError::external_service(format!("Attachment fetch failed: {e}")))?;
    response
        .text()
        .await
        .map_err(|e| AppError::external_service(format!("Attachment body unreadable: {e}")))
}
