//! Offline facade command handlers.

use vigil_core::types::PresenceStatus;
use vigil_core::AppResult;

use crate::context::CommandContext;

/// `offline [mode] [text]`: report the facade settings, or configure
/// them. Configuring leaves the enabled flag alone.
pub async fn configure(ctx: &CommandContext, args: &[String]) -> AppResult<String> {
    if args.is_empty() {
        let offline = ctx.reconciler.offline_status().await;
        let text = if offline.custom_status.is_empty() {
            "[none]".to_string()
        } else {
            offline.custom_status
        };
        return Ok(format!(
            "enabled: {}\nsettings: {} - \"{}\"\n\nusage: offline <mode> <status>\nmodes: dnd, idle, online",
            offline.enabled, offline.status, text
        ));
    }
    if args.len() < 2 {
        return Ok("usage: offline <mode> <status>\nmode: dnd, idle, online".to_string());
    }

    let status = match args[0].to_lowercase().as_str() {
        "dnd" => PresenceStatus::Dnd,
        "idle" => PresenceStatus::Idle,
        "online" => PresenceStatus::Online,
        _ => return Ok("invalid mode. use: dnd, idle, or online".to_string()),
    };
    let text = args[1..].join(" ");

    let offline = ctx.reconciler.configure_offline(status, text).await?;
    Ok(format!(
        "offline mode configured: {} - \"{}\"",
        offline.status, offline.custom_status
    ))
}

/// `offlinetoggle`: flip the facade flag.
pub async fn toggle(ctx: &CommandContext) -> AppResult<String> {
    Ok(if ctx.reconciler.toggle_offline().await? {
        "offline mode enabled".to_string()
    } else {
        "offline mode disabled".to_string()
    })
}
