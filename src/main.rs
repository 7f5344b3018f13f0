//! Vigil agent — personal presence reconciliation for a platform account.
//!
//! Main entry point that wires the stores, the gateway connection, the
//! presence engine, and the self-command router together.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing;
use tracing_subscriber::{EnvFilter, fmt};

use vigil_command::{CommandContext, CommandRouter};
use vigil_core::config::AgentConfig;
use vigil_core::error::AppError;
use vigil_core::events::GatewayEvent;
use vigil_gateway::WsGateway;
use vigil_presence::{run_tick_loop, PresenceReconciler, SessionTracker};
use vigil_store::{PresetStore, SessionCacheStore, SettingsStore};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Agent error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AgentConfig, AppError> {
    let env = std::env::var("VIGIL_ENV").unwrap_or_else(|_| "development".to_string());
    AgentConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AgentConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main agent run function
async fn run(config: AgentConfig) -> Result<(), AppError> {
    tracing::info!("Starting Vigil v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Document stores ──────────────────────────────────
    let settings = Arc::new(SettingsStore::load(config.storage.settings_path()).await?);
    let presets = Arc::new(PresetStore::new(config.storage.presets_path()).await?);
    let session_cache =
        Arc::new(SessionCacheStore::load(config.storage.session_cache_path()).await?);
    tracing::info!(data_dir = %config.storage.data_dir, "Document stores ready");

    let token = settings.read().await.token;
    if token.is_empty() {
        return Err(AppError::configuration(format!(
            "No account token in {}",
            config.storage.settings_path().display()
        )));
    }

    // ── Step 2: Shutdown plumbing ────────────────────────────────
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });

    let tick_interval = Duration::from_secs(config.presence.tick_interval_seconds);
    let reconnect_delay = Duration::from_secs(config.gateway.reconnect_delay_seconds);

    // ── Step 3: Connection loop ──────────────────────────────────
    // Presence and display state are per connection: the platform forgets
    // both when the socket drops, so each connect starts a fresh engine
    // over the long-lived stores.
    while !*shutdown_rx.borrow() {
        let (gateway, mut events) = match WsGateway::connect(&config.gateway.url, &token).await {
            Ok(connected) => connected,
            Err(e) => {
                tracing::warn!(error = %e, "Gateway connect failed");
                if wait_for_retry(reconnect_delay, &mut shutdown_rx).await {
                    break;
                }
                continue;
            }
        };

        // ── Step 4: Per-connection engine ────────────────────────
        let tracker = SessionTracker::new(Arc::clone(&session_cache));
        let reconciler = Arc::new(PresenceReconciler::new(
            Arc::clone(&settings),
            Arc::clone(&presets),
            gateway.clone(),
        ));
        let context = CommandContext::new(Arc::clone(&reconciler), Arc::clone(&presets));
        let router = CommandRouter::new(Arc::clone(&settings), context, gateway.clone());

        let (session_end_tx, session_end_rx) = watch::channel(false);
        let tick_handle = tokio::spawn(run_tick_loop(
            Arc::clone(&reconciler),
            tick_interval,
            session_end_rx,
        ));

        // ── Step 5: Event loop ───────────────────────────────────
        loop {
            tokio::select! {
                maybe_event = events.recv() => {
                    let Some(event) = maybe_event else {
                        tracing::info!("Gateway feed ended");
                        break;
                    };
                    handle_event(event, &tracker, &reconciler, &router, &session_cache).await;
                }
                _ = shutdown_rx.changed() => {
                    if *shutdown_rx.borrow() {
                        break;
                    }
                }
            }
        }

        let _ = session_end_tx.send(true);
        let _ = tick_handle.await;

        if *shutdown_rx.borrow() {
            break;
        }
        tracing::info!(
            delay_seconds = reconnect_delay.as_secs(),
            "Reconnecting to gateway"
        );
        if wait_for_retry(reconnect_delay, &mut shutdown_rx).await {
            break;
        }
    }

    tracing::info!("Vigil agent shut down gracefully");
    Ok(())
}

/// Dispatch one typed gateway event to the engine.
async fn handle_event(
    event: GatewayEvent,
    tracker: &SessionTracker,
    reconciler: &Arc<PresenceReconciler>,
    router: &CommandRouter,
    session_cache: &Arc<SessionCacheStore>,
) {
    match event {
        GatewayEvent::Ready(ready) => {
            tracing::info!(
                user = %ready.user.username,
                session_id = %ready.session_id,
                "Gateway ready"
            );
            tracker.set_own_session(ready.session_id.clone()).await;
            router.set_own_user(ready.user.id).await;
            if let Err(e) = session_cache.register(&ready.session_id).await {
                tracing::warn!(error = %e, "Failed to record own session id");
            }
            if let Err(e) = reconciler.restore_startup().await {
                tracing::warn!(error = %e, "Startup presence restore failed");
            }
        }
        GatewayEvent::SessionsReplace(descriptors) => {
            let foreign = tracker.ingest(&descriptors).await;
            reconciler.replace_sessions(foreign).await;
        }
        GatewayEvent::MessageCreate(message) => {
            router.handle_message(&message).await;
        }
    }
}

/// Sleep out the reconnect delay. Returns true when shutdown arrived.
async fn wait_for_retry(delay: Duration, shutdown_rx: &mut watch::Receiver<bool>) -> bool {
    tokio::select! {
        _ = tokio::time::sleep(delay) => false,
        _ = shutdown_rx.changed() => *shutdown_rx.borrow(),
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
