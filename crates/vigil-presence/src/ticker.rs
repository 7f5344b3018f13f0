//! The fixed-interval reconciliation loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{self, Instant};
use tracing::{error, info};

use crate::reconciler::PresenceReconciler;

/// Drive the reconciler on a fixed cadence until shutdown.
///
/// Each pass is guarded: a failing tick is logged and the loop keeps
/// running, so transient apply failures retry on the next pass. The
/// first evaluation happens one full interval after start, giving the
/// initial session snapshot time to arrive.
pub async fn run_tick_loop(
    reconciler: Arc<PresenceReconciler>,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    info!(
        interval_seconds = interval.as_secs(),
        "Presence tick loop started"
    );
    let mut ticker = time::interval_at(Instant::now() + interval, interval);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Err(e) = reconciler.tick().await {
                    error!(error = %e, "Reconciliation tick failed");
                }
            }
            _ = shutdown.changed() => {
                if *shutdown.borrow() {
                    info!("Presence tick loop received shutdown signal");
                    break;
                }
            }
        }
    }
}
