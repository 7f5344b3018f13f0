//! # vigil-presence
//!
//! The presence engine: session snapshot filtering, preset resolution
//! into wire activities, the two-state reconciler that keeps displayed
//! presence converged with stored intent, and the interval loop driving
//! it.

pub mod activity;
pub mod reconciler;
pub mod ticker;
pub mod tracker;

pub use reconciler::{
    DeletePresetOutcome, PresenceReconciler, RpcStatus, SetPresetOutcome, ToggleRpcOutcome,
};
pub use ticker::run_tick_loop;
pub use tracker::SessionTracker;
