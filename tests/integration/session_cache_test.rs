//! Integration tests for the rolling seen-session cache.

use chrono::{Duration, Utc};

use vigil_core::types::SessionId;

use crate::helpers::{session, TestAgent, OWN_SESSION};

#[tokio::test]
async fn test_stale_own_session_does_not_wake_after_reconnect() {
    let agent = TestAgent::new().await;
    agent.ready().await;

    let agent = agent.restart().await;
    agent.ready_as("agent-session-2").await;

    // The platform still lists the previous connection; the cache keeps
    // it from counting as a foreign device.
    agent
        .sessions(&[
            session("agent-session-2", "desktop"),
            session(OWN_SESSION, "desktop"),
        ])
        .await;
    agent.tick().await;

    assert!(agent.reconciler.display_state().await.is_currently_offline);
}

#[tokio::test]
async fn test_cache_persists_across_restart() {
    let agent = TestAgent::new().await;
    agent
        .session_cache
        .register(&SessionId::new("old"))
        .await
        .expect("Failed to register session");

    let agent = agent.restart().await;

    assert!(agent.session_cache.contains(&SessionId::new("old")).await);
}

#[tokio::test]
async fn test_lapsed_window_resets_the_cache() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let stale = serde_json::json!({
        "lastUpdated": (Utc::now() - Duration::hours(25)).timestamp_millis(),
        "sessionIds": ["ancient"],
    });
    tokio::fs::write(dir.path().join("sessionCache.json"), stale.to_string())
        .await
        .expect("Failed to write cache document");

    let agent = TestAgent::over(dir).await;
    agent.ready().await;

    assert!(
        !agent
            .session_cache
            .contains(&SessionId::new("ancient"))
            .await
    );
    assert!(
        agent
            .session_cache
            .contains(&SessionId::new(OWN_SESSION))
            .await
    );
}
