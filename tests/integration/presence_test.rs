//! Integration tests for the presence reconciliation cycle.

use vigil_core::types::{ActivityKind, PresenceStatus};
use vigil_entity::preset::Preset;
use vigil_gateway::PresenceCall;

use crate::helpers::{session, TestAgent, OWN_SESSION};

#[tokio::test]
async fn test_lone_account_is_suppressed_invisible() {
    let agent = TestAgent::new().await;
    agent.ready().await;

    agent.sessions(&[session(OWN_SESSION, "desktop")]).await;
    agent.tick().await;

    let calls = agent.presence_calls().await;
    assert_eq!(calls.len(), 1);
    assert!(matches!(
        &calls[0],
        PresenceCall::SetPresence { status: PresenceStatus::Invisible, activities }
            if activities.is_empty()
    ));
    let state = agent.reconciler.display_state().await;
    assert!(state.is_currently_offline);
    assert!(state.active_rpc.is_none());
}

#[tokio::test]
async fn test_offline_facade_shows_configured_status() {
    let agent = TestAgent::new().await;
    agent.ready().await;
    agent.command(".offline dnd gone fishing").await;
    agent.command(".offlinetoggle").await;
    agent.gateway.clear().await;

    agent.sessions(&[session(OWN_SESSION, "desktop")]).await;
    agent.tick().await;

    let calls = agent.presence_calls().await;
    assert_eq!(calls.len(), 1);
    match &calls[0] {
        PresenceCall::SetPresence { status, activities } => {
            assert_eq!(*status, PresenceStatus::Dnd);
            assert_eq!(activities.len(), 1);
            assert_eq!(activities[0].name, "gone fishing");
            assert_eq!(activities[0].kind, ActivityKind::Custom);
        }
        other => panic!("unexpected call: {other:?}"),
    }
}

#[tokio::test]
async fn test_foreign_session_restores_rich_presence() {
    let agent = TestAgent::new().await;
    agent.ready().await;
    agent
        .presets
        .save(
            "coding",
            &Preset {
                name: "Coding".to_string(),
                ..Preset::default()
            },
        )
        .await
        .expect("Failed to save preset");
    agent
        .settings
        .update(|s| {
            s.rpc_enabled = true;
            s.current_rpc = Some("coding".to_string());
        })
        .await
        .expect("Failed to update settings");

    agent.sessions(&[session(OWN_SESSION, "desktop")]).await;
    agent.tick().await;
    agent.gateway.clear().await;

    agent
        .sessions(&[session(OWN_SESSION, "desktop"), session("phone", "mobile")])
        .await;
    agent.tick().await;

    let calls = agent.presence_calls().await;
    assert_eq!(calls.len(), 1);
    match &calls[0] {
        PresenceCall::SetActivity(Some(activity)) => assert_eq!(activity.name, "Coding"),
        other => panic!("unexpected call: {other:?}"),
    }
    assert!(!agent.reconciler.display_state().await.is_currently_offline);
}

#[tokio::test]
async fn test_unclassified_clients_do_not_wake_the_account() {
    let agent = TestAgent::new().await;
    agent.ready().await;
    agent.sessions(&[session(OWN_SESSION, "desktop")]).await;
    agent.tick().await;
    agent.gateway.clear().await;

    agent
        .sessions(&[session(OWN_SESSION, "desktop"), session("mystery", "unknown")])
        .await;
    agent.tick().await;
    assert!(agent.presence_calls().await.is_empty());
    assert!(agent.reconciler.display_state().await.is_currently_offline);

    // A session with no client details at all does count.
    let mut anonymous = session("anon", "desktop");
    anonymous.client_info = None;
    agent.sessions(&[anonymous]).await;
    agent.tick().await;
    assert!(!agent.reconciler.display_state().await.is_currently_offline);
}

#[tokio::test]
async fn test_disabling_facade_restores_despite_being_alone() {
    let agent = TestAgent::new().await;
    agent.ready().await;
    agent.command(".offline idle brb").await;
    agent.command(".offlinetoggle").await;
    agent.sessions(&[session(OWN_SESSION, "desktop")]).await;
    agent.tick().await;
    agent.gateway.clear().await;

    agent.command(".offlinetoggle").await;

    assert_eq!(
        agent.last_reply().await.as_deref(),
        Some("offline mode disabled")
    );
    let calls = agent.presence_calls().await;
    assert!(matches!(
        calls.last(),
        Some(PresenceCall::SetPresence {
            status: PresenceStatus::Online,
            ..
        })
    ));
    assert!(!agent.reconciler.display_state().await.is_currently_offline);
}
