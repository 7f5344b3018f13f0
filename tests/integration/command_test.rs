//! Integration tests for the self-command surface.

use vigil_gateway::PresenceCall;

use crate::helpers::{session, TestAgent, OWN_SESSION};

#[tokio::test]
async fn test_rpcset_unknown_preset_leaves_intent_untouched() {
    let agent = TestAgent::new().await;
    agent.ready().await;

    agent.command(".rpcset ghost").await;

    assert_eq!(
        agent.last_reply().await.as_deref(),
        Some("preset \"ghost\" not found")
    );
    let settings = agent.settings.read().await;
    assert!(!settings.rpc_enabled);
    assert!(settings.current_rpc.is_none());
    assert!(agent.presence_calls().await.is_empty());
}

#[tokio::test]
async fn test_preset_lifecycle_through_commands() {
    let agent = TestAgent::new().await;
    agent.ready().await;

    agent
        .command(r#".rpcadd Focus {"name":"Focus","details":"heads down"}"#)
        .await;
    assert_eq!(
        agent.last_reply().await.as_deref(),
        Some("added preset \"Focus\" as focus.json")
    );

    agent.command(".rpcset focus").await;
    assert_eq!(
        agent.last_reply().await.as_deref(),
        Some("rpc set to \"focus\"")
    );

    agent.command(".rpc").await;
    assert_eq!(
        agent.last_reply().await.as_deref(),
        Some("rpc status: enabled\nactive: Focus\npresets: focus")
    );

    agent.command(".rpcdelete focus").await;
    assert_eq!(
        agent.last_reply().await.as_deref(),
        Some("preset \"focus\" has been deleted")
    );
    assert!(agent
        .presets
        .load("focus")
        .await
        .expect("Failed to load preset")
        .is_none());
}

#[tokio::test]
async fn test_full_preset_resolves_onto_the_wire() {
    let agent = TestAgent::new().await;
    agent.ready().await;

    let document = concat!(
        r#"{"name":"Deep Work","type":0,"details":"no meetings","state":"flow","#,
        r#""timestamps":{"start":"now"},"#,
        r#""assets":{"large_image":" lamp ","large_text":" warm light "},"#,
        r#""buttons":[{"label":"Site","url":"https://example.com"}]}"#
    );
    agent.command(&format!(".rpcadd deepwork {document}")).await;
    agent.command(".rpcset deepwork").await;

    let calls = agent.presence_calls().await;
    let activity = match calls.last() {
        Some(PresenceCall::SetActivity(Some(activity))) => activity.clone(),
        other => panic!("unexpected call: {other:?}"),
    };
    assert_eq!(activity.name, "Deep Work");
    assert_eq!(activity.details.as_deref(), Some("no meetings"));
    assert_eq!(activity.state.as_deref(), Some("flow"));
    assert!(activity.timestamps.expect("timestamps missing").start.is_some());
    let assets = activity.assets.expect("assets missing");
    assert_eq!(assets.large_image.as_deref(), Some("lamp"));
    assert_eq!(assets.large_text.as_deref(), Some("warm light"));
    assert_eq!(activity.buttons.expect("buttons missing"), vec!["Site"]);
    assert_eq!(
        activity.metadata.expect("metadata missing").button_urls,
        vec!["https://example.com"]
    );
}

#[tokio::test]
async fn test_rpcset_while_suppressed_defers_until_online() {
    let agent = TestAgent::new().await;
    agent.ready().await;
    agent
        .command(r#".rpcadd Focus {"name":"Focus"}"#)
        .await;
    agent.sessions(&[session(OWN_SESSION, "desktop")]).await;
    agent.tick().await;
    agent.gateway.clear().await;

    agent.command(".rpcset focus").await;

    assert_eq!(
        agent.last_reply().await.as_deref(),
        Some("rpc set to \"focus\" (applies on next online)")
    );
    assert!(agent.presence_calls().await.is_empty());

    agent
        .sessions(&[session(OWN_SESSION, "desktop"), session("phone", "mobile")])
        .await;
    agent.tick().await;
    assert!(matches!(
        agent.presence_calls().await.last(),
        Some(PresenceCall::SetActivity(Some(_)))
    ));
}
