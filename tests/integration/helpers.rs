//! Shared test helpers for integration tests.

use std::sync::Arc;

use vigil_command::{CommandContext, CommandRouter};
use vigil_core::events::{ClientInfo, MessageAuthor, MessageEvent, SessionDescriptor};
use vigil_core::types::SessionId;
use vigil_gateway::{MemoryGateway, PresenceCall};
use vigil_presence::{PresenceReconciler, SessionTracker};
use vigil_store::{PresetStore, SessionCacheStore, SettingsStore};

/// User id of the signed-in account.
pub const OWN_USER: &str = "100";
/// Session id of the agent's own gateway connection.
pub const OWN_SESSION: &str = "agent-session";

/// A fully wired agent over a temp data directory and a recording
/// gateway, driven the way the real event loop drives it.
pub struct TestAgent {
    pub dir: tempfile::TempDir,
    pub settings: Arc<SettingsStore>,
    pub presets: Arc<PresetStore>,
    pub session_cache: Arc<SessionCacheStore>,
    pub gateway: Arc<MemoryGateway>,
    pub tracker: SessionTracker,
    pub reconciler: Arc<PresenceReconciler>,
    pub router: CommandRouter,
}

impl TestAgent {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        Self::over(dir).await
    }

    /// Wire a fresh engine over an existing data directory, the way a
    /// process restart or gateway reconnect does.
    pub async fn over(dir: tempfile::TempDir) -> Self {
        let settings = Arc::new(
            SettingsStore::load(dir.path().join("config.json"))
                .await
                .expect("Failed to load settings store"),
        );
        let presets = Arc::new(
            PresetStore::new(dir.path().join("rpc"))
                .await
                .expect("Failed to open preset store"),
        );
        let session_cache = Arc::new(
            SessionCacheStore::load(dir.path().join("sessionCache.json"))
                .await
                .expect("Failed to load session cache"),
        );
        let gateway = Arc::new(MemoryGateway::new());
        let tracker = SessionTracker::new(Arc::clone(&session_cache));
        let reconciler = Arc::new(PresenceReconciler::new(
            Arc::clone(&settings),
            Arc::clone(&presets),
            gateway.clone(),
        ));
        let context = CommandContext::new(Arc::clone(&reconciler), Arc::clone(&presets));
        let router = CommandRouter::new(Arc::clone(&settings), context, gateway.clone());

        Self {
            dir,
            settings,
            presets,
            session_cache,
            gateway,
            tracker,
            reconciler,
            router,
        }
    }

    /// Tear the engine down and wire a new one over the same directory.
    pub async fn restart(self) -> Self {
        let TestAgent { dir, .. } = self;
        Self::over(dir).await
    }

    /// Run the ready sequence the event loop performs on connect.
    pub async fn ready(&self) {
        self.ready_as(OWN_SESSION).await;
    }

    /// Ready sequence with an explicit own session id, as a reconnect
    /// under a new platform-assigned id.
    pub async fn ready_as(&self, session_id: &str) {
        let id = SessionId::new(session_id);
        self.tracker.set_own_session(id.clone()).await;
        self.router.set_own_user(OWN_USER).await;
        self.session_cache
            .register(&id)
            .await
            .expect("Failed to record own session");
        self.reconciler
            .restore_startup()
            .await
            .expect("Startup restore failed");
    }

    /// Feed one sessions snapshot through the filter into the reconciler.
    pub async fn sessions(&self, descriptors: &[SessionDescriptor]) {
        let foreign = self.tracker.ingest(descriptors).await;
        self.reconciler.replace_sessions(foreign).await;
    }

    pub async fn tick(&self) {
        self.reconciler.tick().await.expect("Tick failed");
    }

    /// Route one of the account's own messages.
    pub async fn command(&self, content: &str) {
        self.router.handle_message(&own_message(content)).await;
    }

    pub async fn last_reply(&self) -> Option<String> {
        self.gateway
            .sent_messages()
            .await
            .last()
            .map(|m| m.content.clone())
    }

    pub async fn presence_calls(&self) -> Vec<PresenceCall> {
        self.gateway.presence_calls().await
    }
}

/// A message written by the signed-in account itself.
pub fn own_message(content: &str) -> MessageEvent {
    MessageEvent {
        id: "1".to_string(),
        channel_id: "chan".to_string(),
        author: MessageAuthor {
            id: OWN_USER.to_string(),
            username: "self".to_string(),
        },
        content: content.to_string(),
        attachments: Vec::new(),
    }
}

/// A session descriptor as the platform reports it.
pub fn session(id: &str, client: &str) -> SessionDescriptor {
    SessionDescriptor {
        session_id: SessionId::new(id),
        client_info: Some(ClientInfo {
            client: client.to_string(),
            os: None,
        }),
        status: None,
    }
}
