//! In-memory gateway twin for tests.
//!
//! Records every outbound operation instead of sending it, and can be
//! told to fail presence calls to exercise error paths.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use vigil_core::error::AppError;
use vigil_core::result::AppResult;
use vigil_core::traits::{Messenger, PresenceChannel};
use vigil_core::types::{Activity, PresenceStatus};

/// One recorded outbound presence operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PresenceCall {
    /// `set_activity` with its payload.
    SetActivity(Option<Activity>),
    /// `set_presence` with its payload.
    SetPresence {
        status: PresenceStatus,
        activities: Vec<Activity>,
    },
}

/// One recorded outbound message.
#[derive(Debug, Clone, PartialEq)]
pub struct SentMessage {
    pub channel_id: String,
    pub content: String,
}

/// Recording implementation of the outbound channel traits.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    presence_calls: Mutex<Vec<PresenceCall>>,
    sent_messages: Mutex<Vec<SentMessage>>,
    fail_presence: AtomicBool,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// All presence operations recorded so far, in call order.
    pub async fn presence_calls(&self) -> Vec<PresenceCall> {
        self.presence_calls.lock().await.clone()
    }

    /// All messages recorded so far, in call order.
    pub async fn sent_messages(&self) -> Vec<SentMessage> {
        self.sent_messages.lock().await.clone()
    }

    /// Drop everything recorded so far.
    pub async fn clear(&self) {
        self.presence_calls.lock().await.clear();
        self.sent_messages.lock().await.clear();
    }

    /// While set, presence operations fail without being recorded.
    pub fn set_presence_failing(&self, failing: bool) {
        self.fail_presence.store(failing, Ordering::SeqCst);
    }

    fn check_presence_failure(&self) -> AppResult<()> {
        if self.fail_presence.load(Ordering::SeqCst) {
            Err(AppError::gateway("Simulated gateway failure"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PresenceChannel for MemoryGateway {
    async fn set_activity(&self, activity: Option<Activity>) -> AppResult<()> {
        self.check_presence_failure()?;
        self.presence_calls
            .lock()
            .await
            .push(PresenceCall::SetActivity(activity));
        Ok(())
    }

    async fn set_presence(
        &self,
        status: PresenceStatus,
        activities: Vec<Activity>,
    ) -> AppResult<()> {
        self.check_presence_failure()?;
        self.presence_calls
            .lock()
            .await
            .push(PresenceCall::SetPresence { status, activities });
        Ok(())
    }
}

#[async_trait]
impl Messenger for MemoryGateway {
    async fn send_message(&self, channel_id: &str, content: &str) -> AppResult<()> {
        self.sent_messages.lock().await.push(SentMessage {
            channel_id: channel_id.to_string(),
            content: content.to_string(),
        });
        Ok(())
    }
}
