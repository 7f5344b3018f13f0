//! Routing of the account's own messages to command handlers.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use vigil_core::events::MessageEvent;
use vigil_core::traits::Messenger;
use vigil_store::SettingsStore;

use crate::context::CommandContext;
use crate::handlers::{offline, rpc};
use crate::parser;

/// Dispatches prefixed messages written by the account itself and sends
/// handler replies back to the originating channel.
pub struct CommandRouter {
    settings: Arc<SettingsStore>,
    context: CommandContext,
    messenger: Arc<dyn Messenger>,
    own_user: RwLock<Option<String>>,
}

impl CommandRouter {
    pub fn new(
        settings: Arc<SettingsStore>,
        context: CommandContext,
        messenger: Arc<dyn Messenger>,
    ) -> Self {
        Self {
            settings,
            context,
            messenger,
            own_user: RwLock::new(None),
        }
    }

    /// Record the account's user id once the gateway reports it.
    pub async fn set_own_user(&self, id: impl Into<String>) {
        let mut own = self.own_user.write().await;
        *own = Some(id.into());
    }

    /// Process one message event.
    ///
    /// Messages from other authors, unprefixed messages, and unknown
    /// command names are dropped without a reply. Handler failures are
    /// reported back into the channel.
    pub async fn handle_message(&self, event: &MessageEvent) {
        {
            let own = self.own_user.read().await;
            match own.as_deref() {
                Some(id) if id == event.author.id => {}
                _ => return,
            }
        }

        let prefix = self.settings.read().await.prefix;
        let Some(command) = parser::parse(&event.content, &prefix) else {
            return;
        };

        debug!(command = %command.name, "Handling self-command");
        let result = match command.name.as_str() {
            "rpc" => rpc::status(&self.context).await,
            "rpcset" => rpc::set(&self.context, &command.args).await,
            "rpctoggle" => rpc::toggle(&self.context).await,
            "rpcadd" => rpc::add(&self.context, event, &command.args).await,
            "rpcdelete" => rpc::delete(&self.context, &command.args).await,
            "rpcget" => rpc::get(&self.context, &command.args).await,
            "offline" => offline::configure(&self.context, &command.args).await,
            "offlinetoggle" => offline::toggle(&self.context).await,
            _ => return,
        };

        let reply = match result {
            Ok(reply) => reply,
            Err(e) => {
                warn!(command = %command.name, error = %e, "Command failed");
                format!("error: {}", e.message)
            }
        };
        if let Err(e) = self.messenger.send_message(&event.channel_id, &reply).await {
            warn!(error = %e, "Failed to send command reply");
        }
    }
}
