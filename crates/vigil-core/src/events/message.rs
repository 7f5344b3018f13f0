//! Message creation events.

use serde::{Deserialize, Serialize};

/// Author block of a message event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageAuthor {
    /// Platform user id of the author.
    pub id: String,
    /// Display name, when included.
    #[serde(default)]
    pub username: String,
}

/// A file attached to a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageAttachment {
    /// Original file name.
    #[serde(default)]
    pub filename: String,
    /// Download URL for the attachment content.
    pub url: String,
}

/// Payload of a message-create frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageEvent {
    /// Message id.
    pub id: String,
    /// Channel the message was posted in.
    pub channel_id: String,
    /// Message author.
    pub author: MessageAuthor,
    /// Raw text content.
    #[serde(default)]
    pub content: String,
    /// Attached files, in upload order.
    #[serde(default)]
    pub attachments: Vec<MessageAttachment>,
}
