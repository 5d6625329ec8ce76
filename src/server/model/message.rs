//! Wire-level message shapes exchanged with the messaging collaborator.
//!
//! These models decouple the store from Serenity's message types so the store can be
//! driven by any collaborator, including the in-memory fake used in tests.

use serenity::all::MessageId;

/// A file attached to a message in channel history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteAttachment {
    /// File name as uploaded.
    pub filename: String,
    /// Download URL for the file content.
    pub url: String,
}

/// A message fetched from channel history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteMessage {
    /// Discord message ID (snowflake, increases with creation time).
    pub id: MessageId,
    /// Message body.
    pub content: String,
    /// Files attached to the message.
    pub attachments: Vec<RemoteAttachment>,
}

/// A file to upload with an outgoing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingAttachment {
    /// File name to upload under.
    pub filename: String,
    /// File content.
    pub data: Vec<u8>,
}

/// Content of a message to send, or the replacement content of an edited message.
///
/// When editing, an outgoing message without an attachment removes any attachment the
/// existing message carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    /// Message body.
    pub content: String,
    /// Optional file to attach.
    pub attachment: Option<OutgoingAttachment>,
}
