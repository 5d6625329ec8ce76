//! Messaging collaborator abstraction.
//!
//! The document store talks to Discord exclusively through the `MessagingClient`
//! trait, which models the handful of channel operations it needs as opaque remote
//! calls. Every call may fail transiently and none is assumed to be idempotent.
//!
//! `SerenityMessenger` implements the trait on top of Serenity's HTTP client for the
//! running bot. Tests drive the store with the in-memory `FakeChannel` from the
//! `test-utils` crate instead.

#[cfg(test)]
pub mod fake;
pub mod discord;

#[cfg(test)]
mod test;

use serenity::all::{ChannelId, MessageId};
use serenity::async_trait;

use crate::server::{
    error::messaging::MessagingError,
    model::message::{OutgoingMessage, RemoteMessage},
};

pub use discord::SerenityMessenger;

/// Remote channel operations required by the document store.
#[async_trait]
pub trait MessagingClient: Send + Sync + 'static {
    /// Resolves the channel, verifying it exists and can hold messages.
    ///
    /// # Returns
    /// - `Ok(ChannelId)` - Channel is usable
    /// - `Err(MessagingError::ChannelNotFound)` - Channel does not exist or is not a text channel
    async fn resolve_channel(&self, channel_id: ChannelId) -> Result<ChannelId, MessagingError>;

    /// Fetches up to `limit` of the most recent messages, in any order.
    async fn fetch_recent_messages(
        &self,
        channel_id: ChannelId,
        limit: u8,
    ) -> Result<Vec<RemoteMessage>, MessagingError>;

    /// Posts a new message and returns its ID.
    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: OutgoingMessage,
    ) -> Result<MessageId, MessagingError>;

    /// Replaces the content and attachment of an existing message.
    ///
    /// # Returns
    /// - `Ok(MessageId)` - ID of the edited message
    /// - `Err(MessagingError::MessageNotFound)` - The message no longer exists
    async fn edit_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        message: OutgoingMessage,
    ) -> Result<MessageId, MessagingError>;

    /// Deletes a message.
    ///
    /// # Returns
    /// - `Ok(())` - Message deleted
    /// - `Err(MessagingError::MessageNotFound)` - The message was already gone
    async fn delete_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), MessagingError>;

    /// Downloads the content of an attachment.
    async fn fetch_attachment(&self, url: &str) -> Result<Vec<u8>, MessagingError>;
}
