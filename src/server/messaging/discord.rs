//! Serenity-backed messaging collaborator.

use dioxus_logger::tracing;
use serenity::{
    all::{
        ChannelId, ChannelType, CreateAttachment, CreateMessage, EditMessage, GetMessages,
        Message, MessageId,
    },
    async_trait,
    http::{Http, HttpError},
};
use std::sync::Arc;

use crate::server::{
    error::messaging::MessagingError,
    messaging::MessagingClient,
    model::message::{OutgoingAttachment, OutgoingMessage, RemoteAttachment, RemoteMessage},
};

/// Discord JSON error code for a message that does not exist.
const UNKNOWN_MESSAGE: isize = 10008;

/// Discord JSON error code for a channel that does not exist.
const UNKNOWN_CHANNEL: isize = 10003;

/// Messaging collaborator talking to Discord through Serenity's HTTP client.
///
/// Attachment content is downloaded with a separate `reqwest` client since Discord
/// serves attachments from its CDN rather than the API.
#[derive(Clone)]
pub struct SerenityMessenger {
    /// Discord HTTP client for channel and message operations
    http: Arc<Http>,
    /// HTTP client for downloading attachment content
    client: reqwest::Client,
}

impl SerenityMessenger {
    /// Creates a new SerenityMessenger instance.
    ///
    /// # Arguments
    /// - `http` - Arc-wrapped Discord HTTP client for API requests
    /// - `client` - HTTP client used to download attachments
    ///
    /// # Returns
    /// - `SerenityMessenger` - New messenger instance
    pub fn new(http: Arc<Http>, client: reqwest::Client) -> Self {
        Self { http, client }
    }
}

#[async_trait]
impl MessagingClient for SerenityMessenger {
    async fn resolve_channel(&self, channel_id: ChannelId) -> Result<ChannelId, MessagingError> {
        let channel = self.http.get_channel(channel_id).await.map_err(|e| {
            if discord_error_code(&e) == Some(UNKNOWN_CHANNEL) {
                MessagingError::ChannelNotFound(channel_id.get())
            } else {
                MessagingError::from(e)
            }
        })?;

        let Some(channel) = channel.guild() else {
            tracing::warn!("Storage channel {} is not a guild channel", channel_id);
            return Err(MessagingError::ChannelNotFound(channel_id.get()));
        };

        if !matches!(channel.kind, ChannelType::Text | ChannelType::News) {
            tracing::warn!(
                "Storage channel {} is a {:?} channel, expected a text channel",
                channel_id,
                channel.kind
            );
            return Err(MessagingError::ChannelNotFound(channel_id.get()));
        }

        Ok(channel.id)
    }

    async fn fetch_recent_messages(
        &self,
        channel_id: ChannelId,
        limit: u8,
    ) -> Result<Vec<RemoteMessage>, MessagingError> {
        let messages = channel_id
            .messages(&self.http, GetMessages::new().limit(limit))
            .await?;

        Ok(messages.iter().map(remote_message).collect())
    }

    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: OutgoingMessage,
    ) -> Result<MessageId, MessagingError> {
        let mut builder = CreateMessage::new().content(message.content);
        if let Some(attachment) = message.attachment {
            builder = builder.add_file(create_attachment(attachment));
        }

        let sent = channel_id.send_message(&self.http, builder).await?;

        Ok(sent.id)
    }

    async fn edit_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        message: OutgoingMessage,
    ) -> Result<MessageId, MessagingError> {
        // Replace attachments wholesale so switching between inline and attached
        // encodings never leaves a stale file behind.
        let mut builder = EditMessage::new()
            .content(message.content)
            .remove_all_attachments();
        if let Some(attachment) = message.attachment {
            builder = builder.new_attachment(create_attachment(attachment));
        }

        let edited = channel_id
            .edit_message(&self.http, message_id, builder)
            .await
            .map_err(|e| message_error(e, message_id))?;

        Ok(edited.id)
    }

    async fn delete_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), MessagingError> {
        channel_id
            .delete_message(&self.http, message_id)
            .await
            .map_err(|e| message_error(e, message_id))
    }

    async fn fetch_attachment(&self, url: &str) -> Result<Vec<u8>, MessagingError> {
        let bytes = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        Ok(bytes.to_vec())
    }
}

/// Converts a Serenity message into the collaborator-neutral history model.
///
/// # Arguments
/// - `message` - Message returned by the channel history endpoint
///
/// # Returns
/// - `RemoteMessage` - Message ID, body and attachment file names/URLs
pub fn remote_message(message: &Message) -> RemoteMessage {
    RemoteMessage {
        id: message.id,
        content: message.content.clone(),
        attachments: message
            .attachments
            .iter()
            .map(|attachment| RemoteAttachment {
                filename: attachment.filename.clone(),
                url: attachment.url.clone(),
            })
            .collect(),
    }
}

fn create_attachment(attachment: OutgoingAttachment) -> CreateAttachment {
    CreateAttachment::bytes(attachment.data, attachment.filename)
}

/// Maps "unknown message" responses to `MessageNotFound`, leaving other errors intact.
fn message_error(err: serenity::Error, message_id: MessageId) -> MessagingError {
    if discord_error_code(&err) == Some(UNKNOWN_MESSAGE) {
        MessagingError::MessageNotFound(message_id.get())
    } else {
        MessagingError::from(err)
    }
}

/// Extracts Discord's JSON error code from an unsuccessful API response.
fn discord_error_code(err: &serenity::Error) -> Option<isize> {
    let serenity::Error::Http(http_err) = err else {
        return None;
    };
    let http_err: &HttpError = http_err;

    match http_err {
        HttpError::UnsuccessfulRequest(response) => Some(response.error.code),
        _ => None,
    }
}
