//! `MessagingClient` implementation for the in-memory `FakeChannel`.
//!
//! Every call yields to the runtime while it is marked in flight, so overlapping
//! calls from concurrent tasks are observable through `FakeChannel::max_in_flight`.
//! Calls configured with `FakeChannel::hang_next` never complete.

use serenity::all::{ChannelId, MessageId};
use serenity::async_trait;
use test_utils::{
    channel::{FakeChannel, FakeOperation},
    error::FakeError,
};

use crate::server::{
    error::messaging::MessagingError,
    messaging::MessagingClient,
    model::message::{OutgoingMessage, RemoteAttachment, RemoteMessage},
};

impl From<FakeError> for MessagingError {
    fn from(err: FakeError) -> Self {
        match err {
            FakeError::UnknownChannel(id) => MessagingError::ChannelNotFound(id),
            FakeError::UnknownMessage(id) => MessagingError::MessageNotFound(id),
            other => MessagingError::Other(other.to_string()),
        }
    }
}

/// Marks a call in flight, applying any injected failure or hang.
async fn enter(channel: &FakeChannel, operation: FakeOperation) -> Result<(), MessagingError> {
    match channel.begin(operation) {
        Ok(()) => {}
        Err(FakeError::Hang(_)) => std::future::pending::<()>().await,
        Err(err) => return Err(err.into()),
    }

    tokio::task::yield_now().await;
    Ok(())
}

fn check_channel(channel: &FakeChannel, channel_id: ChannelId) -> Result<(), MessagingError> {
    if channel.channel_id() == channel_id.get() {
        Ok(())
    } else {
        Err(MessagingError::ChannelNotFound(channel_id.get()))
    }
}

fn attachment_parts(message: &OutgoingMessage) -> Option<(&str, &[u8])> {
    message
        .attachment
        .as_ref()
        .map(|a| (a.filename.as_str(), a.data.as_slice()))
}

#[async_trait]
impl MessagingClient for FakeChannel {
    async fn resolve_channel(&self, channel_id: ChannelId) -> Result<ChannelId, MessagingError> {
        enter(self, FakeOperation::ResolveChannel).await?;
        let result = check_channel(self, channel_id).and_then(|()| Ok(self.resolve()?));
        self.end();

        result.map(ChannelId::new)
    }

    async fn fetch_recent_messages(
        &self,
        channel_id: ChannelId,
        limit: u8,
    ) -> Result<Vec<RemoteMessage>, MessagingError> {
        enter(self, FakeOperation::FetchRecent).await?;
        let result = check_channel(self, channel_id).map(|()| self.recent(limit));
        self.end();

        Ok(result?
            .into_iter()
            .map(|message| RemoteMessage {
                id: MessageId::new(message.id),
                content: message.content,
                attachments: message
                    .attachment
                    .into_iter()
                    .map(|a| RemoteAttachment {
                        filename: a.filename,
                        url: a.url,
                    })
                    .collect(),
            })
            .collect())
    }

    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: OutgoingMessage,
    ) -> Result<MessageId, MessagingError> {
        enter(self, FakeOperation::Send).await?;
        let result = check_channel(self, channel_id)
            .map(|()| self.send(&message.content, attachment_parts(&message)));
        self.end();

        result.map(MessageId::new)
    }

    async fn edit_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        message: OutgoingMessage,
    ) -> Result<MessageId, MessagingError> {
        enter(self, FakeOperation::Edit).await?;
        let result = check_channel(self, channel_id).and_then(|()| {
            Ok(self.edit(
                message_id.get(),
                &message.content,
                attachment_parts(&message),
            )?)
        });
        self.end();

        result.map(MessageId::new)
    }

    async fn delete_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), MessagingError> {
        enter(self, FakeOperation::Delete).await?;
        let result =
            check_channel(self, channel_id).and_then(|()| Ok(self.delete(message_id.get())?));
        self.end();

        result
    }

    async fn fetch_attachment(&self, url: &str) -> Result<Vec<u8>, MessagingError> {
        enter(self, FakeOperation::FetchAttachment).await?;
        let result = self.attachment(url);
        self.end();

        Ok(result?)
    }
}
