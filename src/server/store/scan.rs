//! Reconstruction scan.
//!
//! Rebuilds the document cache from the most recent messages of the storage channel.
//! Messages are applied oldest to newest by message ID, so when the same key appears
//! more than once in the window the newest message wins regardless of the order the
//! collaborator returned them in. Messages that are not stored records are ignored;
//! records that fail to decode are logged and skipped.

use dioxus_logger::tracing;

use crate::server::{
    error::store::StoreError,
    messaging::MessagingClient,
    model::{
        document::{ScannedRecord, StorageRecord},
        message::RemoteMessage,
    },
    store::{cache::DocumentCache, codec, StoreShared},
};

impl<M: MessagingClient> StoreShared<M> {
    /// Scans the storage channel and builds a fresh cache from it.
    ///
    /// # Returns
    /// - `Ok(DocumentCache)` - Cache holding every record recovered from the window
    /// - `Err(StoreError)` - Channel history could not be fetched
    pub(super) async fn scan(&self) -> Result<DocumentCache, StoreError> {
        let channel_id = self.settings.channel_id;
        let mut messages = self
            .remote(
                "fetch history",
                self.messenger
                    .fetch_recent_messages(channel_id, self.settings.scan_limit),
            )
            .await?;
        messages.sort_by_key(|message| message.id);

        let mut cache = DocumentCache::default();
        let mut skipped = 0usize;

        for message in &messages {
            match self.scan_message(message).await {
                Ok(Some(scanned)) => {
                    if let Some(previous) = cache.insert(scanned.key.clone(), scanned.record) {
                        tracing::warn!(
                            "Record {} found in messages {} and {}, keeping the newer",
                            scanned.key,
                            previous.message_id,
                            message.id
                        );
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    skipped += 1;
                    tracing::warn!("Skipping stored record in message {}: {}", message.id, e);
                }
            }
        }

        tracing::debug!(
            "Scanned {} messages in channel {}, skipped {} unreadable records",
            messages.len(),
            channel_id,
            skipped
        );

        Ok(cache)
    }

    /// Parses one history message into a record.
    ///
    /// # Returns
    /// - `Ok(Some(ScannedRecord))` - Message holds a readable record
    /// - `Ok(None)` - Message is not a stored record
    /// - `Err(StoreError)` - Message has a record header but its JSON could not be read
    async fn scan_message(
        &self,
        message: &RemoteMessage,
    ) -> Result<Option<ScannedRecord>, StoreError> {
        let Some(key) = codec::parse_header(&message.content) else {
            return Ok(None);
        };

        let value = if let Some(json) = codec::inline_json(&message.content) {
            codec::decode(message.id, json.as_bytes())?
        } else {
            let filename = codec::attachment_filename(&key);
            let attachment = message
                .attachments
                .iter()
                .find(|attachment| attachment.filename == filename)
                .or_else(|| message.attachments.first())
                .ok_or_else(|| StoreError::Decode {
                    message_id: message.id.get(),
                    reason: "record has neither embedded JSON nor an attachment".to_string(),
                })?;

            let data = self
                .remote(
                    "fetch attachment",
                    self.messenger.fetch_attachment(&attachment.url),
                )
                .await?;
            codec::decode(message.id, &data)?
        };

        Ok(Some(ScannedRecord {
            key,
            record: StorageRecord {
                value,
                message_id: message.id,
            },
        }))
    }
}
