//! Write worker.
//!
//! A single task owns the receiving end of the write queue and applies operations one
//! at a time, awaiting each remote call before starting the next and pausing for the
//! configured delay between operations. Reconstruction scans run on the same queue,
//! so this is the only place the cache is mutated and there is at most one in-flight
//! write to Discord at any time.

use chrono::Utc;
use dioxus_logger::tracing;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

use crate::server::{
    error::{messaging::MessagingError, store::StoreError},
    messaging::MessagingClient,
    model::document::{Document, DocumentKey, StorageRecord, StoreStats},
    store::{codec, StoreShared},
};

/// A queued mutating operation and the signal completing its caller.
pub(super) enum WriteOperation {
    Set {
        key: DocumentKey,
        value: Document,
        done: oneshot::Sender<bool>,
    },
    Delete {
        key: DocumentKey,
        done: oneshot::Sender<bool>,
    },
    Rebuild {
        done: oneshot::Sender<Result<StoreStats, StoreError>>,
    },
}

pub(super) struct WriteWorker<M> {
    shared: Arc<StoreShared<M>>,
    queue: mpsc::UnboundedReceiver<WriteOperation>,
}

impl<M: MessagingClient> WriteWorker<M> {
    pub(super) fn new(
        shared: Arc<StoreShared<M>>,
        queue: mpsc::UnboundedReceiver<WriteOperation>,
    ) -> Self {
        Self { shared, queue }
    }

    /// Drains the queue until every store handle has been dropped.
    pub(super) async fn run(mut self) {
        tracing::debug!("Write worker started");

        while let Some(operation) = self.queue.recv().await {
            // The caller may have stopped waiting; the operation still counts.
            match operation {
                WriteOperation::Set { key, value, done } => {
                    let result = self.set(&key, value).await;
                    if let Err(e) = &result {
                        tracing::error!("Failed to write document {}: {}", key, e);
                    }
                    let _ = done.send(result.is_ok());
                }
                WriteOperation::Delete { key, done } => {
                    let result = self.delete(&key).await;
                    match &result {
                        Err(StoreError::NotFound { .. }) => {
                            tracing::debug!("Delete of unknown document {}", key)
                        }
                        Err(e) => tracing::error!("Failed to delete document {}: {}", key, e),
                        Ok(()) => {}
                    }
                    let _ = done.send(result.is_ok());
                }
                WriteOperation::Rebuild { done } => {
                    let _ = done.send(self.shared.rebuild().await);
                }
            }

            tokio::time::sleep(self.shared.settings.write_delay).await;
        }

        tracing::debug!("Write worker stopped");
    }

    /// Writes a document, editing its existing message when there is one.
    ///
    /// Falls back to sending a new message when the cached message no longer exists.
    /// The cache is only updated once Discord confirmed the write.
    async fn set(&self, key: &DocumentKey, value: Document) -> Result<(), StoreError> {
        let value = codec::canonicalize(value, Utc::now());
        let message = codec::encode(key, &value, self.shared.settings.inline_limit)?;

        let channel_id = self.shared.settings.channel_id;
        let messenger = &self.shared.messenger;
        let existing = self
            .shared
            .read_cache()
            .get(key)
            .map(|record| record.message_id);

        let message_id = self
            .shared
            .remote("write", async {
                let Some(message_id) = existing else {
                    return messenger.send_message(channel_id, message).await;
                };

                match messenger
                    .edit_message(channel_id, message_id, message.clone())
                    .await
                {
                    Err(MessagingError::MessageNotFound(_)) => {
                        tracing::info!(
                            "Message {} for {} no longer exists, sending a new one",
                            message_id,
                            key
                        );
                        messenger.send_message(channel_id, message).await
                    }
                    result => result,
                }
            })
            .await?;

        self.shared
            .write_cache()
            .insert(key.clone(), StorageRecord { value, message_id });

        Ok(())
    }

    /// Deletes a document's message and drops it from the cache.
    ///
    /// Remote failures are tolerated: the cache entry is removed regardless, since a
    /// message left behind is picked up again by the next reconstruction scan at worst.
    async fn delete(&self, key: &DocumentKey) -> Result<(), StoreError> {
        let message_id = self
            .shared
            .read_cache()
            .get(key)
            .map(|record| record.message_id)
            .ok_or_else(|| StoreError::NotFound {
                collection: key.collection.clone(),
                id: key.id.clone(),
            })?;

        let result = self
            .shared
            .remote(
                "delete",
                self.shared
                    .messenger
                    .delete_message(self.shared.settings.channel_id, message_id),
            )
            .await;

        match result {
            Ok(()) => {}
            Err(StoreError::Messaging(MessagingError::MessageNotFound(_))) => {
                tracing::debug!("Message {} for {} was already deleted", message_id, key);
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to delete message {} for {}, dropping cached entry anyway: {}",
                    message_id,
                    key,
                    e
                );
            }
        }

        self.shared.write_cache().remove(key);

        Ok(())
    }
}
