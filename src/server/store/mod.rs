//! Channel-backed document store.
//!
//! This module provides `DocumentStore`, a key-value store for JSON documents that
//! uses one Discord channel as its durable log. Each document lives in exactly one
//! message; the store keeps every document in memory and serves reads from there,
//! while writes are serialized through a FIFO queue drained by a single worker task
//! that respects Discord's rate limits.
//!
//! The store is organized into separate modules by concern:
//! - `cache` - In-memory collection → ID → record mapping
//! - `codec` - Record header, embedded JSON and attachment encoding
//! - `scan` - Cache reconstruction from channel history
//! - `worker` - Write queue worker
//!
//! # Lifecycle
//!
//! The store is created once at startup with an injected messaging collaborator, then
//! `initialize` rebuilds the cache from the most recent messages of the channel. Until
//! that succeeds every operation is rejected with a logged warning.
//!
//! # Failure reporting
//!
//! Failures never escape as errors: reads return `None` or an empty result and writes
//! return `false`, with the cause logged.

pub mod cache;
pub mod codec;
mod scan;
mod worker;

#[cfg(test)]
mod test;

use dioxus_logger::tracing;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use serenity::all::ChannelId;
use std::{
    collections::HashMap,
    future::Future,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard,
    },
    time::Duration,
};
use tokio::sync::{mpsc, oneshot};

use crate::server::{
    config::Config,
    error::{messaging::MessagingError, store::StoreError},
    messaging::MessagingClient,
    model::document::{Document, DocumentKey, StoreStats},
    store::{
        cache::DocumentCache,
        worker::{WriteOperation, WriteWorker},
    },
};

/// Tunables of a document store.
#[derive(Debug, Clone)]
pub struct StoreSettings {
    /// Channel holding the stored records.
    pub channel_id: ChannelId,
    /// Number of most recent messages read by the reconstruction scan (at most 100).
    pub scan_limit: u8,
    /// Pause after every queued operation.
    pub write_delay: Duration,
    /// Longest a single remote call may take before the operation fails.
    pub operation_timeout: Duration,
    /// Largest pretty-printed JSON length, in characters, embedded in a message body.
    pub inline_limit: usize,
}

impl StoreSettings {
    /// Creates settings for a channel with default tunables.
    ///
    /// Defaults: scan the 100 most recent messages, wait 1 second between writes,
    /// time out remote calls after 30 seconds, embed JSON up to 1500 characters.
    pub fn new(channel_id: ChannelId) -> Self {
        Self {
            channel_id,
            scan_limit: 100,
            write_delay: Duration::from_secs(1),
            operation_timeout: Duration::from_secs(30),
            inline_limit: 1_500,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            channel_id: ChannelId::new(config.database_channel_id),
            scan_limit: config.scan_limit,
            write_delay: config.write_delay,
            operation_timeout: config.operation_timeout,
            inline_limit: config.inline_limit,
        }
    }
}

/// State shared between store handles and the write worker.
pub(crate) struct StoreShared<M> {
    messenger: Arc<M>,
    settings: StoreSettings,
    cache: RwLock<DocumentCache>,
    ready: AtomicBool,
}

impl<M: MessagingClient> StoreShared<M> {
    fn read_cache(&self) -> RwLockReadGuard<'_, DocumentCache> {
        self.cache.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_cache(&self) -> RwLockWriteGuard<'_, DocumentCache> {
        self.cache.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Runs a remote call under the per-operation timeout.
    async fn remote<T, F>(&self, operation: &'static str, call: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, MessagingError>>,
    {
        let limit = self.settings.operation_timeout;

        match tokio::time::timeout(limit, call).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(StoreError::Timeout {
                operation,
                elapsed: limit,
            }),
        }
    }

    /// Resolves the channel, scans it and swaps in the rebuilt cache.
    ///
    /// Runs on the write worker only, so no write can land between the scan and the swap.
    async fn rebuild(&self) -> Result<StoreStats, StoreError> {
        self.remote(
            "resolve channel",
            self.messenger.resolve_channel(self.settings.channel_id),
        )
        .await?;

        let cache = self.scan().await?;
        let stats = cache.stats();

        *self.write_cache() = cache;
        self.ready.store(true, Ordering::Release);

        Ok(stats)
    }
}

/// Handle to a channel-backed document store.
///
/// Handles are cheap to clone and share the same cache and write queue. The write
/// worker stops once every handle has been dropped and the queue is drained.
pub struct DocumentStore<M> {
    shared: Arc<StoreShared<M>>,
    queue: mpsc::UnboundedSender<WriteOperation>,
}

impl<M> Clone for DocumentStore<M> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
            queue: self.queue.clone(),
        }
    }
}

impl<M: MessagingClient> DocumentStore<M> {
    /// Creates a store and spawns its write worker.
    ///
    /// Must be called from within a Tokio runtime. The store rejects every operation
    /// until `initialize` succeeds.
    ///
    /// # Arguments
    /// - `messenger` - Messaging collaborator used for every remote call
    /// - `settings` - Channel and tunables
    ///
    /// # Returns
    /// - `DocumentStore` - Uninitialized store handle
    pub fn new(messenger: Arc<M>, settings: StoreSettings) -> Self {
        let shared = Arc::new(StoreShared {
            messenger,
            settings,
            cache: RwLock::new(DocumentCache::default()),
            ready: AtomicBool::new(false),
        });

        let (sender, receiver) = mpsc::unbounded_channel();
        tokio::spawn(WriteWorker::new(shared.clone(), receiver).run());

        Self {
            shared,
            queue: sender,
        }
    }

    /// Rebuilds the cache from channel history and marks the store ready.
    ///
    /// Resolves the storage channel, reads its most recent messages and recovers every
    /// stored record among them. Messages that are not records are ignored and records
    /// that cannot be decoded are skipped with a warning. Calling this again rebuilds
    /// the cache from scratch.
    ///
    /// The rebuild runs on the write queue: writes queued before it are already in the
    /// history it reads, and writes queued after it apply to the rebuilt cache.
    ///
    /// # Returns
    /// - `true` - Cache rebuilt, store ready
    /// - `false` - Channel could not be resolved or its history fetched
    pub async fn initialize(&self) -> bool {
        let (done, completed) = oneshot::channel();
        let result = if self.queue.send(WriteOperation::Rebuild { done }).is_err() {
            Err(StoreError::WorkerStopped)
        } else {
            completed
                .await
                .unwrap_or_else(|_| Err(StoreError::WorkerStopped))
        };

        match result {
            Ok(stats) => {
                tracing::info!(
                    "Document store initialized from channel {}: {} documents in {} collections",
                    self.shared.settings.channel_id,
                    stats.documents,
                    stats.collections
                );
                true
            }
            Err(e) => {
                tracing::error!(
                    "Failed to initialize document store from channel {}: {}",
                    self.shared.settings.channel_id,
                    e
                );
                false
            }
        }
    }

    /// Whether `initialize` has completed successfully.
    pub fn is_ready(&self) -> bool {
        self.shared.is_ready()
    }

    /// Returns a cached document.
    ///
    /// # Arguments
    /// - `collection` - Collection name
    /// - `id` - Document ID
    ///
    /// # Returns
    /// - `Some(Document)` - Document as last written, including its `timestamp`
    /// - `None` - No such document, or the store is not initialized
    pub fn get_document(&self, collection: &str, id: &str) -> Option<Document> {
        if !self.ready_for("get_document") {
            return None;
        }

        self.shared
            .read_cache()
            .get(&DocumentKey::new(collection, id))
            .map(|record| record.value.clone())
    }

    /// Returns every cached document of a collection, keyed by ID.
    ///
    /// Empty when the collection is unknown or the store is not initialized.
    pub fn get_collection(&self, collection: &str) -> HashMap<String, Document> {
        if !self.ready_for("get_collection") {
            return HashMap::new();
        }

        self.shared
            .read_cache()
            .collection(collection)
            .map(|documents| {
                documents
                    .iter()
                    .map(|(id, record)| (id.clone(), record.value.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns the documents of a collection matching a predicate.
    ///
    /// Each match carries its document ID in an `id` field, unless the document already
    /// has a field of that name. Results are ordered by document ID.
    ///
    /// # Arguments
    /// - `collection` - Collection name
    /// - `predicate` - Called with each document value
    ///
    /// # Returns
    /// - `Vec<Document>` - Matching documents; empty if none match or the store is not initialized
    pub fn find_documents<P>(&self, collection: &str, predicate: P) -> Vec<Document>
    where
        P: Fn(&Document) -> bool,
    {
        if !self.ready_for("find_documents") {
            return Vec::new();
        }

        let cache = self.shared.read_cache();
        let Some(documents) = cache.collection(collection) else {
            return Vec::new();
        };

        let mut matches: Vec<(&String, Document)> = documents
            .iter()
            .filter(|(_, record)| predicate(&record.value))
            .map(|(id, record)| {
                let mut document = record.value.clone();
                document
                    .entry("id")
                    .or_insert_with(|| Value::String(id.clone()));
                (id, document)
            })
            .collect();
        matches.sort_by(|a, b| a.0.cmp(b.0));

        matches.into_iter().map(|(_, document)| document).collect()
    }

    /// Writes a document through the write queue.
    ///
    /// The document gets a `timestamp` field if it has none. Resolves once the worker
    /// has applied this write, after every write queued before it.
    ///
    /// # Arguments
    /// - `collection` - Collection name, created on first write
    /// - `id` - Document ID; neither it nor the collection may contain `:` or line breaks
    /// - `value` - Document to store
    ///
    /// # Returns
    /// - `true` - Discord confirmed the write and the cache holds the new value
    /// - `false` - Store not initialized, invalid key, or the remote write failed
    pub async fn set_document(&self, collection: &str, id: &str, value: Document) -> bool {
        if !self.ready_for("set_document") {
            return false;
        }

        let key = DocumentKey::new(collection, id);
        if let Err(e) = codec::validate_key(&key) {
            tracing::warn!("Rejected write: {}", e);
            return false;
        }

        self.enqueue(|done| WriteOperation::Set { key, value, done })
            .await
    }

    /// Deletes a document through the write queue.
    ///
    /// Queued behind pending writes, so a delete issued after a write to the same key
    /// always observes that write. A message already removed from Discord is not an
    /// error; the cached entry is dropped whenever the document was known.
    ///
    /// # Returns
    /// - `true` - Document removed
    /// - `false` - No such document, or the store is not initialized
    pub async fn delete_document(&self, collection: &str, id: &str) -> bool {
        if !self.ready_for("delete_document") {
            return false;
        }

        let key = DocumentKey::new(collection, id);
        self.enqueue(|done| WriteOperation::Delete { key, done })
            .await
    }

    /// Returns a cached document deserialized into `T`.
    ///
    /// `None` when the document is missing or does not match `T`'s shape.
    pub fn get_as<T: DeserializeOwned>(&self, collection: &str, id: &str) -> Option<T> {
        let document = self.get_document(collection, id)?;

        match serde_json::from_value(Value::Object(document)) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Document {}:{} has an unexpected shape: {}", collection, id, e);
                None
            }
        }
    }

    /// Serializes `value` and writes it as a document.
    ///
    /// # Returns
    /// - `true` - Written
    /// - `false` - `value` is not a JSON object, or `set_document` failed
    pub async fn set_from<T: Serialize>(&self, collection: &str, id: &str, value: &T) -> bool {
        let document = match serde_json::to_value(value) {
            Ok(Value::Object(document)) => document,
            Ok(_) => {
                tracing::warn!(
                    "Rejected write: {}",
                    StoreError::NotAnObject {
                        collection: collection.to_string(),
                        id: id.to_string(),
                    }
                );
                return false;
            }
            Err(e) => {
                tracing::warn!("Rejected write: {}", StoreError::Encode(e));
                return false;
            }
        };

        self.set_document(collection, id, document).await
    }

    /// Counts cached collections and documents.
    pub fn stats(&self) -> StoreStats {
        self.shared.read_cache().stats()
    }

    fn ready_for(&self, operation: &str) -> bool {
        let ready = self.shared.is_ready();
        if !ready {
            tracing::warn!("Rejected {}: {}", operation, StoreError::NotReady);
        }
        ready
    }

    /// Queues an operation and waits for the worker to complete it.
    async fn enqueue<F>(&self, operation: F) -> bool
    where
        F: FnOnce(oneshot::Sender<bool>) -> WriteOperation,
    {
        let (done, completed) = oneshot::channel();

        if self.queue.send(operation(done)).is_err() {
            tracing::error!("{}", StoreError::WorkerStopped);
            return false;
        }

        completed.await.unwrap_or_else(|_| {
            tracing::error!("{}", StoreError::WorkerStopped);
            false
        })
    }
}
