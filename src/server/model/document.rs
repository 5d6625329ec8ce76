//! Domain models for stored documents.
//!
//! Defines the document value type, the (collection, id) key that addresses it, and
//! the storage record pairing a cached value with the message that holds it remotely.

use serenity::all::MessageId;
use std::fmt;

/// A stored document: a mapping from string keys to JSON values.
///
/// The store does not enforce any schema; callers own the shape of their documents.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Address of a document: its collection and its ID within that collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentKey {
    /// Collection name, e.g. `"configs"`.
    pub collection: String,
    /// Document ID, unique within the collection.
    pub id: String,
}

impl DocumentKey {
    /// Creates a new document key.
    ///
    /// # Arguments
    /// - `collection` - Collection name
    /// - `id` - Document ID within the collection
    ///
    /// # Returns
    /// - `DocumentKey` - Key addressing the document
    pub fn new(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            id: id.into(),
        }
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.collection, self.id)
    }
}

/// Cached document paired with the message currently holding its serialized form.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageRecord {
    /// Canonicalized document value, as last confirmed written.
    pub value: Document,
    /// Discord message holding the serialized document.
    pub message_id: MessageId,
}

/// A record recovered from channel history during the reconstruction scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedRecord {
    pub key: DocumentKey,
    pub record: StorageRecord,
}

/// Document counts reported by `DocumentStore::stats`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// Number of collections holding at least one document.
    pub collections: usize,
    /// Total number of cached documents across all collections.
    pub documents: usize,
}
