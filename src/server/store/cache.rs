//! In-memory document cache.
//!
//! Maps collection → document ID → storage record. The cache is only mutated by the
//! reconstruction scan and the write worker; callers read through the store.

use std::collections::HashMap;

use crate::server::model::document::{DocumentKey, StorageRecord, StoreStats};

#[derive(Debug, Default)]
pub struct DocumentCache {
    collections: HashMap<String, HashMap<String, StorageRecord>>,
}

impl DocumentCache {
    pub fn get(&self, key: &DocumentKey) -> Option<&StorageRecord> {
        self.collections
            .get(&key.collection)
            .and_then(|documents| documents.get(&key.id))
    }

    /// Inserts or replaces a record, returning the previous one.
    pub fn insert(&mut self, key: DocumentKey, record: StorageRecord) -> Option<StorageRecord> {
        self.collections
            .entry(key.collection)
            .or_default()
            .insert(key.id, record)
    }

    pub fn remove(&mut self, key: &DocumentKey) -> Option<StorageRecord> {
        self.collections
            .get_mut(&key.collection)
            .and_then(|documents| documents.remove(&key.id))
    }

    pub fn collection(&self, collection: &str) -> Option<&HashMap<String, StorageRecord>> {
        self.collections.get(collection)
    }

    pub fn stats(&self) -> StoreStats {
        let populated = self
            .collections
            .values()
            .filter(|documents| !documents.is_empty());

        populated.fold(StoreStats::default(), |stats, documents| StoreStats {
            collections: stats.collections + 1,
            documents: stats.documents + documents.len(),
        })
    }
}
