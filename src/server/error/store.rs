use std::time::Duration;
use thiserror::Error;

use crate::server::error::messaging::MessagingError;

/// Errors raised inside the document store.
///
/// These never escape the public store API: operations log them and report a
/// `false`/`None` result to the caller instead.
#[derive(Error, Debug)]
pub enum StoreError {
    /// An operation was invoked before `initialize` completed successfully.
    #[error("Document store is not initialized")]
    NotReady,

    /// The targeted document does not exist.
    #[error("Document {collection}:{id} not found")]
    NotFound { collection: String, id: String },

    /// The collection or document ID cannot be represented in a record header.
    ///
    /// Record headers are colon-delimited and end at the first newline, so neither
    /// value may contain `:` or a line break, and neither may be blank.
    #[error("Invalid document key {collection}:{id}: {reason}")]
    InvalidKey {
        collection: String,
        id: String,
        reason: &'static str,
    },

    /// A value passed to a typed accessor did not serialize to a JSON object.
    #[error("Value for {collection}:{id} is not a JSON object")]
    NotAnObject { collection: String, id: String },

    /// Failed to encode a document for storage.
    #[error("Failed to encode document: {0}")]
    Encode(#[source] serde_json::Error),

    /// A stored record could not be decoded.
    #[error("Failed to decode record in message {message_id}: {reason}")]
    Decode { message_id: u64, reason: String },

    /// The messaging collaborator failed.
    #[error(transparent)]
    Messaging(#[from] MessagingError),

    /// A remote call exceeded the per-operation timeout.
    #[error("{operation} timed out after {elapsed:?}")]
    Timeout {
        operation: &'static str,
        elapsed: Duration,
    },

    /// The write worker has shut down and can no longer accept operations.
    #[error("Write worker is no longer running")]
    WorkerStopped,
}
