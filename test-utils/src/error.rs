use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// A seeded document could not be serialized into a stored message.
    #[error("Failed to serialize seeded document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A seeded document was not a JSON object.
    ///
    /// Stored documents are always key/value mappings, so anything else indicates
    /// invalid test data.
    #[error("Seeded document for {collection}:{id} is not a JSON object")]
    NotAnObject { collection: String, id: String },
}

/// Errors returned by [`FakeChannel`](crate::channel::FakeChannel) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FakeError {
    /// The channel was configured to be unresolvable.
    #[error("Unknown channel {0}")]
    UnknownChannel(u64),

    /// The targeted message does not exist (never sent or already deleted).
    #[error("Unknown message {0}")]
    UnknownMessage(u64),

    /// No attachment is stored under the requested URL.
    #[error("Unknown attachment {0}")]
    UnknownAttachment(String),

    /// A failure injected through `FakeChannel::fail_next`.
    #[error("Injected failure for {0:?}")]
    Injected(crate::channel::FakeOperation),

    /// The operation was configured through `FakeChannel::hang_next` to never complete.
    #[error("Injected hang for {0:?}")]
    Hang(crate::channel::FakeOperation),
}
