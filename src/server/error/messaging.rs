use thiserror::Error;

/// Errors reported by a messaging collaborator.
///
/// Every collaborator call is a network operation that may fail transiently. The
/// store only distinguishes `MessageNotFound` (to fall back from edit to send, and to
/// tolerate already-deleted messages); every other variant is treated as a remote
/// failure of the operation at hand.
#[derive(Error, Debug)]
pub enum MessagingError {
    /// The storage channel does not exist or is not a text channel the bot can use.
    #[error("Channel {0} could not be resolved")]
    ChannelNotFound(u64),

    /// The targeted message no longer exists remotely.
    #[error("Message {0} no longer exists")]
    MessageNotFound(u64),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),

    /// Attachment download failed.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Any other collaborator failure.
    #[error("{0}")]
    Other(String),
}

impl From<serenity::Error> for MessagingError {
    fn from(err: serenity::Error) -> Self {
        MessagingError::Discord(Box::new(err))
    }
}
