use std::sync::Arc;

use crate::channel::FakeChannel;

/// Test context containing the seeded fake channel.
///
/// The channel is reference counted so the same instance can be handed to the code
/// under test while the test keeps a handle for assertions.
pub struct TestContext {
    /// Seeded fake channel.
    pub channel: Arc<FakeChannel>,

    /// Message IDs of the seeded messages, in the order they were added to the builder.
    pub seeded: Vec<u64>,
}

impl TestContext {
    /// Creates a test context around an already seeded channel.
    ///
    /// Typically called internally by `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `channel` - Fake channel
    /// - `seeded` - Message IDs of the seeded messages
    ///
    /// # Returns
    /// - New `TestContext` instance
    pub fn new(channel: Arc<FakeChannel>, seeded: Vec<u64>) -> Self {
        Self { channel, seeded }
    }

    /// Discord channel ID of the seeded channel.
    pub fn channel_id(&self) -> u64 {
        self.channel.channel_id()
    }
}
