use serde_json::Value;
use std::sync::Arc;

use crate::{channel::FakeChannel, context::TestContext, error::TestError, factory::message};

/// Default channel ID for seeded test channels.
pub const TEST_CHANNEL_ID: u64 = 555_000_000_000_000_001;

/// A message to seed into the channel history.
enum Seed {
    Inline {
        collection: String,
        id: String,
        value: Value,
    },
    Attachment {
        collection: String,
        id: String,
        value: Value,
    },
    Raw {
        content: String,
        attachment: Option<(String, Vec<u8>)>,
    },
}

/// Builder for creating test contexts with a seeded channel history.
///
/// Provides a fluent interface for configuring the fake channel's history. Seeds are
/// posted in the order they were added, so later seeds get newer message IDs.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_record("configs", "a", json!({ "n": 1 }))
///     .with_message("not a record")
///     .with_attachment_record("configs", "b", json!({ "n": 2 }))
///     .build()?;
/// ```
pub struct TestBuilder {
    channel_id: u64,
    seeds: Vec<Seed>,
    unresolvable: bool,
}

impl TestBuilder {
    /// Creates a new test builder with an empty history.
    ///
    /// # Returns
    /// - New `TestBuilder` instance using [`TEST_CHANNEL_ID`]
    pub fn new() -> Self {
        Self {
            channel_id: TEST_CHANNEL_ID,
            seeds: Vec::new(),
            unresolvable: false,
        }
    }

    /// Overrides the channel ID.
    pub fn with_channel_id(mut self, channel_id: u64) -> Self {
        self.channel_id = channel_id;
        self
    }

    /// Seeds a stored document with its JSON embedded in the message body.
    ///
    /// # Arguments
    /// - `collection` - Collection name
    /// - `id` - Document ID
    /// - `value` - Document value, must be a JSON object
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_record(mut self, collection: &str, id: &str, value: Value) -> Self {
        self.seeds.push(Seed::Inline {
            collection: collection.to_string(),
            id: id.to_string(),
            value,
        });
        self
    }

    /// Seeds a stored document whose JSON lives in a file attachment.
    ///
    /// # Arguments
    /// - `collection` - Collection name
    /// - `id` - Document ID
    /// - `value` - Document value, must be a JSON object
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_attachment_record(mut self, collection: &str, id: &str, value: Value) -> Self {
        self.seeds.push(Seed::Attachment {
            collection: collection.to_string(),
            id: id.to_string(),
            value,
        });
        self
    }

    /// Seeds an arbitrary message body with no attachment.
    pub fn with_message(mut self, content: &str) -> Self {
        self.seeds.push(Seed::Raw {
            content: content.to_string(),
            attachment: None,
        });
        self
    }

    /// Seeds an arbitrary message body with a single attachment.
    pub fn with_message_attachment(mut self, content: &str, filename: &str, data: &[u8]) -> Self {
        self.seeds.push(Seed::Raw {
            content: content.to_string(),
            attachment: Some((filename.to_string(), data.to_vec())),
        });
        self
    }

    /// Makes the channel fail to resolve.
    pub fn unresolvable(mut self) -> Self {
        self.unresolvable = true;
        self
    }

    /// Builds the test context, posting every seed into a fresh fake channel.
    ///
    /// Seeds are not recorded as calls, so assertions on `FakeChannel::calls` only see
    /// operations made by the code under test.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context holding the seeded channel
    /// - `Err(TestError)` - A seeded record was invalid
    pub fn build(self) -> Result<TestContext, TestError> {
        let channel = FakeChannel::new(self.channel_id);
        let mut seeded = Vec::with_capacity(self.seeds.len());

        for seed in self.seeds {
            let id = match seed {
                Seed::Inline {
                    collection,
                    id,
                    value,
                } => {
                    let content = message::inline_record(&collection, &id, &value)?;
                    channel.push_message(&content, None)
                }
                Seed::Attachment {
                    collection,
                    id,
                    value,
                } => {
                    let (header, filename, data) =
                        message::attachment_record(&collection, &id, &value)?;
                    channel.push_message(&header, Some((&filename, &data)))
                }
                Seed::Raw {
                    content,
                    attachment,
                } => channel.push_message(
                    &content,
                    attachment
                        .as_ref()
                        .map(|(filename, data)| (filename.as_str(), data.as_slice())),
                ),
            };
            seeded.push(id);
        }

        if self.unresolvable {
            channel.set_unresolvable();
        }

        Ok(TestContext::new(Arc::new(channel), seeded))
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
