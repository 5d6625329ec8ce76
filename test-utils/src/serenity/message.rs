//! Test factory for creating Serenity Message objects.
//!
//! This module provides factory functions for creating mock Serenity `Message` structs
//! for testing purposes. These factories create valid Message objects by deserializing
//! JSON, simulating what Discord's channel history endpoint would return.

use serenity::all::Message;

/// Author ID used for every test message.
pub const TEST_AUTHOR_ID: u64 = 100_000_000_000_000_000;

/// Creates a test Serenity Message with customizable fields.
///
/// Creates a Message object by deserializing JSON with the provided values. Each
/// attachment is given an ID derived from the message ID, a size of zero and a proxy
/// URL equal to its URL. All other fields are set to reasonable defaults (not pinned,
/// no embeds, no mentions).
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Discord channel ID (snowflake)
/// - `content` - Message body
/// - `attachments` - `(filename, url)` pairs for attached files
///
/// # Returns
/// - `Message` - A valid Serenity Message struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::message::create_test_message;
///
/// let message = create_test_message(
///     1001,
///     555,
///     "DB:configs:guild1",
///     &[("configs_guild1.json", "https://cdn.discordapp.com/attachments/555/1001/configs_guild1.json")],
/// );
/// assert_eq!(message.attachments.len(), 1);
/// ```
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    content: &str,
    attachments: &[(&str, &str)],
) -> Message {
    let attachments: Vec<serde_json::Value> = attachments
        .iter()
        .enumerate()
        .map(|(index, (filename, url))| {
            serde_json::json!({
                "id": (message_id * 10 + index as u64 + 1).to_string(),
                "filename": filename,
                "size": 0,
                "url": url,
                "proxy_url": url,
                "content_type": "application/json; charset=utf-8",
            })
        })
        .collect();

    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "author": {
            "id": TEST_AUTHOR_ID.to_string(),
            "username": "channeldb",
            "discriminator": "0001",
            "global_name": null,
            "avatar": null,
            "bot": true,
        },
        "content": content,
        "timestamp": "2025-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "mention_channels": [],
        "attachments": attachments,
        "embeds": [],
        "reactions": [],
        "pinned": false,
        "type": 0,
        "components": [],
        "sticker_items": [],
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
