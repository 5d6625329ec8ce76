//! Test factory for creating Serenity guild event payloads.

use serenity::all::UnavailableGuild;

/// Creates the payload of a `guild_delete` event.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `unavailable` - `true` for an outage, `false` when the bot was removed from the guild
///
/// # Returns
/// - `UnavailableGuild` - Event payload for testing
///
/// # Panics
/// - If the JSON cannot be deserialized (indicates invalid test data)
pub fn create_unavailable_guild(guild_id: u64, unavailable: bool) -> UnavailableGuild {
    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "unavailable": unavailable,
    }))
    .expect("Failed to create test UnavailableGuild")
}
