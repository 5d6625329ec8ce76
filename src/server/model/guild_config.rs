//! Domain model for per-guild bot configuration.
//!
//! Guild configuration is stored as a document in the `configs` collection, keyed by
//! the guild's Discord ID. Field names are camelCase on the wire to stay compatible
//! with documents already present in channel history.

use serde::{Deserialize, Serialize};

/// Bot configuration for a single guild.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildConfig {
    /// Channel receiving announcement posts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub news_channel: Option<String>,
    /// Category under which ticket channels are created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_category: Option<String>,
    /// Channel receiving moderation log entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mod_log_channel: Option<String>,
    /// RFC 3339 time of the last write, filled in by the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}
