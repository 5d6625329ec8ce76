use dioxus_logger::tracing;
use std::collections::HashMap;

use crate::server::{
    messaging::MessagingClient, model::guild_config::GuildConfig, store::DocumentStore,
};

/// Collection holding one configuration document per guild, keyed by guild ID.
pub const CONFIGS_COLLECTION: &str = "configs";

pub struct GuildConfigRepository<'a, M> {
    store: &'a DocumentStore<M>,
}

impl<'a, M: MessagingClient> GuildConfigRepository<'a, M> {
    pub fn new(store: &'a DocumentStore<M>) -> Self {
        Self { store }
    }

    /// Finds the configuration of a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord's unique identifier for the guild
    ///
    /// # Returns
    /// - `Some(GuildConfig)` - Guild has a stored configuration
    /// - `None` - No configuration, store not initialized, or the stored document is
    ///   not a valid configuration
    pub fn get(&self, guild_id: u64) -> Option<GuildConfig> {
        self.store
            .get_as(CONFIGS_COLLECTION, &guild_id.to_string())
    }

    /// Creates or replaces the configuration of a guild.
    ///
    /// Any timestamp on `config` is discarded so the store records the time of this
    /// write.
    ///
    /// # Arguments
    /// - `guild_id` - Discord's unique identifier for the guild
    /// - `config` - New configuration
    ///
    /// # Returns
    /// - `true` - Configuration written
    /// - `false` - Write failed, see logs
    pub async fn upsert(&self, guild_id: u64, config: GuildConfig) -> bool {
        let config = GuildConfig {
            timestamp: None,
            ..config
        };

        self.store
            .set_from(CONFIGS_COLLECTION, &guild_id.to_string(), &config)
            .await
    }

    pub async fn delete(&self, guild_id: u64) -> bool {
        self.store
            .delete_document(CONFIGS_COLLECTION, &guild_id.to_string())
            .await
    }

    /// Returns every stored guild configuration keyed by guild ID.
    ///
    /// Documents whose ID is not a guild ID or whose content is not a valid
    /// configuration are skipped with a warning.
    pub fn all(&self) -> HashMap<u64, GuildConfig> {
        self.store
            .get_collection(CONFIGS_COLLECTION)
            .into_iter()
            .filter_map(|(id, document)| {
                let Ok(guild_id) = id.parse::<u64>() else {
                    tracing::warn!("Skipping config with non-numeric guild ID {:?}", id);
                    return None;
                };

                match serde_json::from_value(serde_json::Value::Object(document)) {
                    Ok(config) => Some((guild_id, config)),
                    Err(e) => {
                        tracing::warn!("Skipping invalid config for guild {}: {}", guild_id, e);
                        None
                    }
                }
            })
            .collect()
    }
}
