//! Guild event handlers.
//!
//! `guild_create` fires on startup for every guild the bot is in and when it joins a
//! new one. A newly joined guild without a stored configuration gets an empty one.
//! Events arriving before the store is initialized are ignored.
//! `guild_delete` fires both when the bot is removed from a guild and when a guild
//! goes unavailable during an outage. Only the former drops the guild's configuration.

use dioxus_logger::tracing;
use serenity::all::{Context, Guild, UnavailableGuild};

use crate::server::{
    data::guild_config::GuildConfigRepository, messaging::MessagingClient,
    model::guild_config::GuildConfig, store::DocumentStore,
};

/// Handles the guild_create event.
///
/// # Arguments
/// - `store` - Document store holding guild configurations
/// - `_ctx` - Discord context (unused)
/// - `guild` - Guild that became available
/// - `is_new` - Whether the bot just joined this guild
pub async fn handle_guild_create<M: MessagingClient>(
    store: &DocumentStore<M>,
    _ctx: Context,
    guild: Guild,
    is_new: Option<bool>,
) {
    tracing::debug!(
        "Guild create event: {} ({}) - new: {}",
        guild.name,
        guild.id,
        is_new.unwrap_or(false)
    );

    register_guild(store, guild.id.get(), is_new.unwrap_or(false)).await;
}

/// Stores an empty configuration for a newly joined guild.
///
/// # Arguments
/// - `store` - Document store holding guild configurations
/// - `guild_id` - Guild that became available
/// - `is_new` - Whether the bot just joined the guild
///
/// # Returns
/// - `true` - An empty configuration was written
/// - `false` - Store not initialized yet, guild not new, already configured, or the
///   write failed
pub async fn register_guild<M: MessagingClient>(
    store: &DocumentStore<M>,
    guild_id: u64,
    is_new: bool,
) -> bool {
    if !store.is_ready() {
        tracing::debug!("Document store not ready, skipping guild {}", guild_id);
        return false;
    }

    let repo = GuildConfigRepository::new(store);
    if !is_new || repo.get(guild_id).is_some() {
        return false;
    }

    let created = repo.upsert(guild_id, GuildConfig::default()).await;
    if created {
        tracing::info!("Joined guild {}, created an empty config", guild_id);
    }

    created
}

/// Handles the guild_delete event.
///
/// # Arguments
/// - `store` - Document store holding guild configurations
/// - `_ctx` - Discord context (unused)
/// - `incomplete` - Guild ID and whether the guild merely became unavailable
/// - `_full` - Cached guild data, if any
pub async fn handle_guild_delete<M: MessagingClient>(
    store: &DocumentStore<M>,
    _ctx: Context,
    incomplete: UnavailableGuild,
    _full: Option<Guild>,
) {
    remove_guild(store, incomplete).await;
}

/// Drops the configuration of a guild the bot was removed from.
///
/// # Returns
/// - `true` - A stored configuration was deleted
/// - `false` - Store not initialized yet, guild is only unavailable, or it had no
///   configuration
pub async fn remove_guild<M: MessagingClient>(
    store: &DocumentStore<M>,
    incomplete: UnavailableGuild,
) -> bool {
    let guild_id = incomplete.id.get();

    if !store.is_ready() {
        tracing::debug!("Document store not ready, skipping guild {}", guild_id);
        return false;
    }

    if incomplete.unavailable {
        tracing::warn!("Guild {} became unavailable, keeping its config", guild_id);
        return false;
    }

    let removed = GuildConfigRepository::new(store).delete(guild_id).await;
    if removed {
        tracing::info!("Removed from guild {}, deleted its config", guild_id);
    } else {
        tracing::debug!("Removed from guild {}, no config to delete", guild_id);
    }

    removed
}
