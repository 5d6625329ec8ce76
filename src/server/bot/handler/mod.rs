use serenity::all::{Context, EventHandler, Guild, Ready, UnavailableGuild};
use serenity::async_trait;

use crate::server::{messaging::SerenityMessenger, store::DocumentStore};

pub mod guild;
pub mod ready;

#[cfg(test)]
mod test;

/// Discord bot event handler
pub struct Handler {
    pub store: DocumentStore<SerenityMessenger>,
}

impl Handler {
    pub fn new(store: DocumentStore<SerenityMessenger>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.store, ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.store, ctx, guild, is_new).await;
    }

    /// Called when the bot leaves a guild or a guild becomes unavailable
    async fn guild_delete(&self, ctx: Context, incomplete: UnavailableGuild, full: Option<Guild>) {
        guild::handle_guild_delete(&self.store, ctx, incomplete, full).await;
    }
}
