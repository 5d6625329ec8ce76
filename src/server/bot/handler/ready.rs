//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. The first
//! ready event initializes the document store from the storage channel; later ones
//! (after a reconnect) leave the already populated cache alone.

use dioxus_logger::tracing;
use serenity::all::{Context, Ready};

use crate::server::{
    data::guild_config::GuildConfigRepository, messaging::MessagingClient, store::DocumentStore,
};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `store` - Document store to initialize
/// - `ctx` - Discord context (unused)
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready<M: MessagingClient>(
    store: &DocumentStore<M>,
    _ctx: Context,
    ready: Ready,
) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    if ensure_store_ready(store).await {
        let configured = GuildConfigRepository::new(store).all().len();
        tracing::info!("{} guilds have a stored config", configured);
    }
}

/// Initializes the store unless a previous ready event already did.
///
/// # Returns
/// - `true` - Store is ready
/// - `false` - Initialization failed; the next ready event retries
pub async fn ensure_store_ready<M: MessagingClient>(store: &DocumentStore<M>) -> bool {
    if store.is_ready() {
        tracing::debug!("Document store already initialized, skipping rebuild");
        return true;
    }

    store.initialize().await
}
