//! Discord bot integration for the document store.
//!
//! The bot owns the gateway connection. Its ready event triggers the store's
//! reconstruction scan, and guild events keep per-guild configuration documents in
//! step with the guilds the bot belongs to.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive events about guild creation, updates, and deletion
//! - `GUILD_MESSAGES` - Access messages in guild channels, including the storage channel

pub mod handler;
pub mod start;
