//! Discord-channel-backed document store and the bot that hosts it.
//!
//! This module contains the complete implementation: a key-value store for JSON
//! documents that persists every document as a message in one Discord channel, plus
//! the bot process that owns the gateway connection and uses the store.
//!
//! # Architecture
//!
//! - **Store** (`store/`) - In-memory cache, write queue and reconstruction scan
//! - **Messaging** (`messaging/`) - Remote channel operations behind the `MessagingClient` trait
//! - **Data Layer** (`data/`) - Typed repositories over store collections
//! - **Model Layer** (`model/`) - Documents, wire messages and domain models
//! - **Error Layer** (`error/`) - Application error types
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Startup** (`startup`) - Logger, HTTP clients and store construction
//! - **Bot** (`bot/`) - Discord bot event handlers and gateway client

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod messaging;
pub mod model;
pub mod startup;
pub mod store;
