//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs for
//! testing purposes. These factories create valid Serenity objects by deserializing
//! JSON, simulating what Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::message::create_test_message;
//!
//! let message = create_test_message(1001, 555, "DB:configs:guild1", &[]);
//! ```
//!
//! # Available Factories
//!
//! - `message::create_test_message` - Create Serenity Message objects
//! - `guild::create_unavailable_guild` - Create `guild_delete` event payloads

pub mod guild;
pub mod message;

pub use guild::create_unavailable_guild;
pub use message::create_test_message;
