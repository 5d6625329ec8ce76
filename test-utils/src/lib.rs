//! Channeldb Test Utils
//!
//! Provides shared testing utilities for the channel-backed document store. This crate
//! offers an in-memory stand-in for a Discord channel along with a builder for seeding
//! it with stored documents, garbage messages and attachment-backed records.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **FakeChannel**: In-memory message log that records every call made against it
//! - **TestBuilder**: Fluent builder for seeding a channel's history
//! - **TestContext**: Test environment holding the seeded channel
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_store_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_record("configs", "guild1", serde_json::json!({ "newsChannel": "555" }))
//!         .with_message("hello there")
//!         .build()?;
//!
//!     let channel = test.channel.clone();
//!     // Hand the channel to the store under test...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod channel;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
