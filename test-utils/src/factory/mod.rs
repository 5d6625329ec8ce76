//! Factory methods for creating test data.
//!
//! This module provides factory methods for producing stored-document messages in the
//! exact layout the store writes them, so history can be seeded without going through
//! the store itself.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let content = factory::message::inline_record("configs", "guild1", &json!({ "a": 1 }))?;
//! let (header, filename, data) =
//!     factory::message::attachment_record("configs", "guild1", &json!({ "a": 1 }))?;
//! ```

pub mod message;
