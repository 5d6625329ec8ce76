//! Server-side domain models and parameter types.
//!
//! This module contains the models used by the document store and the repositories
//! built on top of it: documents and their storage records, the wire-level message
//! shapes exchanged with the messaging collaborator, and typed documents such as
//! guild configuration.

pub mod document;
pub mod guild_config;
pub mod message;
