//! Typed repositories over document store collections.
//!
//! Each repository owns the naming and shape of one collection and converts between
//! stored documents and domain models, so handlers never deal with raw JSON.

pub mod guild_config;

#[cfg(test)]
mod test;
