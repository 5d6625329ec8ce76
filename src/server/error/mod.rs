//! Error types for the bot process and the document store.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves
//! as the top-level error type returned from startup and the bot runner, wrapping
//! domain-specific errors. Store operations report `StoreError` internally and convert
//! to `bool`/`Option` results at the public store boundary, logging on the way out.

pub mod config;
pub mod messaging;
pub mod store;

use thiserror::Error;

use crate::server::error::config::ConfigError;

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur while starting and running the
/// bot. Most variants use `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// HTTP client error from reqwest.
    ///
    /// Occurs when the attachment download client cannot be built.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Occurs when the gateway client cannot be built or
    /// the connection to Discord is lost.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
