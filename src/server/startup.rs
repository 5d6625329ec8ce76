use dioxus_logger::tracing::Level;
use serenity::http::Http;
use std::sync::Arc;

use crate::server::{
    config::Config,
    error::AppError,
    messaging::SerenityMessenger,
    store::{DocumentStore, StoreSettings},
};

/// Installs the global `tracing` subscriber.
///
/// A second call keeps the existing subscriber and reports the failure on stderr,
/// since no logger is available at that point.
pub fn init_logger(level: Level) {
    if let Err(e) = dioxus_logger::init(level) {
        eprintln!("Failed to initialize logger: {}", e);
    }
}

/// Builds the HTTP client used to download record attachments.
///
/// Redirects are disabled; attachment URLs point directly at Discord's CDN.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend failed to initialize
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Creates the Discord REST client used by the document store.
pub fn setup_discord_http(config: &Config) -> Arc<Http> {
    Arc::new(Http::new(&config.discord_bot_token))
}

/// Creates the document store backed by the configured storage channel.
///
/// The store spawns its write worker immediately but stays uninitialized until the
/// bot's ready event runs the reconstruction scan.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token, channel and tunables
///
/// # Returns
/// - `Ok(DocumentStore)` - Uninitialized store
/// - `Err(AppError)` - Attachment download client could not be built
pub fn setup_store(config: &Config) -> Result<DocumentStore<SerenityMessenger>, AppError> {
    let messenger = SerenityMessenger::new(setup_discord_http(config), setup_reqwest_client()?);

    Ok(DocumentStore::new(
        Arc::new(messenger),
        StoreSettings::from_config(config),
    ))
}
