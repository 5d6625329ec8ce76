use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents};

use crate::server::{
    bot::handler::Handler, config::Config, error::AppError, messaging::SerenityMessenger,
    store::DocumentStore,
};

/// Builds the Discord bot client.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `store` - Document store the event handlers read and write
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client could not be built (invalid token, for example)
pub async fn init_bot(
    config: &Config,
    store: DocumentStore<SerenityMessenger>,
) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(store))
        .await?;

    Ok(client)
}

/// Runs the bot until the gateway connection is closed.
///
/// # Returns
/// - `Ok(())` - Bot shut down cleanly
/// - `Err(AppError)` - Connection to Discord failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
