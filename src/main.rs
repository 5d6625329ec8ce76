use dioxus_logger::tracing;

use channeldb::server::{bot, config::Config, error::AppError, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_logger(config.log_level);

    // Initialized by the bot's ready event.
    let store = startup::setup_store(&config)?;

    tracing::info!(
        "Using channel {} as document storage",
        config.database_channel_id
    );

    let client = bot::start::init_bot(&config, store).await?;
    bot::start::start_bot(client).await
}
