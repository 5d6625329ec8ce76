use crate::server::{
    data::guild_config::{GuildConfigRepository, CONFIGS_COLLECTION},
    model::guild_config::GuildConfig,
    store::{DocumentStore, StoreSettings},
};
use serde_json::json;
use serenity::all::ChannelId;
use test_utils::{builder::TestBuilder, channel::FakeChannel, context::TestContext};

mod all;
mod delete;
mod get;
mod upsert;

/// Creates and initializes a store over the test channel.
async fn ready_store(test: &TestContext) -> DocumentStore<FakeChannel> {
    let store = DocumentStore::new(
        test.channel.clone(),
        StoreSettings::new(ChannelId::new(test.channel_id())),
    );
    assert!(store.initialize().await, "store failed to initialize");
    store
}
