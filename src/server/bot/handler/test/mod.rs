use crate::server::{
    bot::handler::{
        guild::{register_guild, remove_guild},
        ready::ensure_store_ready,
    },
    store::{DocumentStore, StoreSettings},
};
use serde_json::json;
use serenity::all::ChannelId;
use test_utils::{
    builder::TestBuilder,
    channel::{FakeCall, FakeChannel},
    context::TestContext,
    serenity::create_unavailable_guild,
};


fn store(test: &TestContext) -> DocumentStore<FakeChannel> {
    DocumentStore::new(
        test.channel.clone(),
        StoreSettings::new(ChannelId::new(test.channel_id())),
    )
}
