use crate::server::{
    model::document::{Document, DocumentKey},
    store::{codec, DocumentStore, StoreSettings},
};
use serde_json::json;
use serenity::all::{ChannelId, MessageId};
use std::time::Duration;
use test_utils::{
    builder::TestBuilder,
    channel::{FakeCall, FakeChannel, FakeOperation},
    context::TestContext,
    factory::message::oversized_value,
};

mod find_documents;
mod get_collection;
mod get_document;
mod scenario;
mod typed;

/// Builds store settings pointing at the test channel with default tunables.
fn settings(test: &TestContext) -> StoreSettings {
    StoreSettings::new(ChannelId::new(test.channel_id()))
}

/// Creates a store over the test channel without initializing it.
fn store(test: &TestContext) -> DocumentStore<FakeChannel> {
    DocumentStore::new(test.channel.clone(), settings(test))
}

/// Creates and initializes a store over the test channel.
async fn ready_store(test: &TestContext) -> DocumentStore<FakeChannel> {
    let store = store(test);
    assert!(store.initialize().await, "store failed to initialize");
    store
}

/// Converts a JSON object literal into a document.
fn doc(value: serde_json::Value) -> Document {
    value
        .as_object()
        .cloned()
        .expect("test document must be a JSON object")
}

/// Removes the `timestamp` field so documents can be compared with their input.
fn without_timestamp(mut document: Document) -> Document {
    document.remove(codec::TIMESTAMP_FIELD);
    document
}
