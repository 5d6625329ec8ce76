use super::*;
use crate::server::model::guild_config::GuildConfig;

/// Tests writing and reading a typed value.
///
/// Expected: fields round-trip and the stored timestamp is filled in
#[tokio::test(start_paused = true)]
async fn round_trips_typed_value() {
    let test = TestBuilder::new().build().unwrap();
    let store = ready_store(&test).await;
    let config = GuildConfig {
        news_channel: Some("555".to_string()),
        ..Default::default()
    };

    assert!(store.set_from("configs", "guild1", &config).await);

    let stored: GuildConfig = store.get_as("configs", "guild1").unwrap();
    assert_eq!(stored.news_channel.as_deref(), Some("555"));
    assert!(stored.ticket_category.is_none());
    assert!(stored.timestamp.is_some());

    let raw = store.get_document("configs", "guild1").unwrap();
    assert_eq!(raw["newsChannel"], "555");
    assert!(!raw.contains_key("ticketCategory"));
}

/// Tests rejecting values that do not serialize to a JSON object.
///
/// Expected: false, nothing sent
#[tokio::test(start_paused = true)]
async fn rejects_non_object_values() {
    let test = TestBuilder::new().build().unwrap();
    let store = ready_store(&test).await;

    assert!(!store.set_from("configs", "guild1", &vec![1, 2, 3]).await);
    assert!(!store.set_from("configs", "guild1", &"text").await);
    assert!(test.channel.sends().is_empty());
}

/// Tests reading a document whose shape does not match the requested type.
///
/// Expected: None
#[tokio::test(start_paused = true)]
async fn shape_mismatch_returns_none() {
    let test = TestBuilder::new()
        .with_record("configs", "guild1", json!({ "newsChannel": 42 }))
        .build()
        .unwrap();
    let store = ready_store(&test).await;

    assert!(store.get_as::<GuildConfig>("configs", "guild1").is_none());
    assert!(store.get_as::<GuildConfig>("configs", "missing").is_none());
}
