use super::*;

/// Tests creating a configuration.
///
/// Expected: true, stored under the guild ID with a fresh timestamp
#[tokio::test(start_paused = true)]
async fn creates_config() {
    let test = TestBuilder::new().build().unwrap();
    let store = ready_store(&test).await;
    let repo = GuildConfigRepository::new(&store);

    let config = GuildConfig {
        ticket_category: Some("42".to_string()),
        ..Default::default()
    };
    assert!(repo.upsert(123456789, config).await);

    let stored = repo.get(123456789).unwrap();
    assert_eq!(stored.ticket_category.as_deref(), Some("42"));
    assert!(stored.timestamp.is_some());
    assert!(store
        .get_document(CONFIGS_COLLECTION, "123456789")
        .is_some());
}

/// Tests replacing a configuration read back from the store.
///
/// Verifies that the stale timestamp carried by the read value is replaced and
/// that the existing message is edited.
///
/// Expected: true, new timestamp, one message in the channel
#[tokio::test(start_paused = true)]
async fn replaces_config_and_refreshes_timestamp() {
    let test = TestBuilder::new()
        .with_record(
            CONFIGS_COLLECTION,
            "123456789",
            json!({ "newsChannel": "555", "timestamp": "2020-01-01T00:00:00.000Z" }),
        )
        .build()
        .unwrap();
    let store = ready_store(&test).await;
    let repo = GuildConfigRepository::new(&store);

    let mut config = repo.get(123456789).unwrap();
    config.news_channel = Some("777".to_string());
    assert!(repo.upsert(123456789, config).await);

    let stored = repo.get(123456789).unwrap();
    assert_eq!(stored.news_channel.as_deref(), Some("777"));
    assert_ne!(stored.timestamp.as_deref(), Some("2020-01-01T00:00:00.000Z"));
    assert_eq!(test.channel.messages().len(), 1);
}
