use super::*;

/// Tests reading a configuration seeded in channel history.
///
/// Expected: Some with the stored fields
#[tokio::test(start_paused = true)]
async fn returns_stored_config() {
    let test = TestBuilder::new()
        .with_record(
            CONFIGS_COLLECTION,
            "123456789",
            json!({ "newsChannel": "555", "modLogChannel": "777" }),
        )
        .build()
        .unwrap();
    let store = ready_store(&test).await;
    let repo = GuildConfigRepository::new(&store);

    let config = repo.get(123456789).unwrap();

    assert_eq!(config.news_channel.as_deref(), Some("555"));
    assert_eq!(config.mod_log_channel.as_deref(), Some("777"));
    assert!(config.ticket_category.is_none());
}

/// Tests reading a guild without configuration.
///
/// Expected: None
#[tokio::test(start_paused = true)]
async fn returns_none_for_unknown_guild() {
    let test = TestBuilder::new().build().unwrap();
    let store = ready_store(&test).await;
    let repo = GuildConfigRepository::new(&store);

    assert!(repo.get(123456789).is_none());
}
