use super::*;

/// Tests listing every configuration.
///
/// Verifies that documents with non-numeric IDs or invalid content are skipped
/// and that documents of other collections are not included.
///
/// Expected: guilds 1 and 2 only
#[tokio::test(start_paused = true)]
async fn lists_valid_configs() {
    let test = TestBuilder::new()
        .with_record(CONFIGS_COLLECTION, "1", json!({ "newsChannel": "10" }))
        .with_record(CONFIGS_COLLECTION, "2", json!({ "ticketCategory": "20" }))
        .with_record(CONFIGS_COLLECTION, "global", json!({ "newsChannel": "30" }))
        .with_record(CONFIGS_COLLECTION, "3", json!({ "newsChannel": 40 }))
        .with_record("tickets", "4", json!({ "newsChannel": "50" }))
        .build()
        .unwrap();
    let store = ready_store(&test).await;
    let repo = GuildConfigRepository::new(&store);

    let configs = repo.all();

    let mut ids: Vec<u64> = configs.keys().copied().collect();
    ids.sort();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(configs[&1].news_channel.as_deref(), Some("10"));
    assert_eq!(configs[&2].ticket_category.as_deref(), Some("20"));
}
