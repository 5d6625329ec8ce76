use super::*;

/// Tests removing a guild's configuration.
///
/// Expected: true, then None on read and false on a second delete
#[tokio::test(start_paused = true)]
async fn deletes_config() {
    let test = TestBuilder::new()
        .with_record(CONFIGS_COLLECTION, "123456789", json!({ "newsChannel": "555" }))
        .build()
        .unwrap();
    let store = ready_store(&test).await;
    let repo = GuildConfigRepository::new(&store);

    assert!(repo.delete(123456789).await);
    assert!(repo.get(123456789).is_none());
    assert!(!repo.delete(123456789).await);
}
