use super::*;

/// Walks a guild configuration through its whole lifecycle.
///
/// Creates, updates, restarts and deletes a document, checking the channel and
/// the cache after each step.
///
/// Expected: every step succeeds and the channel ends empty
#[tokio::test(start_paused = true)]
async fn guild_config_lifecycle() {
    let test = TestBuilder::new()
        .with_message("hello")
        .build()
        .unwrap();
    let store = ready_store(&test).await;

    assert!(
        store
            .set_document("configs", "guild1", doc(json!({ "newsChannel": "555" })))
            .await
    );
    let created = store.get_document("configs", "guild1").unwrap();
    assert_eq!(created["newsChannel"], "555");
    assert!(created.contains_key("timestamp"));
    assert_eq!(test.channel.messages().len(), 2);

    assert!(
        store
            .set_document("configs", "guild1", doc(json!({ "newsChannel": "777" })))
            .await
    );
    assert_eq!(test.channel.messages().len(), 2);

    // A restarted process sees the latest value.
    let restarted = ready_store(&test).await;
    assert_eq!(
        without_timestamp(restarted.get_document("configs", "guild1").unwrap()),
        doc(json!({ "newsChannel": "777" }))
    );

    assert!(restarted.delete_document("configs", "guild1").await);
    assert!(restarted.get_document("configs", "guild1").is_none());
    assert_eq!(test.channel.messages().len(), 1);
    assert!(restarted.get_collection("configs").is_empty());
}

/// Tests that the newest message wins when a key appears twice in history.
///
/// Expected: value of the later message
#[tokio::test(start_paused = true)]
async fn newest_duplicate_wins() {
    let test = TestBuilder::new()
        .with_record("configs", "guild1", json!({ "v": "old" }))
        .with_record("configs", "guild1", json!({ "v": "new" }))
        .build()
        .unwrap();
    let store = ready_store(&test).await;

    assert_eq!(
        store.get_document("configs", "guild1"),
        Some(doc(json!({ "v": "new" })))
    );

    // Updates target the newest message.
    assert!(store.set_document("configs", "guild1", doc(json!({ "v": "newer" }))).await);
    assert!(matches!(
        test.channel.edits().as_slice(),
        [FakeCall::Edit { message_id, .. }] if *message_id == test.seeded[1]
    ));
}
