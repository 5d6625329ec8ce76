use super::*;

/// Tests reading before initialization.
///
/// Verifies the not-ready guard: the read returns nothing rather than failing, even
/// when the channel holds the document.
///
/// Expected: None, no remote calls
#[tokio::test(start_paused = true)]
async fn returns_none_before_initialize() {
    let test = TestBuilder::new()
        .with_record("configs", "guild1", json!({ "newsChannel": "555" }))
        .build()
        .unwrap();
    let store = store(&test);

    assert_eq!(store.get_document("configs", "guild1"), None);
    assert!(test.channel.calls().is_empty());
}

/// Tests reading a missing document.
///
/// Expected: None for an unknown ID and for an unknown collection
#[tokio::test(start_paused = true)]
async fn returns_none_for_missing_document() {
    let test = TestBuilder::new()
        .with_record("configs", "guild1", json!({}))
        .build()
        .unwrap();
    let store = ready_store(&test).await;

    assert_eq!(store.get_document("configs", "guild2"), None);
    assert_eq!(store.get_document("tickets", "guild1"), None);
}

/// Tests that reads are served from memory.
///
/// Expected: no remote calls beyond those made by initialize
#[tokio::test(start_paused = true)]
async fn reads_do_not_call_remote() {
    let test = TestBuilder::new()
        .with_record("configs", "guild1", json!({ "newsChannel": "555" }))
        .build()
        .unwrap();
    let store = ready_store(&test).await;
    let calls_after_init = test.channel.calls().len();

    for _ in 0..3 {
        assert!(store.get_document("configs", "guild1").is_some());
    }

    assert_eq!(test.channel.calls().len(), calls_after_init);
}
