use super::*;

/// Tests filtering a collection with a predicate.
///
/// Verifies that only matching documents are returned, ordered by ID, each with
/// its ID attached.
///
/// Expected: tickets 1 and 3
#[tokio::test(start_paused = true)]
async fn returns_matches_with_ids() {
    let test = TestBuilder::new()
        .with_record("tickets", "3", json!({ "status": "open" }))
        .with_record("tickets", "1", json!({ "status": "open" }))
        .with_record("tickets", "2", json!({ "status": "closed" }))
        .with_record("configs", "4", json!({ "status": "open" }))
        .build()
        .unwrap();
    let store = ready_store(&test).await;

    let open = store.find_documents("tickets", |document| document["status"] == "open");

    assert_eq!(
        open,
        vec![
            doc(json!({ "id": "1", "status": "open" })),
            doc(json!({ "id": "3", "status": "open" })),
        ]
    );
}

/// Tests that a document's own `id` field is not overwritten.
///
/// Expected: stored `id` value kept
#[tokio::test(start_paused = true)]
async fn keeps_existing_id_field() {
    let test = TestBuilder::new()
        .with_record("users", "u1", json!({ "id": "discord-123" }))
        .build()
        .unwrap();
    let store = ready_store(&test).await;

    let found = store.find_documents("users", |_| true);

    assert_eq!(found, vec![doc(json!({ "id": "discord-123" }))]);
}

/// Tests searching an unknown collection or with no matches.
///
/// Expected: empty results
#[tokio::test(start_paused = true)]
async fn returns_empty_without_matches() {
    let test = TestBuilder::new()
        .with_record("tickets", "1", json!({ "status": "closed" }))
        .build()
        .unwrap();
    let store = ready_store(&test).await;

    assert!(store
        .find_documents("tickets", |document| document["status"] == "open")
        .is_empty());
    assert!(store.find_documents("missing", |_| true).is_empty());
}
