use super::*;

/// Tests that collections are isolated from one another.
///
/// Expected: a document written to `a` is absent from `b`
#[tokio::test(start_paused = true)]
async fn collections_are_isolated() {
    let test = TestBuilder::new().build().unwrap();
    let store = ready_store(&test).await;

    assert!(store.set_document("a", "1", doc(json!({ "v": 1 }))).await);

    assert!(store.get_collection("b").is_empty());
    let a = store.get_collection("a");
    assert_eq!(a.len(), 1);
    assert_eq!(without_timestamp(a["1"].clone()), doc(json!({ "v": 1 })));
}

/// Tests listing an unknown collection.
///
/// Expected: empty mapping
#[tokio::test(start_paused = true)]
async fn unknown_collection_is_empty() {
    let test = TestBuilder::new().build().unwrap();
    let store = ready_store(&test).await;

    assert!(store.get_collection("nothing").is_empty());
}

/// Tests listing before initialization.
///
/// Expected: empty mapping
#[tokio::test(start_paused = true)]
async fn empty_before_initialize() {
    let test = TestBuilder::new()
        .with_record("configs", "a", json!({}))
        .build()
        .unwrap();
    let store = store(&test);

    assert!(store.get_collection("configs").is_empty());
}
