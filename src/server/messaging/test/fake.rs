use super::*;

/// Tests that editing a removed message reports `MessageNotFound`.
///
/// The store relies on this variant to fall back from editing to sending.
///
/// Expected: Err(MessagingError::MessageNotFound)
#[tokio::test]
async fn edit_of_missing_message_is_not_found() {
    let test = TestBuilder::new().with_message("hello").build().unwrap();
    let channel_id = ChannelId::new(test.channel_id());
    test.channel.remove_message(test.seeded[0]);

    let result = test
        .channel
        .edit_message(
            channel_id,
            MessageId::new(test.seeded[0]),
            OutgoingMessage {
                content: "edited".to_string(),
                attachment: None,
            },
        )
        .await;

    assert!(matches!(result, Err(MessagingError::MessageNotFound(id)) if id == test.seeded[0]));
}

/// Tests that an injected failure only affects the next call of that kind.
///
/// Expected: first send fails, second send succeeds
#[tokio::test]
async fn injected_failure_applies_once() {
    let test = TestBuilder::new().build().unwrap();
    let channel_id = ChannelId::new(test.channel_id());
    test.channel.fail_next(FakeOperation::Send);

    let message = OutgoingMessage {
        content: "DB:configs:a".to_string(),
        attachment: Some(OutgoingAttachment {
            filename: "configs_a.json".to_string(),
            data: b"{}".to_vec(),
        }),
    };

    let first = test.channel.send_message(channel_id, message.clone()).await;
    let second = test.channel.send_message(channel_id, message).await;

    assert!(matches!(first, Err(MessagingError::Other(_))));
    let id = second.unwrap();
    assert!(matches!(
        test.channel.calls().as_slice(),
        [FakeCall::Send { message_id, attachment: Some(name), .. }]
            if *message_id == id.get() && name == "configs_a.json"
    ));
}

/// Tests that fetching history of another channel is rejected.
///
/// Expected: Err(MessagingError::ChannelNotFound)
#[tokio::test]
async fn rejects_foreign_channel() {
    let test = TestBuilder::new().build().unwrap();

    let result = test
        .channel
        .fetch_recent_messages(ChannelId::new(42), 100)
        .await;

    assert!(matches!(result, Err(MessagingError::ChannelNotFound(42))));
}
