use super::*;

/// Tests converting a history message without attachments.
///
/// Verifies that the message ID and body are carried over unchanged.
///
/// Expected: RemoteMessage with no attachments
#[test]
fn converts_plain_message() {
    let message = create_test_message(1001, 555, "DB:configs:guild1\n```json\n{}\n```", &[]);

    let remote = remote_message(&message);

    assert_eq!(remote.id, MessageId::new(1001));
    assert_eq!(remote.content, "DB:configs:guild1\n```json\n{}\n```");
    assert!(remote.attachments.is_empty());
}

/// Tests converting a history message carrying a file attachment.
///
/// Verifies that attachment file names and download URLs are preserved in order.
///
/// Expected: RemoteMessage with one attachment
#[test]
fn converts_attachments() {
    let url = "https://cdn.discordapp.com/attachments/555/1002/configs_guild1.json";
    let message = create_test_message(1002, 555, "DB:configs:guild1", &[("configs_guild1.json", url)]);

    let remote = remote_message(&message);

    assert_eq!(
        remote.attachments,
        vec![RemoteAttachment {
            filename: "configs_guild1.json".to_string(),
            url: url.to_string(),
        }]
    );
}
