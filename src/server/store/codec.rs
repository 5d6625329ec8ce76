//! Record encoding and decoding.
//!
//! This is the single (de)serialization boundary of the store. A document is stored
//! as one message whose body starts with the header `DB:<collection>:<id>`. Small
//! documents follow the header as a fenced JSON block:
//!
//! ````text
//! DB:configs:guild1
//! ```json
//! {
//!   "newsChannel": "555",
//!   "timestamp": "2025-01-01T00:00:00.000Z"
//! }
//! ```
//! ````
//!
//! Documents whose pretty-printed JSON is longer than the inline limit, or whose
//! embedded body would not fit in a Discord message, are uploaded as a
//! `<collection>_<id>.json` attachment and the body carries only the header.
//!
//! Headers are split on `:`, so neither the collection nor the ID may contain a colon.
//! Keys that cannot be read back are rejected before anything is written.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use serenity::all::MessageId;

use crate::server::{
    error::store::StoreError,
    model::{
        document::{Document, DocumentKey},
        message::{OutgoingAttachment, OutgoingMessage},
    },
};

/// First header token of every stored record.
pub const RECORD_PREFIX: &str = "DB";

/// Field holding the time a document was written.
pub const TIMESTAMP_FIELD: &str = "timestamp";

/// Longest message body Discord accepts from a bot, in characters.
pub const MAX_MESSAGE_LENGTH: usize = 2_000;

const FENCE_OPEN: &str = "```json";
const FENCE_CLOSE: &str = "```";

/// Checks that a key survives the header round trip.
///
/// # Arguments
/// - `key` - Key to validate
///
/// # Returns
/// - `Ok(())` - Key can be encoded and parsed back unchanged
/// - `Err(StoreError::InvalidKey)` - Collection or ID is blank, padded with whitespace,
///   or contains `:` or a line break, or the header does not fit in a message
pub fn validate_key(key: &DocumentKey) -> Result<(), StoreError> {
    let part_reason = [&key.collection, &key.id].into_iter().find_map(|part| {
        if part.trim().is_empty() {
            Some("collection and ID must not be blank")
        } else if part.contains(':') {
            Some("collection and ID must not contain ':'")
        } else if part.contains(['\n', '\r']) {
            Some("collection and ID must not contain line breaks")
        } else if part.trim() != part.as_str() {
            Some("collection and ID must not have surrounding whitespace")
        } else {
            None
        }
    });
    let reason = part_reason.or_else(|| {
        (header(key).chars().count() > MAX_MESSAGE_LENGTH)
            .then_some("record header must fit in a Discord message")
    });

    match reason {
        Some(reason) => Err(StoreError::InvalidKey {
            collection: key.collection.clone(),
            id: key.id.clone(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Builds the `DB:<collection>:<id>` header.
pub fn header(key: &DocumentKey) -> String {
    format!("{}:{}:{}", RECORD_PREFIX, key.collection, key.id)
}

/// Builds the file name used when a record is stored as an attachment.
pub fn attachment_filename(key: &DocumentKey) -> String {
    format!("{}_{}.json", key.collection, key.id)
}

/// Prepares a document for storage.
///
/// Adds a `timestamp` field holding `now` (RFC 3339, millisecond precision, UTC) when
/// the document has none, and orders keys alphabetically at every nesting level so
/// stored documents have a reproducible textual form.
///
/// # Arguments
/// - `value` - Document as given by the caller
/// - `now` - Write time
///
/// # Returns
/// - `Document` - Canonical document to store and cache
pub fn canonicalize(mut value: Document, now: DateTime<Utc>) -> Document {
    if !value.contains_key(TIMESTAMP_FIELD) {
        value.insert(
            TIMESTAMP_FIELD.to_string(),
            Value::String(now.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
    }

    sort_keys(value)
}

fn sort_keys(document: Document) -> Document {
    let mut entries: Vec<(String, Value)> = document.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    entries
        .into_iter()
        .map(|(key, value)| (key, sort_value(value)))
        .collect()
}

fn sort_value(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(sort_keys(map)),
        Value::Array(items) => Value::Array(items.into_iter().map(sort_value).collect()),
        other => other,
    }
}

/// Encodes a document as an outgoing message.
///
/// # Arguments
/// - `key` - Document key
/// - `value` - Canonical document
/// - `inline_limit` - Largest pretty-printed JSON length, in characters, embedded in the body
///
/// # Returns
/// - `Ok(OutgoingMessage)` - Body with an embedded JSON block, or a header-only body
///   with a JSON attachment when the document exceeds `inline_limit` or the embedded
///   body would exceed `MAX_MESSAGE_LENGTH`
/// - `Err(StoreError::Encode)` - Document failed to serialize
pub fn encode(
    key: &DocumentKey,
    value: &Document,
    inline_limit: usize,
) -> Result<OutgoingMessage, StoreError> {
    let json = serde_json::to_string_pretty(value).map_err(StoreError::Encode)?;

    if json.chars().count() <= inline_limit {
        let content = format!("{}\n{}\n{}\n{}", header(key), FENCE_OPEN, json, FENCE_CLOSE);
        if content.chars().count() <= MAX_MESSAGE_LENGTH {
            return Ok(OutgoingMessage {
                content,
                attachment: None,
            });
        }
    }

    Ok(OutgoingMessage {
        content: header(key),
        attachment: Some(OutgoingAttachment {
            filename: attachment_filename(key),
            data: json.into_bytes(),
        }),
    })
}

/// Parses the record header of a message body.
///
/// The body is split on `:`; the first three tokens must be `DB`, the collection and
/// the ID. The ID token is cut at the first line break (where the JSON block starts)
/// and trimmed.
///
/// # Arguments
/// - `content` - Message body
///
/// # Returns
/// - `Some(DocumentKey)` - Body carries a record header
/// - `None` - Body is not a stored record, or its ID is blank
pub fn parse_header(content: &str) -> Option<DocumentKey> {
    let mut tokens = content.split(':');

    if tokens.next()? != RECORD_PREFIX {
        return None;
    }

    let collection = tokens.next()?;
    let id = tokens.next()?;
    let id = id.split('\n').next().unwrap_or_default().trim();

    if collection.trim().is_empty() || collection.contains('\n') || id.is_empty() {
        return None;
    }

    Some(DocumentKey::new(collection, id))
}

/// Extracts the JSON embedded in a record body, if any.
pub fn inline_json(content: &str) -> Option<&str> {
    let start = content.find(FENCE_OPEN)? + FENCE_OPEN.len();
    let rest = &content[start..];
    let end = rest.rfind(FENCE_CLOSE)?;

    Some(rest[..end].trim())
}

/// Decodes stored JSON into a document.
///
/// # Arguments
/// - `message_id` - Message the JSON came from, for error reporting
/// - `json` - Raw JSON bytes, from the message body or an attachment
///
/// # Returns
/// - `Ok(Document)` - JSON parsed to an object
/// - `Err(StoreError::Decode)` - JSON is malformed or not an object
pub fn decode(message_id: MessageId, json: &[u8]) -> Result<Document, StoreError> {
    let value: Value = serde_json::from_slice(json).map_err(|e| StoreError::Decode {
        message_id: message_id.get(),
        reason: e.to_string(),
    })?;

    match value {
        Value::Object(document) => Ok(document),
        _ => Err(StoreError::Decode {
            message_id: message_id.get(),
            reason: "stored value is not a JSON object".to_string(),
        }),
    }
}
