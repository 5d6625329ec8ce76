//! Stored-document message factory.
//!
//! Produces message bodies and attachments in the store's wire layout:
//!
//! ```text
//! DB:<collection>:<id>
//! ```json
//! <pretty JSON>
//! ```
//! ```
//!
//! or a header-only body carrying a `<collection>_<id>.json` attachment.

use serde_json::Value;

use crate::error::TestError;

/// Header prefix identifying stored-document messages.
pub const RECORD_PREFIX: &str = "DB";

/// Builds the `DB:<collection>:<id>` header line.
pub fn header(collection: &str, id: &str) -> String {
    format!("{}:{}:{}", RECORD_PREFIX, collection, id)
}

/// Builds the attachment file name used for oversized records.
pub fn attachment_filename(collection: &str, id: &str) -> String {
    format!("{}_{}.json", collection, id)
}

/// Builds a message body with the document embedded as a fenced JSON block.
///
/// # Arguments
/// - `collection` - Collection name
/// - `id` - Document ID
/// - `value` - Document value, must be a JSON object
///
/// # Returns
/// - `Ok(String)` - Full message body
/// - `Err(TestError)` - Value is not an object or failed to serialize
pub fn inline_record(collection: &str, id: &str, value: &Value) -> Result<String, TestError> {
    let json = pretty_object(collection, id, value)?;

    Ok(format!("{}\n```json\n{}\n```", header(collection, id), json))
}

/// Builds the header, file name and file content of an attachment-backed record.
///
/// # Arguments
/// - `collection` - Collection name
/// - `id` - Document ID
/// - `value` - Document value, must be a JSON object
///
/// # Returns
/// - `Ok((header, filename, data))` - Parts of the attachment-backed message
/// - `Err(TestError)` - Value is not an object or failed to serialize
pub fn attachment_record(
    collection: &str,
    id: &str,
    value: &Value,
) -> Result<(String, String, Vec<u8>), TestError> {
    let json = pretty_object(collection, id, value)?;

    Ok((
        header(collection, id),
        attachment_filename(collection, id),
        json.into_bytes(),
    ))
}

/// Builds a JSON object whose pretty-printed form is longer than `min_len` characters.
pub fn oversized_value(min_len: usize) -> Value {
    serde_json::json!({
        "padding": "x".repeat(min_len),
        "kind": "oversized",
    })
}

fn pretty_object(collection: &str, id: &str, value: &Value) -> Result<String, TestError> {
    if !value.is_object() {
        return Err(TestError::NotAnObject {
            collection: collection.to_string(),
            id: id.to_string(),
        });
    }

    Ok(serde_json::to_string_pretty(value)?)
}
