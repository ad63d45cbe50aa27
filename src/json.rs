//! JSON utility functions
//!
//! Text helpers shared by the analyzer, searcher and extractor.

use std::borrow::Cow;

use serde_json::Value;

/// Marker appended to text cut down by [`truncate_chars`]
pub const ELLIPSIS: &str = "...";

/// Render a JSON value as display text
///
/// Strings render as their raw contents (no quotes, no escaping). Every other
/// value renders as compact JSON, so `true`, `42` and `{"a":1}` come out as
/// written in a document.
///
/// # Examples
/// ```
/// use prompt_tweaks::json::stringify;
/// use serde_json::json;
///
/// assert_eq!(stringify(&json!("hello")), "hello");
/// assert_eq!(stringify(&json!({"a": 1})), r#"{"a":1}"#);
/// ```
pub fn stringify(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

/// Length of display text in Unicode scalar values
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Keep the first `limit` characters of `text`, appending [`ELLIPSIS`] when
/// anything was cut
///
/// Text of exactly `limit` characters is returned unchanged.
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_pos, _)) => format!("{}{}", &text[..byte_pos], ELLIPSIS),
        None => text.to_string(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod json_tests;
