//! Full-string pattern classification for text scalars.

use std::sync::LazyLock;

use regex::Regex;

use crate::schema::{FieldSchema, FieldType};

/// Classification patterns in priority order; the first full-string match
/// wins. Values are shape checks only, with no range validation, so
/// `"2024-13-99"` still classifies as a date.
static PATTERNS: LazyLock<Vec<(FieldType, Regex)>> = LazyLock::new(|| {
    [
        (FieldType::Date, r"\d{4}-\d{1,2}-\d{1,2}"),
        (
            FieldType::Datetime,
            r"\d{4}-\d{1,2}-\d{1,2}[\sT]\d{1,2}:\d{1,2}:\d{1,2}(?:\.\d{1,6})?",
        ),
        (FieldType::Time, r"\d{1,2}:\d{1,2}:\d{1,2}(?:\.\d{1,6})?"),
        (
            FieldType::Timestamp,
            r"\d{4}-\d{1,2}-\d{1,2}[\sT]\d{1,2}:\d{1,2}:\d{1,2}(?:\.\d{1,6})?(?:Z|[+-]\d{1,2}(?::\d{1,2})?)?",
        ),
    ]
    .into_iter()
    .map(|(field_type, pattern)| {
        let anchored = Regex::new(&format!(r"\A(?:{pattern})\z")).expect("valid pattern");
        (field_type, anchored)
    })
    .collect()
});

/// Classify a text scalar into a temporal type or plain `TEXT`.
///
/// The match must cover the whole string; partial matches never classify.
/// The result is always nullable, callers override the mode when the
/// value came out of a sequence.
pub fn classify_text(name: &str, value: &str) -> FieldSchema {
    for (field_type, pattern) in PATTERNS.iter() {
        if pattern.is_match(value) {
            return FieldSchema::scalar(name, *field_type);
        }
    }
    FieldSchema::scalar(name, FieldType::Text)
}
