//! Free-text search over records.
//!
//! A record matches a query when the lowercased query is a substring of the
//! record's serialized text (see [`serialize_record`]).

use crate::record::Record;

/// Separator placed between field values in the serialized text.
///
/// U+001F (unit separator) never appears in typed queries, so a query cannot
/// match across a field boundary.
pub const FIELD_SEPARATOR: char = '\u{1f}';

/// Serializes a record into the lowercased text searched by queries.
///
/// The text is the [`Value::to_text`](crate::Value::to_text) form of every
/// field in [`Record::FIELDS`], joined with [`FIELD_SEPARATOR`].
pub fn serialize_record<T: Record>(record: &T) -> String {
    let mut text = String::new();
    for (i, field) in T::FIELDS.iter().enumerate() {
        if i > 0 {
            text.push(FIELD_SEPARATOR);
        }
        text.push_str(&record.field_value(field).to_text());
    }
    text.to_lowercase()
}

/// Returns `true` if `record` matches the free-text `query`.
///
/// Matching is case-insensitive and an empty query matches every record.
pub fn matches<T: Record>(record: &T, query: &str) -> bool {
    SearchQuery::new(query).matches(record)
}

/// A free-text query, lowercased once up front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    needle: String,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        let raw = query.into();
        let needle = raw.to_lowercase();
        SearchQuery { raw, needle }
    }

    /// The query as typed.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches<T: Record>(&self, record: &T) -> bool {
        self.is_empty() || serialize_record(record).contains(&self.needle)
    }
}
