//! The canonical book record - the fixed shape both converters emit

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One normalized book entry.
///
/// Field names follow the import schema of the consuming database, so the
/// serialized names differ from the Rust ones where the schema uses camelCase
/// or a Rust keyword. Columns/keys that don't classify onto a canonical field
/// are carried in `extra` and flattened back into the object on output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Position of the book in the source list, 1-based
    pub serial: u32,

    /// Book title
    pub title: String,

    /// Book category, e.g. 小说 / 科普
    #[serde(rename = "type")]
    pub kind: String,

    /// Author name
    pub author: String,

    /// Short description / blurb
    pub description: String,

    /// Suggested grade level
    #[serde(rename = "gradeLevel")]
    pub grade_level: String,

    /// Whether the book has been purchased
    pub purchased: bool,

    /// Whether the book has been read
    pub read: bool,

    /// Whether the book has been read intensively
    #[serde(rename = "intensiveRead")]
    pub intensive_read: bool,

    /// Cover image URL, empty until one is assigned
    pub cover: String,

    /// Unrecognized source columns, preserved verbatim in source order
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl BookRecord {
    /// Create a record with the given serial and all other fields defaulted
    pub fn with_serial(serial: u32) -> Self {
        Self {
            serial,
            ..Self::default()
        }
    }

    /// Canonical fields that must be non-empty for a complete record
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.is_empty() {
            missing.push("title");
        }
        if self.grade_level.is_empty() {
            missing.push("gradeLevel");
        }
        missing
    }
}
