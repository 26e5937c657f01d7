//! JSON decoder - the remapping path
//!
//! Reads a JSON array exported with foreign key names (`seq`, `category`,
//! `intro`, `grade`, `deepRead`) and remaps each object onto the canonical
//! record shape. Includes a one-off title patch for a known bad record and a
//! warn-only completeness check.

use super::Decoder;
use crate::coerce::bool_from_str;
use crate::error::{ParseError, Result};
use crate::mapping::{classify_json_key, Field};
use crate::types::BookRecord;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Serial of the record carrying the known title typo
const TYPO_SERIAL: u32 = 11;
const TYPO_TITLE: &str = "哈里波特";
const FIXED_TITLE: &str = "哈利波特";

/// Decoder for foreign-keyed JSON exports
pub struct JsonDecoder;

impl JsonDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for JsonDecoder {
    fn decode(&self, path: &Path) -> Result<Vec<BookRecord>> {
        if !path.exists() {
            return Err(ParseError::InputNotFound(path.to_path_buf()).into());
        }

        let file = File::open(path)?;
        let data: Value = serde_json::from_reader(BufReader::new(file)).map_err(ParseError::Json)?;
        let Value::Array(items) = data else {
            return Err(ParseError::NotAnArray.into());
        };

        let mut records = Vec::with_capacity(items.len());
        for item in &items {
            let mut record = convert_object(item)?;
            fix_known_typo(&mut record);
            for field in record.missing_required() {
                tracing::warn!("record {} has an empty {}", record.serial, field);
            }
            records.push(record);
        }

        tracing::info!("converted {} records from {}", records.len(), path.display());
        Ok(records)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }
}

/// Remap one source object onto the canonical record shape.
///
/// Unrecognized keys are preserved in `extra` (nulls dropped); recognized
/// fields are coerced so the output never carries a null.
fn convert_object(item: &Value) -> Result<BookRecord> {
    let object = item.as_object().ok_or(ParseError::NotAnArray)?;

    let mut record = BookRecord::default();
    for (key, value) in object {
        match classify_json_key(key) {
            Some(Field::Serial) => record.serial = json_serial(value),
            Some(Field::Title) => record.title = json_text(value),
            Some(Field::Kind) => record.kind = json_text(value),
            Some(Field::Author) => record.author = json_text(value),
            Some(Field::Description) => record.description = json_text(value),
            Some(Field::GradeLevel) => record.grade_level = json_text(value),
            Some(Field::Purchased) => record.purchased = json_bool(value),
            Some(Field::Read) => record.read = json_bool(value),
            Some(Field::IntensiveRead) => record.intensive_read = json_bool(value),
            Some(Field::Cover) => record.cover = json_text(value),
            None => {
                if !value.is_null() {
                    record.extra.insert(key.clone(), value.clone());
                }
            }
        }
    }
    Ok(record)
}

/// Patch the mistyped surname in the record the export is known to ship with
fn fix_known_typo(record: &mut BookRecord) {
    if record.serial == TYPO_SERIAL && record.title.contains(TYPO_TITLE) {
        record.title = record.title.replace(TYPO_TITLE, FIXED_TITLE);
        tracing::info!("corrected title of record {}: {}", record.serial, record.title);
    }
}

fn json_serial(value: &Value) -> u32 {
    match value {
        Value::Number(n) => match n.as_u64() {
            Some(n) => u32::try_from(n).unwrap_or(0),
            // non-negative float serials truncate, anything else is 0
            None => n
                .as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.trunc() as u32)
                .unwrap_or(0),
        },
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn json_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

fn json_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => bool_from_str(s),
        _ => false,
    }
}
