//! Cell value coercion for the tabular path
//!
//! Source sheets are hand-maintained, so boolean columns arrive as 是/否,
//! yes/no, 1/0 or real booleans, and the serial column as numbers or digit
//! strings. Everything funnels through the coercers here so a record never
//! carries a null where the schema wants a string or a flag.

use calamine::Data;
use serde_json::{Number, Value};

/// Strings treated as an affirmative flag value (lowercased, trimmed)
const TRUTHY: &[&str] = &[
    "1", "是", "yes", "true", "t", "y", "已购买", "已阅读", "已精读",
];

/// Strings treated as a negative flag value (lowercased, trimmed)
const FALSY: &[&str] = &[
    "0", "", "否", "no", "false", "f", "n", "未购买", "未阅读", "未精读",
];

/// Coerce a string to a flag. Unrecognized non-empty strings fall back to
/// generic truthiness and count as `true`.
pub fn bool_from_str(s: &str) -> bool {
    let normalized = s.trim().to_lowercase();
    if TRUTHY.contains(&normalized.as_str()) {
        return true;
    }
    if FALSY.contains(&normalized.as_str()) {
        return false;
    }
    !normalized.is_empty()
}

/// Coerce a spreadsheet cell to a flag. Empty and error cells are `false`.
pub fn bool_from_cell(cell: &Data) -> bool {
    match cell {
        Data::Empty | Data::Error(_) => false,
        Data::Bool(b) => *b,
        Data::Int(i) => *i != 0,
        Data::Float(f) => *f != 0.0,
        Data::String(s) => bool_from_str(s),
        Data::DateTime(_) | Data::DateTimeIso(_) | Data::DurationIso(_) => true,
    }
}

/// Coerce a spreadsheet cell to text. Empty cells become `""`, strings are
/// trimmed, numbers are stringified (integral floats without a trailing .0).
pub fn text_from_cell(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.is_finite() {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}

/// Coerce a spreadsheet cell to a serial number.
///
/// `None` means the cell was empty and the caller should substitute the
/// 1-based row position. A cell that holds a value but can't be read as a
/// non-negative integer coerces to 0.
pub fn serial_from_cell(cell: &Data) -> Option<u32> {
    match cell {
        Data::Empty => None,
        Data::Int(i) => Some(u32::try_from(*i).unwrap_or(0)),
        Data::Float(f) => {
            if f.is_finite() && *f >= 0.0 {
                Some(f.trunc() as u32)
            } else {
                Some(0)
            }
        }
        Data::Bool(b) => Some(u32::from(*b)),
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            Some(match trimmed.parse::<f64>() {
                Ok(n) if n.is_finite() && n >= 0.0 => n.trunc() as u32,
                _ => 0,
            })
        }
        Data::DateTime(_) | Data::DateTimeIso(_) | Data::DurationIso(_) | Data::Error(_) => Some(0),
    }
}

/// Convert a passthrough cell to a JSON value, `None` for empty cells so the
/// record builder can omit the column entirely.
pub fn value_from_cell(cell: &Data) -> Option<Value> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => Some(Value::String(s.clone())),
        Data::Bool(b) => Some(Value::Bool(*b)),
        Data::Int(i) => Some(Value::Number((*i).into())),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.is_finite() && f.abs() < i64::MAX as f64 {
                Some(Value::Number((*f as i64).into()))
            } else {
                Number::from_f64(*f).map(Value::Number)
            }
        }
        Data::DateTime(dt) => Number::from_f64(dt.as_f64()).map(Value::Number),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(Value::String(s.clone())),
    }
}
