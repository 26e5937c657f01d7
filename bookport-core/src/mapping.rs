//! Header and key classification onto canonical record fields
//!
//! The tabular path classifies free-form header text by substring matching
//! against an ordered keyword table; the JSON path uses an exact key lookup.
//! Both resolve to the same [`Field`] identifiers.

/// A canonical field of the book record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Serial,
    Title,
    Kind,
    Author,
    Description,
    GradeLevel,
    Purchased,
    Read,
    IntensiveRead,
    Cover,
}

impl Field {
    /// The serialized JSON name of this field
    pub fn json_name(self) -> &'static str {
        match self {
            Field::Serial => "serial",
            Field::Title => "title",
            Field::Kind => "type",
            Field::Author => "author",
            Field::Description => "description",
            Field::GradeLevel => "gradeLevel",
            Field::Purchased => "purchased",
            Field::Read => "read",
            Field::IntensiveRead => "intensiveRead",
            Field::Cover => "cover",
        }
    }
}

/// Every canonical field, in output order
pub const ALL_FIELDS: &[Field] = &[
    Field::Serial,
    Field::Title,
    Field::Kind,
    Field::Author,
    Field::Description,
    Field::GradeLevel,
    Field::Purchased,
    Field::Read,
    Field::IntensiveRead,
    Field::Cover,
];

/// Fields a usable import is expected to carry; a sheet whose headers never
/// produce one of these gets a warning.
pub const REQUIRED_FIELDS: &[Field] = &[
    Field::Serial,
    Field::Title,
    Field::Kind,
    Field::Author,
    Field::GradeLevel,
];

/// Ordered header classification rules, first match wins.
///
/// A header containing keywords from several rules resolves to the earliest
/// rule, so the order here is part of the contract.
const HEADER_RULES: &[(&[&str], Field)] = &[
    (&["序号"], Field::Serial),
    (&["书名"], Field::Title),
    (&["书籍类型", "类型"], Field::Kind),
    (&["作者"], Field::Author),
    (&["简介", "描述"], Field::Description),
    (&["适合年级", "年级"], Field::GradeLevel),
    (&["是否购买", "购买"], Field::Purchased),
    (&["是否阅读", "阅读"], Field::Read),
    (&["是否精读", "精读"], Field::IntensiveRead),
];

/// Classify a spreadsheet header onto a canonical field.
///
/// Matching is case-insensitive on the trimmed header. A header that already
/// equals a canonical JSON name counts as that field, so re-importing a
/// previously converted sheet lands on the same shape. Returns `None` for
/// headers that should pass through unchanged.
pub fn classify_header(header: &str) -> Option<Field> {
    let normalized = header.trim().to_lowercase();

    for (keywords, field) in HEADER_RULES {
        if keywords.iter().any(|kw| normalized.contains(kw)) {
            return Some(*field);
        }
    }

    ALL_FIELDS
        .iter()
        .copied()
        .find(|field| field.json_name().to_lowercase() == normalized)
}

/// Resolve a JSON key onto a canonical field (exact lookup).
///
/// Accepts both the foreign export schema (`seq`, `category`, `intro`,
/// `grade`, `deepRead`) and the canonical names themselves, so running the
/// remapper over already-normalized data is a no-op for every fixed field.
pub fn classify_json_key(key: &str) -> Option<Field> {
    match key {
        "seq" | "serial" => Some(Field::Serial),
        "title" => Some(Field::Title),
        "category" | "type" => Some(Field::Kind),
        "author" => Some(Field::Author),
        "intro" | "description" => Some(Field::Description),
        "grade" | "gradeLevel" => Some(Field::GradeLevel),
        "purchased" => Some(Field::Purchased),
        "read" => Some(Field::Read),
        "deepRead" | "intensiveRead" => Some(Field::IntensiveRead),
        "cover" => Some(Field::Cover),
        _ => None,
    }
}
