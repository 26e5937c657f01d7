//! Error types for Bookport Core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ConvertError
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Top-level error type for all Bookport operations
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that occur while reading input files
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Invalid spreadsheet: {0}")]
    Sheet(String),

    #[error("Workbook contains no sheets")]
    EmptyWorkbook,

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON array of book objects")]
    NotAnArray,
}
