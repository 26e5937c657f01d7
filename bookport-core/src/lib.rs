//! Bookport Core Library
//!
//! This crate provides the record type and conversion logic for the Bookport
//! book-list import tooling. Spreadsheet rows and foreign-keyed JSON objects
//! are both normalized into the same canonical [`BookRecord`] shape before
//! being written out as a JSON array.

pub mod coerce;
pub mod decoder;
pub mod error;
pub mod mapping;
pub mod types;
pub mod writer;

pub use error::{ConvertError, ParseError, Result};
pub use types::BookRecord;
