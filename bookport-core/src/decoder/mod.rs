//! Decoders that normalize input files into book records

mod json;
mod sheet;

pub use json::JsonDecoder;
pub use sheet::SheetDecoder;

use crate::error::Result;
use crate::types::BookRecord;
use std::path::Path;

/// Trait for turning an input file into normalized book records
pub trait Decoder: Send + Sync {
    /// Read and normalize the file at `path`
    fn decode(&self, path: &Path) -> Result<Vec<BookRecord>>;

    /// File extensions this decoder supports
    fn supported_extensions(&self) -> &[&str];
}

/// Get the appropriate decoder for a file extension
pub fn decoder_for_extension(ext: &str) -> Option<Box<dyn Decoder>> {
    match ext.to_lowercase().as_str() {
        "xlsx" | "xls" => Some(Box::new(SheetDecoder::new())),
        "json" => Some(Box::new(JsonDecoder::new())),
        _ => None,
    }
}
