//! JSON output for normalized records

use crate::error::Result;
use crate::types::BookRecord;
use std::fs;
use std::path::{Path, PathBuf};

/// Serialize records to `path` as a pretty-printed UTF-8 JSON array.
///
/// serde_json never escapes non-ASCII text, so titles and authors stay
/// readable in the output file. The file is created only after serialization
/// succeeds, so a failed run never leaves a partial array behind.
pub fn write_records(records: &[BookRecord], path: &Path) -> Result<()> {
    let mut out = serde_json::to_string_pretty(records).map_err(crate::error::ParseError::Json)?;
    out.push('\n');
    fs::write(path, out)?;
    tracing::info!("wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Default output path for a given input: `<stem>_converted.json` next to it
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "books".to_string());
    input.with_file_name(format!("{stem}_converted.json"))
}
