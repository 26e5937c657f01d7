//! CLI command implementations

mod json;
mod sheet;

pub use json::json;
pub use sheet::sheet;

use crate::prompt;
use anyhow::{Context, Result};
use bookport_core::decoder::Decoder;
use bookport_core::writer::{default_output_path, write_records};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Decode with the given decoder and write the JSON array.
///
/// Shared by both conversion paths; the output file is only created after the
/// whole input has been decoded, so failures never leave partial output.
fn run_convert(decoder: &dyn Decoder, input: &Path, output: Option<&Path>) -> Result<()> {
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input));

    // Set up progress spinner
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    pb.set_message("Reading input file...");
    let records = decoder
        .decode(input)
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    pb.set_message("Writing JSON...");
    write_records(&records, &output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    pb.finish_with_message(format!(
        "Converted {} records -> {}",
        records.len(),
        output.display()
    ));

    for record in records.iter().take(3) {
        tracing::debug!(
            "sample: #{} {} ({})",
            record.serial,
            record.title,
            record.kind
        );
    }

    Ok(())
}

/// Resolve the output path argument.
///
/// An explicit argument always wins. In interactive mode (input was prompted
/// for) the output is prompted for too, blank keeping the default; otherwise
/// `None` lets the converter derive `<input stem>_converted.json`.
fn resolve_output(output: Option<&str>, interactive: bool) -> Result<Option<PathBuf>> {
    match output {
        Some(path) => Ok(Some(PathBuf::from(path))),
        None if interactive => {
            let answer = prompt::line("Output JSON path (blank for default): ")?;
            if answer.is_empty() {
                Ok(None)
            } else {
                Ok(Some(PathBuf::from(answer)))
            }
        }
        None => Ok(None),
    }
}
