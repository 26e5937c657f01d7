//! Json command implementation

use crate::prompt;
use anyhow::{bail, Result};
use bookport_core::decoder::JsonDecoder;
use std::path::{Path, PathBuf};

/// Input tried when the interactive prompt is left blank
const DEFAULT_INPUT: &str = "books_import.json";

/// Remap an exported JSON array to importable JSON
pub fn json(input: Option<&str>, output: Option<&str>) -> Result<()> {
    let interactive = input.is_none();
    let input = match input {
        Some(path) => PathBuf::from(path),
        None => {
            let answer = prompt::line("JSON export path: ")?;
            if answer.is_empty() {
                // unlike the sheet path, only fall back when the file is there
                let fallback = Path::new(DEFAULT_INPUT);
                if !fallback.exists() {
                    bail!("no input path given and default '{DEFAULT_INPUT}' does not exist");
                }
                println!("Using default input: {DEFAULT_INPUT}");
                fallback.to_path_buf()
            } else {
                PathBuf::from(answer)
            }
        }
    };

    let output = super::resolve_output(output, interactive)?;
    super::run_convert(&JsonDecoder::new(), &input, output.as_deref())
}
