//! Sheet command implementation

use crate::prompt;
use anyhow::Result;
use bookport_core::decoder::SheetDecoder;
use std::path::Path;

/// Input used when the interactive prompt is left blank
const DEFAULT_INPUT: &str = "books.xlsx";

/// Convert a spreadsheet of book records to importable JSON
pub fn sheet(input: Option<&str>, output: Option<&str>) -> Result<()> {
    let interactive = input.is_none();
    let input = match input {
        Some(path) => path.to_string(),
        None => {
            let answer = prompt::line("Spreadsheet path: ")?;
            if answer.is_empty() {
                println!("Using default input: {DEFAULT_INPUT}");
                DEFAULT_INPUT.to_string()
            } else {
                answer
            }
        }
    };

    let lower = input.to_lowercase();
    if !lower.ends_with(".xlsx") && !lower.ends_with(".xls") {
        let go_on = prompt::confirm("Input extension is not .xlsx/.xls, continue anyway?")?;
        if !go_on {
            println!("Conversion cancelled");
            return Ok(());
        }
    }

    let output = super::resolve_output(output, interactive)?;
    super::run_convert(&SheetDecoder::new(), Path::new(&input), output.as_deref())
}
