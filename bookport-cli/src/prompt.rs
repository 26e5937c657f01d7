//! Interactive prompts for paths not given on the command line

use std::io::{self, Write};

/// Print `message` and read one trimmed line from stdin
pub fn line(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}

/// Ask a y/n question; anything but `y` counts as no
pub fn confirm(message: &str) -> io::Result<bool> {
    let answer = line(&format!("{message} (y/n): "))?;
    Ok(answer.eq_ignore_ascii_case("y"))
}
