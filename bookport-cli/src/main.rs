//! Bookport CLI - batch converters for book-list imports

mod commands;
mod prompt;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bookport")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a spreadsheet of book records to importable JSON
    Sheet {
        /// Input spreadsheet path (prompted for when omitted)
        input: Option<String>,

        /// Output JSON path (defaults to <input stem>_converted.json)
        output: Option<String>,
    },

    /// Remap an exported JSON array to importable JSON
    Json {
        /// Input JSON path (prompted for when omitted)
        input: Option<String>,

        /// Output JSON path (defaults to <input stem>_converted.json)
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "bookport_cli=debug,bookport_core=debug"
    } else {
        "bookport_cli=info,bookport_core=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Sheet { input, output } => commands::sheet(input.as_deref(), output.as_deref()),

        Commands::Json { input, output } => commands::json(input.as_deref(), output.as_deref()),
    }
}
