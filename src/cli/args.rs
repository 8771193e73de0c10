//! Command-line arguments and subcommands for the `concept-extract` CLI.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "concept-extract",
    version,
    about = "Extract a run of specification steps into a reusable, parameterized concept."
)]
pub struct ExtractArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the concept and replace the selected lines with its invocation.
    Extract {
        /// YAML or JSON file holding the concept name, the steps and the line range.
        #[arg(short, long)]
        request: PathBuf,
        /// The specification document the steps were selected from.
        #[arg(short, long)]
        document: PathBuf,
        /// Optional YAML configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Write the patched document back to its file.
        #[arg(long)]
        write: bool,
        /// Show the document change as a line diff.
        #[arg(long, conflicts_with = "json")]
        diff: bool,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Format a table given as YAML or JSON (`headers` and `rows`).
    Table {
        #[arg(required = true)]
        file: PathBuf,
    },
    /// Report table names that the selected steps bind to differing tables.
    Lint {
        #[arg(short, long)]
        request: PathBuf,
    },
}
