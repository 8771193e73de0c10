//! The `concept-extract` command-line interface.
//!
//! A thin host around the library: it reads the request and document files,
//! calls the engine, and persists the patched document only when asked to.

use std::path::Path;
use std::process;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::ast::{format_table, Table};
use crate::cli::args::{Command, ExtractArgs};
use crate::concept::find_ambiguous_bindings;
use crate::config::ExtractorConfig;
use crate::diagnostics::ExtractError;
use crate::engine::{ConceptExtractor, ExtractionRequest};

pub mod args;
pub mod output;

/// Environment variable holding the log filter, e.g. `concept_extract=debug`.
pub const LOG_ENV: &str = "CONCEPT_EXTRACT_LOG";

/// The main entry point for the CLI.
pub fn run() {
    init_logging();
    let args = ExtractArgs::parse();

    let result = match args.command {
        Command::Extract {
            request,
            document,
            config,
            write,
            diff,
            json,
        } => handle_extract(&request, &document, config.as_deref(), write, diff, json),
        Command::Table { file } => handle_table(&file),
        Command::Lint { request } => handle_lint(&request),
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            output::print_error(e);
            process::exit(1);
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

// ============================================================================
// SUBCOMMAND HANDLERS - each returns Ok(false) for a clean, failing exit
// ============================================================================

fn handle_extract(
    request: &Path,
    document: &Path,
    config: Option<&Path>,
    write: bool,
    diff: bool,
    json: bool,
) -> Result<bool, ExtractError> {
    let config = match config {
        Some(path) => ExtractorConfig::load(path)?,
        None => ExtractorConfig::default(),
    };
    let request = ExtractionRequest::load(request)?;
    let original = read_file(document)?;

    let extractor = ConceptExtractor::new(config);
    let (extraction, patched) = extractor.extract_and_patch(&request, &original)?;

    if json {
        output::print_json(&extraction, &patched)?;
    } else if diff {
        output::print_diff(&extraction, &original, &patched);
    } else {
        output::print_extraction(&extraction, &patched);
    }

    if write {
        std::fs::write(document, &patched)
            .map_err(|e| ExtractError::io(document.display().to_string(), e))?;
        info!(path = %document.display(), range = %extraction.range, "wrote patched document");
    }
    Ok(true)
}

fn handle_table(file: &Path) -> Result<bool, ExtractError> {
    let source = read_file(file)?;
    let table: Table = serde_yaml::from_str(&source).map_err(|e| ExtractError::decode("table", e))?;
    print!("{}", format_table(&table)?);
    Ok(true)
}

fn handle_lint(request: &Path) -> Result<bool, ExtractError> {
    let request = ExtractionRequest::load(request)?;
    let findings = find_ambiguous_bindings(&request.steps);
    if findings.is_empty() {
        println!("No ambiguous table bindings.");
        return Ok(true);
    }
    for found in findings {
        output::print_warning(&found.into_error().to_string());
    }
    Ok(false)
}

fn read_file(path: &Path) -> Result<String, ExtractError> {
    std::fs::read_to_string(path).map_err(|e| ExtractError::io(path.display().to_string(), e))
}
