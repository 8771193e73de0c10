//! User-facing output for the CLI: plain text, colored diffs, JSON and errors.

use std::io::Write;

use difference::{Changeset, Difference};
use miette::Report;
use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::diagnostics::ExtractError;
use crate::engine::Extraction;

#[derive(Serialize)]
struct JsonOutput<'a> {
    definition: &'a str,
    invocation: &'a str,
    range: crate::patch::LineRange,
    document: &'a str,
}

/// Renders an error with miette on stderr.
pub fn print_error(error: ExtractError) {
    let report = Report::new(error);
    eprintln!("{report:?}");
}

/// Prints the concept definition, then the patched document.
pub fn print_extraction(extraction: &Extraction, patched: &str) {
    let mut stdout = stdout();
    heading(&mut stdout, "concept");
    let _ = write!(stdout, "{}", extraction.definition);
    heading(&mut stdout, "document");
    let _ = writeln!(stdout, "{patched}");
}

/// Prints the concept definition, then a line diff from `original` to `patched`.
pub fn print_diff(extraction: &Extraction, original: &str, patched: &str) {
    let mut stdout = stdout();
    heading(&mut stdout, "concept");
    let _ = write!(stdout, "{}", extraction.definition);
    heading(&mut stdout, &format!("document (lines {})", extraction.range));
    let changeset = Changeset::new(original, patched, "\n");
    write_diff(&mut stdout, &changeset.diffs);
}

pub fn print_json(extraction: &Extraction, patched: &str) -> Result<(), ExtractError> {
    let output = JsonOutput {
        definition: &extraction.definition,
        invocation: &extraction.invocation,
        range: extraction.range,
        document: patched,
    };
    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| ExtractError::decode("JSON output", e))?;
    println!("{json}");
    Ok(())
}

pub fn print_warning(message: &str) {
    let mut stderr = StandardStream::stderr(color_choice(atty::Stream::Stderr));
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true));
    let _ = write!(stderr, "warning");
    let _ = stderr.reset();
    let _ = writeln!(stderr, ": {message}");
}

fn stdout() -> StandardStream {
    StandardStream::stdout(color_choice(atty::Stream::Stdout))
}

fn color_choice(stream: atty::Stream) -> ColorChoice {
    if atty::is(stream) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

fn heading(stdout: &mut StandardStream, title: &str) {
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true));
    let _ = writeln!(stdout, "--- {title} ---");
    let _ = stdout.reset();
    let _ = stdout.flush();
}

fn write_diff(stdout: &mut StandardStream, diffs: &[Difference]) {
    for diff in diffs {
        let (marker, color, text) = match diff {
            Difference::Same(x) => (' ', None, x),
            Difference::Add(x) => ('+', Some(Color::Green), x),
            Difference::Rem(x) => ('-', Some(Color::Red), x),
        };
        let _ = stdout.set_color(ColorSpec::new().set_fg(color));
        for line in text.split('\n') {
            let _ = writeln!(stdout, "{marker}{line}");
        }
    }
    let _ = stdout.reset();
}
