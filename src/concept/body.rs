//! Renders the selected steps as the parameterized body of the new concept.

use tracing::trace;

use super::params::{push_placeholder, ConceptName};
use super::scanner::{scan, Fragment};
use crate::ast::{format_table, Step, StepArg};
use crate::diagnostics::ExtractError;

/// Prefix of every step line, in concepts and at call sites.
pub const STEP_PREFIX: &str = "* ";

/// Renders the full concept: the header line followed by one line per step.
pub fn render_definition(name: &ConceptName, steps: &[Step]) -> Result<String, ExtractError> {
    let mut definition = name.header();
    definition.push('\n');
    for step in steps {
        definition.push_str(&render_step(step, name)?);
    }
    Ok(definition)
}

/// Renders one step as a concept body line, terminated by a newline.
///
/// Literals declared by `name` are promoted to `<placeholder>`s, all others
/// keep their quotes. A table bound to a declared name becomes a placeholder;
/// any other table is rendered inline below the step.
pub fn render_step(step: &Step, name: &ConceptName) -> Result<String, ExtractError> {
    let mut line = String::from(STEP_PREFIX);
    line.push_str(&render_text(&step.text, name));

    match &step.arg {
        StepArg::None => {}
        StepArg::NamedTable { name: table_name, .. } if name.contains(table_name) => {
            line.push(' ');
            push_placeholder(&mut line, table_name);
        }
        StepArg::Table(table) | StepArg::NamedTable { table, .. } => {
            line.push_str(" \n");
            line.push_str(&format_table(table)?);
        }
    }

    // An inline table block already ends the line.
    if !line.ends_with('\n') {
        line.push('\n');
    }
    trace!(step = %step.text, rendered = %line.trim_end(), "rendered concept step");
    Ok(line)
}

fn render_text(text: &str, name: &ConceptName) -> String {
    let fragments = scan(text);
    let trim_tail = ends_with_literal(&fragments);
    let mut out = String::with_capacity(text.len());

    for (index, fragment) in fragments.iter().enumerate() {
        match *fragment {
            Fragment::Literal(value, _) if name.contains(value) => {
                push_placeholder(&mut out, value);
            }
            Fragment::Text(..) if trim_tail && index + 1 == fragments.len() => {}
            Fragment::Literal(_, span)
            | Fragment::Text(_, span)
            | Fragment::Unterminated(_, span) => {
                out.push_str(&text[span.start..span.end]);
            }
        }
    }
    out
}

/// True when the text ends with a literal followed only by whitespace.
fn ends_with_literal(fragments: &[Fragment<'_>]) -> bool {
    matches!(
        fragments,
        [.., Fragment::Literal(..), Fragment::Text(tail, _)] if tail.trim().is_empty()
    )
}
