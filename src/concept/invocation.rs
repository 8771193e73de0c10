//! Call-site text that replaces the extracted steps.

use std::collections::HashMap;

use tracing::debug;

use super::body::STEP_PREFIX;
use super::params::ConceptName;
use super::scanner::{scan, Fragment};
use crate::ast::{format_table, Step, Table};
use crate::diagnostics::ExtractError;

/// A step that binds a table to a shared parameter name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableBinding<'a> {
    pub name: &'a str,
    pub table: &'a Table,
    /// 1-based position of the binding step within the selection.
    pub step: usize,
}

/// Every named, non-empty table binding, in step order.
pub fn named_tables(steps: &[Step]) -> impl Iterator<Item = TableBinding<'_>> {
    steps.iter().enumerate().filter_map(|(index, step)| {
        let name = step.arg.table_name()?;
        let table = step.arg.table().filter(|t| !t.is_empty())?;
        Some(TableBinding {
            name,
            table,
            step: index + 1,
        })
    })
}

/// Resolves each bound name to the table of the first step that binds it.
///
/// Later steps binding the same name are ignored, even when their tables
/// differ; see [`find_ambiguous_bindings`].
pub fn table_bindings(steps: &[Step]) -> HashMap<&str, TableBinding<'_>> {
    let mut bindings = HashMap::new();
    for binding in named_tables(steps) {
        bindings.entry(binding.name).or_insert(binding);
    }
    bindings
}

/// Renders the invocation of the concept: `* ` followed by the name as written.
///
/// A literal that names a bound table is replaced by a newline and the
/// formatted table, so the call site carries the concrete data. Other literals
/// stay exactly as written, quotes included.
pub fn render_invocation(name: &ConceptName, steps: &[Step]) -> Result<String, ExtractError> {
    let bindings = table_bindings(steps);
    let text = name.text();
    let mut out = String::from(STEP_PREFIX);

    for fragment in scan(text) {
        match fragment {
            Fragment::Literal(value, span) => match bindings.get(value) {
                Some(binding) => {
                    debug!(param = value, step = binding.step, "inlining bound table at call site");
                    out.push('\n');
                    out.push_str(&format_table(binding.table)?);
                }
                None => out.push_str(&text[span.start..span.end]),
            },
            Fragment::Text(_, span) | Fragment::Unterminated(_, span) => {
                out.push_str(&text[span.start..span.end]);
            }
        }
    }
    Ok(out)
}

/// A table name bound to differing tables by two steps of the same selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbiguousBinding {
    pub name: String,
    pub first: usize,
    pub conflicting: usize,
}

impl AmbiguousBinding {
    pub fn into_error(self) -> ExtractError {
        ExtractError::AmbiguousTableBinding {
            name: self.name,
            first: self.first,
            conflicting: self.conflicting,
        }
    }
}

/// Lists every step whose bound table differs from the first binding of the
/// same name. Rendering never consults this; the first binding always wins.
pub fn find_ambiguous_bindings(steps: &[Step]) -> Vec<AmbiguousBinding> {
    let first = table_bindings(steps);
    named_tables(steps)
        .filter_map(|binding| {
            let winner = first.get(binding.name)?;
            (winner.table != binding.table).then(|| AmbiguousBinding {
                name: binding.name.to_string(),
                first: winner.step,
                conflicting: binding.step,
            })
        })
        .collect()
}
