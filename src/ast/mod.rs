//! Value objects handed to the extractor by an external specification parser.
//!
//! A [`Step`] is one line of a scenario: its text, with zero or more quoted
//! literal arguments, and at most one table argument. The three argument states
//! are mutually exclusive and modelled as [`StepArg`].

use serde::{Deserialize, Serialize};

pub mod table;

pub use table::{column_widths, format_table, Table, TABLE_INDENT};

/// A byte span into a piece of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len().max(1)).into()
    }
}

/// The argument attached to a step, beyond the literals inside its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepArg {
    #[default]
    None,
    /// An inline table with no parameter name.
    Table(Table),
    /// A table bound to a shared parameter name.
    NamedTable { name: String, table: Table },
}

impl StepArg {
    pub fn table(&self) -> Option<&Table> {
        match self {
            StepArg::None => None,
            StepArg::Table(table) | StepArg::NamedTable { table, .. } => Some(table),
        }
    }

    pub fn table_name(&self) -> Option<&str> {
        match self {
            StepArg::NamedTable { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// A single parsed step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub text: String,
    #[serde(default)]
    pub arg: StepArg,
}

impl Step {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            arg: StepArg::None,
        }
    }

    pub fn with_table(text: impl Into<String>, table: Table) -> Self {
        Self {
            text: text.into(),
            arg: StepArg::Table(table),
        }
    }

    pub fn with_named_table(
        text: impl Into<String>,
        name: impl Into<String>,
        table: Table,
    ) -> Self {
        Self {
            text: text.into(),
            arg: StepArg::NamedTable {
                name: name.into(),
                table,
            },
        }
    }
}
