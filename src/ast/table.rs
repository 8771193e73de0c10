//! Tabular step arguments and their fixed-width rendering.

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::diagnostics::ExtractError;

/// Left indent of every rendered table row.
pub const TABLE_INDENT: &str = "     ";

/// Column headers plus data rows. Every row must have one cell per header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Table {
    pub headers: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<H, R, C, S>(headers: H, rows: R) -> Self
    where
        H: IntoIterator<Item = S>,
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// A table without header columns carries no data.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Fails on the first row whose cell count differs from the header's.
    pub fn check_arity(&self) -> Result<(), ExtractError> {
        let expected = self.headers.len();
        match self
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected)
        {
            Some((index, row)) => Err(ExtractError::TableArityMismatch {
                row: index + 1,
                expected,
                found: row.len(),
            }),
            None => Ok(()),
        }
    }
}

/// Width of each column: the widest of its header and data cells.
pub fn column_widths(table: &Table) -> Vec<usize> {
    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.width()).collect();
    for row in &table.rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }
    widths
}

/// Renders `table` as an indented, pipe-delimited block:
///
/// ```text
///      |id|name|
///      |--|----|
///      |1 |foo |
/// ```
///
/// Every row, the last included, ends with a newline.
pub fn format_table(table: &Table) -> Result<String, ExtractError> {
    table.check_arity()?;
    let widths = column_widths(table);

    let mut out = String::new();
    push_row(&mut out, &table.headers, &widths);
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &separator, &widths);
    for row in &table.rows {
        push_row(&mut out, row, &widths);
    }
    Ok(out)
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    out.push_str(TABLE_INDENT);
    out.push('|');
    for (cell, width) in cells.iter().zip(widths) {
        out.push_str(cell);
        let padding = width.saturating_sub(cell.width());
        out.extend(std::iter::repeat(' ').take(padding));
        out.push('|');
    }
    out.push('\n');
}
