//! Line-range substitution over a document, byte-exact outside the range.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::diagnostics::ExtractError;

/// A 1-based, inclusive range of lines, e.g. an editor selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Validates `1 <= start <= end <= line_count`.
    pub fn check(&self, line_count: usize) -> Result<(), ExtractError> {
        if self.start < 1 || self.end < self.start || self.end > line_count {
            return Err(ExtractError::Range {
                start: self.start,
                end: self.end,
                line_count,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for LineRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// The sequence that separates lines of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
    Cr,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Cr => "\r",
        }
    }

    /// The first terminator found in `document`, `Lf` when there is none.
    pub fn detect(document: &str) -> Self {
        let bytes = document.as_bytes();
        match bytes.iter().position(|b| *b == b'\n' || *b == b'\r') {
            Some(pos) if bytes[pos] == b'\n' => LineEnding::Lf,
            Some(pos) if bytes.get(pos + 1) == Some(&b'\n') => LineEnding::CrLf,
            Some(_) => LineEnding::Cr,
            None => LineEnding::Lf,
        }
    }
}

/// Replaces line ranges of a document split on one [`LineEnding`].
///
/// A document of N terminators has N + 1 lines; a trailing terminator
/// therefore yields an empty last line, which ranges may address.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPatcher {
    ending: LineEnding,
}

impl TextPatcher {
    pub fn new(ending: LineEnding) -> Self {
        Self { ending }
    }

    pub fn line_ending(&self) -> LineEnding {
        self.ending
    }

    pub fn line_count(&self, document: &str) -> usize {
        self.lines(document).len()
    }

    /// The original text of `range`, lines joined by the terminator.
    pub fn lines_in(&self, document: &str, range: LineRange) -> Result<String, ExtractError> {
        let lines = self.lines(document);
        range.check(lines.len())?;
        Ok(lines[range.start - 1..range.end].join(self.ending.as_str()))
    }

    /// Replaces the lines of `range` with `replacement`, written verbatim.
    ///
    /// One terminator separates the replacement from the preceding lines and
    /// one from the following lines, each only when such lines exist. A
    /// replacement ending in a terminator thus leaves a blank line before the
    /// following content. Lines outside `range` are copied unchanged.
    pub fn replace(
        &self,
        document: &str,
        range: LineRange,
        replacement: &str,
    ) -> Result<String, ExtractError> {
        let lines = self.lines(document);
        range.check(lines.len())?;
        let separator = self.ending.as_str();
        let before = &lines[..range.start - 1];
        let after = &lines[range.end..];
        debug!(
            %range,
            line_count = lines.len(),
            kept_before = before.len(),
            kept_after = after.len(),
            "patching document"
        );

        let mut out = String::with_capacity(document.len() + replacement.len());
        if !before.is_empty() {
            out.push_str(&before.join(separator));
            out.push_str(separator);
        }
        out.push_str(replacement);
        if !after.is_empty() {
            out.push_str(separator);
            out.push_str(&after.join(separator));
        }
        Ok(out)
    }

    fn lines<'a>(&self, document: &'a str) -> Vec<&'a str> {
        document.split(self.ending.as_str()).collect()
    }
}

/// Replaces `range` of a `\n`-separated document.
pub fn replace_text(
    document: &str,
    range: LineRange,
    replacement: &str,
) -> Result<String, ExtractError> {
    TextPatcher::new(LineEnding::Lf).replace(document, range, replacement)
}
