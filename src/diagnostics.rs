//! Unified, `miette`-based diagnostics for concept extraction.
//!
//! Every failure in the engine is a synchronous, local value of [`ExtractError`].
//! Nothing here is fatal to a host process: a failed request produces no partial
//! output and can be reported and discarded.
//!
//! Errors that relate to a piece of text (a concept name, a document) carry it as
//! a `NamedSource` together with a labeled span, so `miette::Report` can point at
//! the offending quote, row or line.

use std::sync::Arc;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::ast::Span;

pub type SourceArc = Arc<NamedSource<String>>;

/// Type-safe error classification that mirrors the [`ExtractError`] variants.
/// Tests match on this instead of on rendered messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// Odd number of quote characters in a concept name
    MalformedConceptName,
    /// A table row whose cell count differs from the header
    TableArityMismatch,
    /// Out-of-bounds or inverted line range
    Range,
    /// Two steps bind one table name to differing tables
    AmbiguousTableBinding,
    /// Reading or writing files on behalf of the CLI
    Io,
    /// A request, table or config file that could not be decoded
    Decode,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::MalformedConceptName => "MalformedConceptName",
            ErrorType::TableArityMismatch => "TableArityMismatch",
            ErrorType::Range => "RangeError",
            ErrorType::AmbiguousTableBinding => "AmbiguousTableBinding",
            ErrorType::Io => "Io",
            ErrorType::Decode => "Decode",
        }
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Diagnostic, Debug)]
pub enum ExtractError {
    #[error("Malformed concept name: {quotes} quote character(s), expected an even number")]
    #[diagnostic(
        code(concept::name::malformed),
        help("wrap every parameter in a pair of double quotes, e.g. `login as \"user\"`")
    )]
    MalformedConceptName {
        quotes: usize,
        #[source_code]
        src: SourceArc,
        #[label("this quote is never closed")]
        span: SourceSpan,
    },

    #[error("Table arity mismatch: row {row} has {found} cell(s), header has {expected}")]
    #[diagnostic(code(concept::table::arity))]
    TableArityMismatch {
        /// 1-based data row index, the header row not counted.
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid line range {start}..={end} for a document of {line_count} line(s)")]
    #[diagnostic(
        code(concept::patch::range),
        help("line ranges are 1-based and inclusive: 1 <= start <= end <= line count")
    )]
    Range {
        start: usize,
        end: usize,
        line_count: usize,
    },

    #[error("Ambiguous table binding: `{name}` is bound to different tables by steps {first} and {conflicting}")]
    #[diagnostic(
        code(concept::table::ambiguous),
        help("the first binding determines the invocation; bind differing tables to different names")
    )]
    AmbiguousTableBinding {
        name: String,
        /// 1-based step positions within the selection.
        first: usize,
        conflicting: usize,
    },

    #[error("I/O error on `{path}`: {source}")]
    #[diagnostic(code(concept::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {what}: {message}")]
    #[diagnostic(code(concept::decode))]
    Decode { what: String, message: String },
}

impl ExtractError {
    /// Returns the type-safe classification of this error.
    pub fn error_type(&self) -> ErrorType {
        match self {
            ExtractError::MalformedConceptName { .. } => ErrorType::MalformedConceptName,
            ExtractError::TableArityMismatch { .. } => ErrorType::TableArityMismatch,
            ExtractError::Range { .. } => ErrorType::Range,
            ExtractError::AmbiguousTableBinding { .. } => ErrorType::AmbiguousTableBinding,
            ExtractError::Io { .. } => ErrorType::Io,
            ExtractError::Decode { .. } => ErrorType::Decode,
        }
    }

    pub(crate) fn malformed_name(text: &str, quotes: usize, dangling: Span) -> Self {
        ExtractError::MalformedConceptName {
            quotes,
            src: to_error_source("concept name", text),
            span: dangling.into(),
        }
    }

    pub(crate) fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        ExtractError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn decode(what: impl Into<String>, message: impl std::fmt::Display) -> Self {
        ExtractError::Decode {
            what: what.into(),
            message: message.to_string(),
        }
    }
}

/// Wraps a piece of text as a named source for error labels.
pub fn to_error_source<S: AsRef<str>>(name: &str, source: S) -> SourceArc {
    Arc::new(NamedSource::new(name, source.as_ref().to_string()))
}

#[cfg(test)]
mod diagnostics_tests {
    use miette::Report;

    use super::*;

    #[test]
    fn test_malformed_name_report_points_at_quote() {
        let err = ExtractError::malformed_name("login as \"user", 1, Span { start: 9, end: 10 });
        assert_eq!(err.error_type(), ErrorType::MalformedConceptName);
        let output = format!("{:?}", Report::new(err));
        assert!(output.contains("concept::name::malformed"));
        assert!(output.contains("this quote is never closed"));
    }

    #[test]
    fn test_range_error_message() {
        let err = ExtractError::Range {
            start: 4,
            end: 2,
            line_count: 10,
        };
        assert_eq!(err.error_type().to_string(), "RangeError");
        assert_eq!(
            err.to_string(),
            "Invalid line range 4..=2 for a document of 10 line(s)"
        );
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = ExtractError::io(
            "missing.spec",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.error_type(), ErrorType::Io);
    }
}
