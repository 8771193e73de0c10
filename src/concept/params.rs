//! Parameter extraction from the new concept's name.

use tracing::trace;

use super::scanner::{count_quotes, scan, Fragment};
use crate::ast::Span;
use crate::diagnostics::ExtractError;

/// Prefix of a concept header line.
pub const HEADER_PREFIX: &str = "# ";

/// The requested concept name, e.g. `log in as "user"`, with its quoted
/// literals declared as parameters in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptName {
    text: String,
    params: Vec<String>,
}

impl ConceptName {
    /// Parses `text`, failing with `MalformedConceptName` on an odd quote count.
    pub fn parse(text: impl Into<String>) -> Result<Self, ExtractError> {
        let text = text.into();
        let mut params = Vec::new();
        for fragment in scan(&text) {
            match fragment {
                Fragment::Text(..) => {}
                Fragment::Literal(name, _) => params.push(name.to_string()),
                Fragment::Unterminated(_, span) => {
                    let dangling = Span {
                        start: span.start,
                        end: span.start + 1,
                    };
                    return Err(ExtractError::malformed_name(&text, count_quotes(&text), dangling));
                }
            }
        }
        trace!(name = %text, params = ?params, "parsed concept name");
        Ok(Self { text, params })
    }

    /// The name as written, quotes intact.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Declared parameter names; duplicates are kept in position.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn contains(&self, name: &str) -> bool {
        self.params.iter().any(|p| p == name)
    }

    /// The concept's header line, without a line terminator: `# log in as <user>`.
    pub fn header(&self) -> String {
        let mut header = String::from(HEADER_PREFIX);
        for fragment in scan(&self.text) {
            match fragment {
                Fragment::Literal(name, _) => push_placeholder(&mut header, name),
                Fragment::Text(text, _) | Fragment::Unterminated(text, _) => header.push_str(text),
            }
        }
        header
    }
}

impl std::fmt::Display for ConceptName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

pub(crate) fn push_placeholder(out: &mut String, name: &str) {
    out.push('<');
    out.push_str(name);
    out.push('>');
}
