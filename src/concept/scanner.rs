//! Two-state scanner for double-quoted literal runs.
//!
//! There is no escape mechanism and no nesting: every `"` toggles between the
//! outside-literal and inside-literal states.

use crate::ast::Span;

const QUOTE: char = '"';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// Plain text outside any literal.
    Text(&'a str, Span),
    /// The content of a closed literal; the span covers both quotes.
    Literal(&'a str, Span),
    /// An opening quote that is never closed, and everything after it.
    Unterminated(&'a str, Span),
}

#[derive(Clone, Copy)]
enum State {
    Outside { from: usize },
    Inside { open: usize },
}

/// Splits `text` into plain runs and quoted literals, left to right.
pub fn scan(text: &str) -> Vec<Fragment<'_>> {
    let mut fragments = Vec::new();
    let mut state = State::Outside { from: 0 };

    for (pos, ch) in text.char_indices() {
        if ch != QUOTE {
            continue;
        }
        state = match state {
            State::Outside { from } => {
                if pos > from {
                    let span = Span { start: from, end: pos };
                    fragments.push(Fragment::Text(&text[from..pos], span));
                }
                State::Inside { open: pos }
            }
            State::Inside { open } => {
                let end = pos + QUOTE.len_utf8();
                fragments.push(Fragment::Literal(
                    &text[open + QUOTE.len_utf8()..pos],
                    Span { start: open, end },
                ));
                State::Outside { from: end }
            }
        };
    }

    match state {
        State::Outside { from } if from < text.len() => {
            fragments.push(Fragment::Text(&text[from..], Span { start: from, end: text.len() }));
        }
        State::Outside { .. } => {}
        State::Inside { open } => {
            fragments.push(Fragment::Unterminated(
                &text[open + QUOTE.len_utf8()..],
                Span { start: open, end: text.len() },
            ));
        }
    }
    fragments
}

pub fn count_quotes(text: &str) -> usize {
    text.matches(QUOTE).count()
}
