//! # concept-extract
//!
//! Extracts a selected run of steps from a step-based specification document
//! into a reusable, parameterized concept, and rewrites the document to invoke
//! that concept instead.
//!
//! The pipeline is pure and synchronous:
//!
//! 1. [`concept::ConceptName`] declares parameters from the quoted literals of
//!    the new name.
//! 2. [`concept::render_definition`] renders the concept, promoting declared
//!    literals and table bindings to `<placeholders>`.
//! 3. [`concept::render_invocation`] renders the call site with concrete values.
//! 4. [`patch::TextPatcher`] splices the invocation over the selected lines.
//!
//! [`engine::ConceptExtractor`] runs all four for one request.

pub use crate::diagnostics::{ErrorType, ExtractError};

pub mod ast;
pub mod cli;
pub mod concept;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod patch;
