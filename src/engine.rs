//! The extraction pipeline: name → definition + invocation → patched document.
//!
//! Each request is independent and side-effect free. Callers that patch the
//! same document twice must serialize those requests themselves.

use std::borrow::Cow;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::ast::Step;
use crate::concept::{find_ambiguous_bindings, render_definition, render_invocation, ConceptName};
use crate::config::ExtractorConfig;
use crate::diagnostics::ExtractError;
use crate::patch::{LineEnding, LineRange, TextPatcher};

/// What the caller wants extracted: the new name, the selected steps and the
/// lines they occupy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRequest {
    pub concept_name: String,
    pub steps: Vec<Step>,
    pub range: LineRange,
}

impl ExtractionRequest {
    /// Reads a request from a YAML or JSON file. YAML is a superset of JSON,
    /// so one decoder serves both.
    pub fn load(path: &Path) -> Result<Self, ExtractError> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| ExtractError::io(path.display().to_string(), e))?;
        serde_yaml::from_str(&source).map_err(|e| ExtractError::decode("extraction request", e))
    }
}

/// The result of an extraction, ready to be persisted by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// The concept, destined for a concept library.
    pub definition: String,
    /// The call-site text replacing `range`.
    pub invocation: String,
    pub range: LineRange,
}

#[derive(Debug, Clone, Default)]
pub struct ConceptExtractor {
    config: ExtractorConfig,
}

impl ConceptExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Renders the concept definition and its invocation.
    ///
    /// The name is parsed before anything is rendered; any failure yields no
    /// output at all.
    pub fn extract(&self, request: &ExtractionRequest) -> Result<Extraction, ExtractError> {
        let name = ConceptName::parse(request.concept_name.as_str())?;
        debug!(
            concept = %name,
            params = name.params().len(),
            steps = request.steps.len(),
            range = %request.range,
            "extracting concept"
        );

        if self.config.lint_bindings {
            for found in find_ambiguous_bindings(&request.steps) {
                warn!(
                    name = %found.name,
                    first = found.first,
                    conflicting = found.conflicting,
                    "table name bound to differing tables; the first binding is used"
                );
            }
        }

        Ok(Extraction {
            definition: render_definition(&name, &request.steps)?,
            invocation: render_invocation(&name, &request.steps)?,
            range: request.range,
        })
    }

    /// Replaces the extracted lines of `document` with the invocation.
    ///
    /// Line breaks inside the invocation (inlined tables) are rewritten to the
    /// document's line ending before splicing.
    pub fn apply(&self, extraction: &Extraction, document: &str) -> Result<String, ExtractError> {
        let ending = self.config.line_ending.resolve(document);
        let invocation = match ending {
            LineEnding::Lf => Cow::Borrowed(extraction.invocation.as_str()),
            _ => Cow::Owned(extraction.invocation.replace('\n', ending.as_str())),
        };
        TextPatcher::new(ending).replace(document, extraction.range, &invocation)
    }

    /// Extracts and patches in one go, returning the extraction and the new document.
    pub fn extract_and_patch(
        &self,
        request: &ExtractionRequest,
        document: &str,
    ) -> Result<(Extraction, String), ExtractError> {
        let extraction = self.extract(request)?;
        let patched = self.apply(&extraction, document)?;
        Ok((extraction, patched))
    }
}
