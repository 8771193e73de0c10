//! Extractor configuration, loadable from YAML.
//!
//! ```yaml
//! line_ending: auto   # auto | lf | crlf | cr
//! lint_bindings: true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::diagnostics::ExtractError;
use crate::patch::LineEnding;

/// How the patcher finds line boundaries in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEndingMode {
    /// Use the first terminator found in the document.
    #[default]
    Auto,
    Lf,
    CrLf,
    Cr,
}

impl LineEndingMode {
    pub fn resolve(&self, document: &str) -> LineEnding {
        match self {
            LineEndingMode::Auto => LineEnding::detect(document),
            LineEndingMode::Lf => LineEnding::Lf,
            LineEndingMode::CrLf => LineEnding::CrLf,
            LineEndingMode::Cr => LineEnding::Cr,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractorConfig {
    pub line_ending: LineEndingMode,
    /// Warn about table names bound to differing tables. Rendering is unaffected.
    pub lint_bindings: bool,
}

impl ExtractorConfig {
    pub fn from_yaml_str(source: &str) -> Result<Self, ExtractError> {
        serde_yaml::from_str(source).map_err(|e| ExtractError::decode("configuration", e))
    }

    pub fn load(path: &Path) -> Result<Self, ExtractError> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| ExtractError::io(path.display().to_string(), e))?;
        Self::from_yaml_str(&source)
    }
}
