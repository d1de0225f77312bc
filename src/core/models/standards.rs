//! Project standards
//!
//! The values the checks compare a repository against. Loaded from the
//! `[standards]` section of the config file; every field has a default.

use serde::{Deserialize, Serialize};

use super::PythonVersion;

/// Thresholds and required values for the compliance checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Standards {
    /// Python version a compliant project targets
    pub current_python: PythonVersion,
    /// Older version that is tolerated with a warning
    pub acceptable_python: PythonVersion,
    /// Repository keywords/topics; at least one must be present
    pub required_keywords: Vec<String>,
    /// Poetry plugins a Poetry project must declare
    pub required_poetry_plugins: Vec<String>,
    /// Ruff line length
    pub line_length: u32,
    /// File name of the mandatory CI workflow under `.github/workflows`
    pub ci_workflow: String,
}

impl Default for Standards {
    fn default() -> Self {
        Self {
            current_python: PythonVersion::new(3, 13),
            acceptable_python: PythonVersion::new(3, 12),
            required_keywords: [
                "python-lib",
                "python-stack",
                "python-app",
                "python-shared",
                "composite-app",
            ]
            .map(String::from)
            .to_vec(),
            required_poetry_plugins: [
                "poetry-plugin-export",
                "poetry-plugin-shell",
                "ld-poetry-export-group-plugin",
            ]
            .map(String::from)
            .to_vec(),
            line_length: 120,
            ci_workflow: "PythonManager.yml".to_string(),
        }
    }
}

impl Standards {
    /// Whether any of `candidates` is one of the required keywords
    #[must_use]
    pub fn has_required_keyword<S: AsRef<str>>(&self, candidates: &[S]) -> bool {
        candidates
            .iter()
            .any(|c| self.required_keywords.iter().any(|k| k == c.as_ref()))
    }
}
