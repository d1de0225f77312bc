//! Verdict status
//!
//! The tri-state outcome of a single compliance check.

use serde::{Deserialize, Serialize};

/// Outcome of a compliance check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The repository meets the standard
    Pass,
    /// Non-blocking issue, or the check could not be verified
    Warn,
    /// The repository does not meet the standard
    Fail,
}

impl Status {
    /// Fraction of a verdict's weight this status earns towards the score
    ///
    /// Warnings earn half credit; they stay in the denominator.
    #[must_use]
    pub const fn credit(self) -> f64 {
        match self {
            Self::Pass => 1.0,
            Self::Warn => 0.5,
            Self::Fail => 0.0,
        }
    }

    /// Uppercase label used in plain-text and Markdown output
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Warn => "WARN",
            Self::Fail => "FAIL",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "pass"),
            Self::Warn => write!(f, "warn"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pass" => Ok(Self::Pass),
            "warn" => Ok(Self::Warn),
            "fail" => Ok(Self::Fail),
            _ => Err(format!("Invalid status: {s}. Use: pass, warn, fail")),
        }
    }
}
