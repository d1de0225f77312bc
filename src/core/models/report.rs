//! Compliance report model
//!
//! Accumulates verdicts for one repository and derives the weighted score
//! and tier from them. The score is never stored; it is recomputed from the
//! verdict list on demand, so repeated calls agree.

use serde::{Deserialize, Serialize};

use super::{Status, Verdict};

/// Minimum score for the EXCELLENT tier
pub const SCORE_EXCELLENT: f64 = 90.0;

/// Minimum score for the GOOD tier (and for a zero exit status)
pub const SCORE_GOOD: f64 = 75.0;

/// Minimum score for the FAIR tier
pub const SCORE_FAIR: f64 = 60.0;

/// Where the inspected repository lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// A directory on the local filesystem
    Local,
    /// A repository on the hosting service
    Remote,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Remote => write!(f, "remote"),
        }
    }
}

/// Score classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    /// Below [`SCORE_FAIR`]
    #[serde(rename = "NEEDS WORK")]
    NeedsWork,
    /// At least [`SCORE_FAIR`]
    #[serde(rename = "FAIR")]
    Fair,
    /// At least [`SCORE_GOOD`]
    #[serde(rename = "GOOD")]
    Good,
    /// At least [`SCORE_EXCELLENT`]
    #[serde(rename = "EXCELLENT")]
    Excellent,
}

impl Tier {
    /// Classify a percentage score
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= SCORE_EXCELLENT {
            Self::Excellent
        } else if score >= SCORE_GOOD {
            Self::Good
        } else if score >= SCORE_FAIR {
            Self::Fair
        } else {
            Self::NeedsWork
        }
    }

    /// One-sentence description of what the tier means
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Excellent => "Repository meets all standards.",
            Self::Good => "Repository follows most standards with minor improvements needed.",
            Self::Fair => "Repository follows some standards but has notable gaps.",
            Self::NeedsWork => "Repository requires significant updates to meet standards.",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Excellent => write!(f, "EXCELLENT"),
            Self::Good => write!(f, "GOOD"),
            Self::Fair => write!(f, "FAIR"),
            Self::NeedsWork => write!(f, "NEEDS WORK"),
        }
    }
}

/// All verdicts for one repository
#[derive(Debug, Clone)]
pub struct ComplianceReport {
    subject: String,
    name: String,
    kind: SourceKind,
    verdicts: Vec<Verdict>,
}

impl ComplianceReport {
    /// Create an empty report
    ///
    /// `subject` is the full identifier (path or URL), `name` the short
    /// display name (directory name or `owner/repo`).
    #[must_use]
    pub fn new(subject: impl Into<String>, name: impl Into<String>, kind: SourceKind) -> Self {
        Self {
            subject: subject.into(),
            name: name.into(),
            kind,
            verdicts: Vec::new(),
        }
    }

    /// Append a verdict
    pub fn add_check(&mut self, verdict: Verdict) {
        self.verdicts.push(verdict);
    }

    /// Full identifier of the evaluated repository
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Short display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Local or remote
    #[must_use]
    pub const fn kind(&self) -> SourceKind {
        self.kind
    }

    /// Verdicts in execution order
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    fn scored(&self) -> impl Iterator<Item = &Verdict> {
        self.verdicts.iter().filter(|v| v.is_scored())
    }

    /// Number of verdicts that count towards the score
    #[must_use]
    pub fn total_checks(&self) -> usize {
        self.scored().count()
    }

    /// Scored verdicts that passed
    #[must_use]
    pub fn passed_checks(&self) -> usize {
        self.count_status(Status::Pass)
    }

    /// Scored verdicts that warned
    #[must_use]
    pub fn warning_checks(&self) -> usize {
        self.count_status(Status::Warn)
    }

    /// Scored verdicts that failed
    #[must_use]
    pub fn failed_checks(&self) -> usize {
        self.count_status(Status::Fail)
    }

    fn count_status(&self, status: Status) -> usize {
        self.scored().filter(|v| v.status() == status).count()
    }

    /// Weighted compliance percentage in `0.0..=100.0`
    ///
    /// Pass earns full weight, warn half, fail nothing. An empty report
    /// scores 0.
    #[must_use]
    pub fn calculate_score(&self) -> f64 {
        let (earned, total) = self.scored().fold((0.0, 0u64), |(earned, total), v| {
            (
                earned + f64::from(v.weight()) * v.status().credit(),
                total + u64::from(v.weight()),
            )
        });

        if total == 0 {
            return 0.0;
        }

        #[allow(clippy::cast_precision_loss)]
        let total = total as f64;
        earned / total * 100.0
    }

    /// Score rounded to one decimal place, as displayed
    ///
    /// Tier and pass/fail are derived from this value so they always agree
    /// with the printed percentage.
    #[must_use]
    pub fn rounded_score(&self) -> f64 {
        (self.calculate_score() * 10.0).round() / 10.0
    }

    /// Tier for the displayed score
    #[must_use]
    pub fn tier(&self) -> Tier {
        Tier::from_score(self.rounded_score())
    }

    /// Tier label plus description, e.g. "GOOD: Repository follows..."
    #[must_use]
    pub fn get_summary(&self) -> String {
        let tier = self.tier();
        format!("{tier}: {}", tier.description())
    }

    /// Whether the score meets the bar for a successful exit status
    #[must_use]
    pub fn meets_standard(&self) -> bool {
        self.rounded_score() >= SCORE_GOOD
    }
}
