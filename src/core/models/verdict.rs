//! Verdict model
//!
//! A verdict is the outcome of one compliance check: "this repository
//! passes/warns/fails this standard, because...". Verdicts are built once
//! and only read afterwards.

use super::Status;

/// The outcome of a single compliance check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    name: String,
    title: String,
    category: String,
    status: Status,
    message: String,
    weight: u32,
    error_detail: Option<String>,
}

impl Verdict {
    /// Create a verdict with weight 1
    ///
    /// The display title defaults to the check name.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        status: Status,
        message: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            title: name.clone(),
            name,
            category: category.into(),
            status,
            message: message.into(),
            weight: 1,
            error_detail: None,
        }
    }

    /// Create a passing verdict
    #[must_use]
    pub fn pass(
        name: impl Into<String>,
        category: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(name, category, Status::Pass, message)
    }

    /// Create a warning verdict
    #[must_use]
    pub fn warn(
        name: impl Into<String>,
        category: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(name, category, Status::Warn, message)
    }

    /// Create a failing verdict
    #[must_use]
    pub fn fail(
        name: impl Into<String>,
        category: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(name, category, Status::Fail, message)
    }

    /// Create an informational verdict that does not count towards the score
    #[must_use]
    pub fn not_applicable(
        name: impl Into<String>,
        category: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(name, category, Status::Pass, message).with_weight(0)
    }

    /// Create a degraded verdict for a check that could not complete
    #[must_use]
    pub fn could_not_verify(
        name: impl Into<String>,
        category: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self::new(name, category, Status::Warn, "Could not verify").with_error_detail(detail)
    }

    /// Set the human-readable title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the scoring weight (0 = informational only)
    #[must_use]
    pub const fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// Attach machine detail explaining why the check could not complete
    #[must_use]
    pub fn with_error_detail(mut self, detail: impl Into<String>) -> Self {
        self.error_detail = Some(detail.into());
        self
    }

    /// Check identifier (e.g. "python-version")
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable title (e.g. "Python Version")
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Grouping label (e.g. "Configuration")
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Pass, warn, or fail
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Human-readable explanation
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Scoring weight
    #[must_use]
    pub const fn weight(&self) -> u32 {
        self.weight
    }

    /// Error text when the check could not complete
    #[must_use]
    pub fn error_detail(&self) -> Option<&str> {
        self.error_detail.as_deref()
    }

    /// Whether this verdict contributes to the score
    #[must_use]
    pub const fn is_scored(&self) -> bool {
        self.weight > 0
    }

    /// Whether this verdict passed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.status == Status::Pass
    }
}
