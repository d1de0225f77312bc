//! Check registry - runs compliance checks against a source accessor
//!
//! Every check is an independent procedure that reads whatever files it
//! needs through the [`CheckContext`] and returns an [`Outcome`]. The registry
//! turns outcomes into [`Verdict`]s, converts errors and panics into degraded
//! "could not verify" verdicts, and preserves registration order in the
//! report even when checks run in parallel.

use std::panic::{AssertUnwindSafe, catch_unwind};

use rayon::prelude::*;
use thiserror::Error;

use crate::core::models::{ComplianceReport, SourceKind, Standards, Status, Verdict};
use crate::core::ports::{AccessError, SourceAccessor};

/// Errors that keep a single check from reaching a verdict
#[derive(Debug, Error)]
pub enum CheckError {
    /// The accessor could not answer
    #[error(transparent)]
    Access(#[from] AccessError),

    /// A configuration file exists but cannot be parsed
    #[error("malformed {path}: {message}")]
    Malformed {
        /// Repository-relative path of the file
        path: String,
        /// Parser error text
        message: String,
    },
}

impl CheckError {
    /// Create a malformed-content error
    #[must_use]
    pub fn malformed(path: &str, err: impl std::fmt::Display) -> Self {
        Self::Malformed {
            path: path.to_string(),
            message: err.to_string(),
        }
    }
}

/// Grouping label shown in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Project metadata and dependency management
    Configuration,
    /// Linting, formatting, and type checking
    CodeQuality,
    /// Test framework and coverage
    Testing,
    /// Continuous integration workflows
    CiCd,
    /// Container build files
    Infrastructure,
    /// Required and optional documentation
    Documentation,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::CodeQuality => write!(f, "Code Quality"),
            Self::Testing => write!(f, "Testing"),
            Self::CiCd => write!(f, "CI/CD"),
            Self::Infrastructure => write!(f, "Infrastructure"),
            Self::Documentation => write!(f, "Documentation"),
        }
    }
}

/// Which sources a check applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckScope {
    /// Runs against local and remote sources
    #[default]
    Any,
    /// Needs hosting-service metadata; skipped for local sources
    RemoteOnly,
}

impl CheckScope {
    /// Whether a check with this scope runs against `kind`
    #[must_use]
    pub const fn applies_to(self, kind: SourceKind) -> bool {
        match self {
            Self::Any => true,
            Self::RemoteOnly => matches!(kind, SourceKind::Remote),
        }
    }
}

/// What a check concluded, before registry metadata is attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    status: Status,
    message: String,
    scored: bool,
}

impl Outcome {
    /// The standard is met
    #[must_use]
    pub fn pass(message: impl Into<String>) -> Self {
        Self::scored(Status::Pass, message)
    }

    /// Non-blocking issue
    #[must_use]
    pub fn warn(message: impl Into<String>) -> Self {
        Self::scored(Status::Warn, message)
    }

    /// The standard is not met
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self::scored(Status::Fail, message)
    }

    /// The check does not apply to this repository; reported with weight 0
    #[must_use]
    pub fn not_applicable(message: impl Into<String>) -> Self {
        Self {
            status: Status::Pass,
            message: message.into(),
            scored: false,
        }
    }

    fn scored(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            scored: true,
        }
    }

    /// Outcome status
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Outcome message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether this outcome counts towards the score
    #[must_use]
    pub const fn is_scored(&self) -> bool {
        self.scored
    }
}

/// Everything a check may look at
#[derive(Clone, Copy)]
pub struct CheckContext<'a> {
    accessor: &'a dyn SourceAccessor,
    standards: &'a Standards,
}

impl std::fmt::Debug for CheckContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckContext")
            .field("source", &self.accessor.display_name())
            .field("standards", self.standards)
            .finish()
    }
}

impl<'a> CheckContext<'a> {
    /// Bundle an accessor with the standards to check against
    #[must_use]
    pub fn new(accessor: &'a dyn SourceAccessor, standards: &'a Standards) -> Self {
        Self {
            accessor,
            standards,
        }
    }

    /// The repository being checked
    #[must_use]
    pub fn accessor(&self) -> &'a dyn SourceAccessor {
        self.accessor
    }

    /// The standards to compare against
    #[must_use]
    pub const fn standards(&self) -> &'a Standards {
        self.standards
    }

    /// Whether a file exists
    pub fn exists(&self, path: &str) -> Result<bool, CheckError> {
        Ok(self.accessor.exists(path)?)
    }

    /// Read a file as text
    pub fn read(&self, path: &str) -> Result<Option<String>, CheckError> {
        Ok(self.accessor.read(path)?)
    }

    /// Whether any of the given files exists
    pub fn any_exists(&self, paths: &[&str]) -> Result<bool, CheckError> {
        for path in paths {
            if self.exists(path)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Read and parse a TOML file
    pub fn read_toml(&self, path: &str) -> Result<Option<toml::Table>, CheckError> {
        self.read(path)?
            .map(|content| {
                toml::from_str::<toml::Table>(&content).map_err(|e| CheckError::malformed(path, e))
            })
            .transpose()
    }

    /// Read and parse a JSON file
    pub fn read_json(&self, path: &str) -> Result<Option<serde_json::Value>, CheckError> {
        self.read(path)?
            .map(|content| {
                serde_json::from_str(&content).map_err(|e| CheckError::malformed(path, e))
            })
            .transpose()
    }
}

/// Signature of a check procedure
pub type CheckFn = fn(&CheckContext<'_>) -> Result<Outcome, CheckError>;

/// A registered check: identity, scoring weight, and procedure
#[derive(Clone, Copy)]
pub struct CheckDef {
    /// Kebab-case identifier (e.g. "python-version")
    pub id: &'static str,
    /// Human-readable title (e.g. "Python Version")
    pub title: &'static str,
    /// Report grouping
    pub category: Category,
    /// Scoring weight when the outcome is scored
    pub weight: u32,
    /// Which sources the check runs against
    pub scope: CheckScope,
    /// The procedure
    pub run: CheckFn,
}

impl std::fmt::Debug for CheckDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckDef")
            .field("id", &self.id)
            .field("category", &self.category)
            .field("weight", &self.weight)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

impl CheckDef {
    /// Run this check, never failing: errors and panics become a degraded verdict
    #[must_use]
    pub fn evaluate(&self, ctx: &CheckContext<'_>) -> Verdict {
        log::debug!("running check {}", self.id);

        let result = catch_unwind(AssertUnwindSafe(|| (self.run)(ctx)));
        let verdict = match result {
            Ok(Ok(outcome)) => self.verdict_for(&outcome),
            Ok(Err(err)) => {
                log::warn!("check {} could not complete: {err}", self.id);
                self.degraded(err.to_string())
            },
            Err(payload) => {
                let detail = panic_message(payload.as_ref());
                log::warn!("check {} panicked: {detail}", self.id);
                self.degraded(format!("check panicked: {detail}"))
            },
        };

        log::debug!("check {} -> {}", self.id, verdict.status());
        verdict
    }

    fn verdict_for(&self, outcome: &Outcome) -> Verdict {
        let weight = if outcome.is_scored() { self.weight } else { 0 };
        Verdict::new(self.id, self.category.to_string(), outcome.status(), outcome.message())
            .with_title(self.title)
            .with_weight(weight)
    }

    fn degraded(&self, detail: String) -> Verdict {
        Verdict::could_not_verify(self.id, self.category.to_string(), detail)
            .with_title(self.title)
            .with_weight(self.weight)
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

/// How the registry executes its checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    /// One check after another
    #[default]
    Sequential,
    /// On the rayon thread pool; results keep registration order
    Parallel,
}

/// Ordered collection of checks
#[derive(Debug, Clone, Default)]
pub struct CheckRegistry {
    checks: Vec<CheckDef>,
}

impl CheckRegistry {
    /// Create an empty registry
    #[must_use]
    pub const fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Registry holding every project-standards check in report order
    #[must_use]
    pub fn standard() -> Self {
        Self {
            checks: super::checks::standard_checks(),
        }
    }

    /// Append a check
    pub fn register(&mut self, check: CheckDef) {
        self.checks.push(check);
    }

    /// Registered checks in order
    #[must_use]
    pub fn checks(&self) -> &[CheckDef] {
        &self.checks
    }

    /// Number of registered checks
    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Whether no checks are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run every applicable check and return verdicts in registration order
    #[must_use]
    pub fn run(&self, ctx: &CheckContext<'_>, execution: Execution) -> Vec<Verdict> {
        let kind = ctx.accessor().kind();
        let applicable: Vec<&CheckDef> =
            self.checks.iter().filter(|c| c.scope.applies_to(kind)).collect();

        match execution {
            Execution::Sequential => applicable.iter().map(|c| c.evaluate(ctx)).collect(),
            // Indexed collect keeps input order regardless of completion order
            Execution::Parallel => applicable.par_iter().map(|c| c.evaluate(ctx)).collect(),
        }
    }

    /// Evaluate a repository and build its report
    #[must_use]
    pub fn evaluate(
        &self,
        accessor: &dyn SourceAccessor,
        standards: &Standards,
        subject: &str,
        execution: Execution,
    ) -> ComplianceReport {
        let ctx = CheckContext::new(accessor, standards);
        let mut report = ComplianceReport::new(subject, accessor.display_name(), accessor.kind());
        for verdict in self.run(&ctx, execution) {
            report.add_check(verdict);
        }
        report
    }
}
