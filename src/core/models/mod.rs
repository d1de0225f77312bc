//! Domain models for pycomply
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Verdict`] - "This repository passes/warns/fails this standard"
//! - [`Status`] - The tri-state outcome of a check
//! - [`ComplianceReport`] - All verdicts for one repository, plus score and tier
//! - [`SourceKind`] - Whether files come from disk or the hosting service
//! - [`PythonVersion`] - A `major.minor` version parsed from loose specifiers
//! - [`Standards`] - The thresholds and required values checks compare against

mod python_version;
mod report;
mod standards;
mod status;
mod verdict;

pub use python_version::PythonVersion;
pub use report::{ComplianceReport, SCORE_EXCELLENT, SCORE_FAIR, SCORE_GOOD, SourceKind, Tier};
pub use standards::Standards;
pub use status::Status;
pub use verdict::Verdict;
