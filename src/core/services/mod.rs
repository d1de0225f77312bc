//! Business logic services
//!
//! Checks operate only through the [`SourceAccessor`](crate::core::ports::SourceAccessor)
//! port, so the same registry evaluates local directories and hosted
//! repositories.
//!
//! - [`registry`] - Check definitions, execution, and report assembly
//! - [`checks`] - The project-standards checks

pub mod checks;
pub mod registry;

pub use checks::standard_checks;
pub use registry::{
    Category, CheckContext, CheckDef, CheckError, CheckFn, CheckRegistry, CheckScope, Execution,
    Outcome,
};
