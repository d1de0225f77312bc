//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the compliance engine
//! and external systems (filesystem, hosting API).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The checks depend only on these traits, never on concrete
//! implementations. This enables:
//!
//! - **Testability**: In-memory implementations for unit tests
//! - **Flexibility**: One check works against disk or network
//! - **Clarity**: Clear boundaries between layers

mod source;

pub use super::models::SourceKind;
pub use source::{AccessError, SourceAccessor};
