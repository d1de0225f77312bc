//! Adapter implementations for port traits
//!
//! This module contains the concrete `SourceAccessor` implementations that
//! handle I/O:
//!
//! - `local` - A directory on disk
//! - `github` - A repository behind the GitHub REST API, plus credentials

pub mod github;
pub mod local;

pub use github::RemoteAccessor;
pub use local::LocalAccessor;
