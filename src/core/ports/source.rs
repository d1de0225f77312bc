//! Source accessor port
//!
//! Defines the read-only interface over "where repository files live".
//! Checks are written once against this trait and work the same whether the
//! backing store is a directory or the hosting service's API.

use thiserror::Error;

use super::super::models::SourceKind;

/// Errors that prevent an accessor from answering
///
/// A missing file is not an error: `read` returns `Ok(None)` and `exists`
/// returns `Ok(false)`. These variants mean "could not determine".
#[derive(Debug, Error)]
pub enum AccessError {
    /// Local filesystem error
    #[error("io error reading {path}: {source}")]
    Io {
        /// Repository-relative path being accessed
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Network or transport failure (including timeouts)
    #[error("request for {path} failed: {message}")]
    Network {
        /// Repository-relative path being accessed
        path: String,
        /// Transport error text
        message: String,
    },

    /// The request timed out
    #[error("request for {path} timed out")]
    Timeout {
        /// Repository-relative path being accessed
        path: String,
    },

    /// The API answered with a status other than success or not-found
    #[error("unexpected HTTP status {status} for {path}")]
    Status {
        /// Repository-relative path being accessed
        path: String,
        /// HTTP status code
        status: u16,
    },

    /// The API answered with a body that could not be interpreted
    #[error("unexpected response for {path}: {message}")]
    InvalidResponse {
        /// Repository-relative path being accessed
        path: String,
        /// Decode error text
        message: String,
    },
}

/// Read-only view of a repository's files
///
/// Paths are `/`-separated and relative to the repository root.
pub trait SourceAccessor: Send + Sync {
    /// Whether a file exists at `path`
    fn exists(&self, path: &str) -> Result<bool, AccessError>;

    /// Read a file as text, or `None` if it does not exist
    fn read(&self, path: &str) -> Result<Option<String>, AccessError>;

    /// Names of the files directly under directory `path`, sorted
    ///
    /// A missing directory yields an empty list.
    fn list_dir(&self, path: &str) -> Result<Vec<String>, AccessError>;

    /// Backing store of this accessor
    fn kind(&self) -> SourceKind;

    /// Short display name (directory name or `owner/repo`)
    fn display_name(&self) -> String;

    /// Hosting-service topics, or `None` when the store has no such concept
    fn topics(&self) -> Result<Option<Vec<String>>, AccessError> {
        Ok(None)
    }
}
