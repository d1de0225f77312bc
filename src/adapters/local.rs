//! Local directory accessor
//!
//! Implements `SourceAccessor` over a directory on disk.

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::core::ports::{AccessError, SourceAccessor, SourceKind};

/// Source accessor backed by a local directory
#[derive(Debug, Clone)]
pub struct LocalAccessor {
    /// Repository root
    root: PathBuf,
}

impl LocalAccessor {
    /// Create an accessor rooted at `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Repository root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Join a repository-relative path onto the root
    ///
    /// Returns `None` for absolute paths and paths containing `..`, which
    /// are treated as not found.
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path);
        let inside = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        inside.then(|| self.root.join(relative))
    }

    fn metadata(path: &str, full: &Path) -> Result<Option<fs::Metadata>, AccessError> {
        match fs::metadata(full) {
            Ok(meta) => Ok(Some(meta)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(AccessError::Io {
                path: path.to_string(),
                source,
            }),
        }
    }
}

impl SourceAccessor for LocalAccessor {
    fn exists(&self, path: &str) -> Result<bool, AccessError> {
        let Some(full) = self.resolve(path) else {
            return Ok(false);
        };
        Ok(Self::metadata(path, &full)?.is_some_and(|meta| meta.is_file()))
    }

    fn read(&self, path: &str) -> Result<Option<String>, AccessError> {
        let Some(full) = self.resolve(path) else {
            return Ok(None);
        };
        if !Self::metadata(path, &full)?.is_some_and(|meta| meta.is_file()) {
            return Ok(None);
        }
        let bytes = fs::read(&full).map_err(|source| AccessError::Io {
            path: path.to_string(),
            source,
        })?;
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }

    fn list_dir(&self, path: &str) -> Result<Vec<String>, AccessError> {
        let Some(full) = self.resolve(path) else {
            return Ok(Vec::new());
        };
        if !Self::metadata(path, &full)?.is_some_and(|meta| meta.is_dir()) {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(&full).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| AccessError::Io {
                path: path.to_string(),
                source: e.into(),
            })?;
            if entry.file_type().is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Local
    }

    fn display_name(&self) -> String {
        let canonical = self.root.canonicalize().unwrap_or_else(|_| self.root.clone());
        canonical
            .file_name()
            .map_or_else(
                || canonical.display().to_string(),
                |name| name.to_string_lossy().into_owned(),
            )
    }
}
