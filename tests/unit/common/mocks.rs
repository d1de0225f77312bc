//! Mock implementations of port traits for testing
//!
//! These mocks provide configurable behavior for unit testing
//! without real I/O operations.

use std::collections::{BTreeMap, BTreeSet};

use pycomply::core::ports::{AccessError, SourceAccessor, SourceKind};

/// In-memory repository
#[derive(Debug, Clone)]
pub struct MockAccessor {
    files: BTreeMap<String, String>,
    kind: SourceKind,
    topics: Option<Vec<String>>,
}

impl MockAccessor {
    pub fn new() -> Self {
        Self {
            files: BTreeMap::new(),
            kind: SourceKind::Local,
            topics: None,
        }
    }

    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let mut mock = Self::new();
        for (path, content) in files {
            mock = mock.with_file(path, content);
        }
        mock
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_string(), content.to_string());
        self
    }

    /// Behave like a hosted repository with these topics
    pub fn remote(mut self, topics: &[&str]) -> Self {
        self.kind = SourceKind::Remote;
        self.topics = Some(topics.iter().map(|t| (*t).to_string()).collect());
        self
    }
}

impl Default for MockAccessor {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceAccessor for MockAccessor {
    fn exists(&self, path: &str) -> Result<bool, AccessError> {
        Ok(self.files.contains_key(path))
    }

    fn read(&self, path: &str) -> Result<Option<String>, AccessError> {
        Ok(self.files.get(path).cloned())
    }

    fn list_dir(&self, path: &str) -> Result<Vec<String>, AccessError> {
        let prefix = format!("{}/", path.trim_end_matches('/'));
        Ok(self
            .files
            .keys()
            .filter_map(|key| key.strip_prefix(&prefix))
            .filter(|rest| !rest.contains('/'))
            .map(str::to_string)
            .collect())
    }

    fn kind(&self) -> SourceKind {
        self.kind
    }

    fn display_name(&self) -> String {
        "mock".to_string()
    }

    fn topics(&self) -> Result<Option<Vec<String>>, AccessError> {
        Ok(self.topics.clone())
    }
}

/// Wraps a [`MockAccessor`] and times out on selected paths
#[derive(Debug, Clone)]
pub struct FailingAccessor {
    inner: MockAccessor,
    failing: BTreeSet<String>,
}

impl FailingAccessor {
    pub fn new(inner: MockAccessor, failing: &[&str]) -> Self {
        Self {
            inner,
            failing: failing.iter().map(|p| (*p).to_string()).collect(),
        }
    }

    fn check(&self, path: &str) -> Result<(), AccessError> {
        if self.failing.contains(path) {
            return Err(AccessError::Timeout {
                path: path.to_string(),
            });
        }
        Ok(())
    }
}

impl SourceAccessor for FailingAccessor {
    fn exists(&self, path: &str) -> Result<bool, AccessError> {
        self.check(path)?;
        self.inner.exists(path)
    }

    fn read(&self, path: &str) -> Result<Option<String>, AccessError> {
        self.check(path)?;
        self.inner.read(path)
    }

    fn list_dir(&self, path: &str) -> Result<Vec<String>, AccessError> {
        self.check(path)?;
        self.inner.list_dir(path)
    }

    fn kind(&self) -> SourceKind {
        self.inner.kind()
    }

    fn display_name(&self) -> String {
        self.inner.display_name()
    }
}
