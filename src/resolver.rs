//! Resolver - classifies a repository identifier as local or remote
//!
//! The identifier given on the command line may be a directory path, a
//! hosting-service URL (`https://host/owner/repo`, `git@host:owner/repo.git`,
//! `host/owner/repo`), or the `owner/repo` shorthand. An existing local path
//! always wins over the shorthand heuristics.
//!
//! # Examples
//!
//! ```
//! use pycomply::resolver::{RepoTarget, Resolver};
//!
//! let resolver = Resolver::new("github.com").unwrap();
//! let target = resolver.resolve("https://github.com/acme/widget.git").unwrap();
//! assert!(matches!(target, RepoTarget::Remote(ref slug) if slug.to_string() == "acme/widget"));
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use regex::Regex;
use thiserror::Error;

/// Characters allowed in an owner or repository segment
const SEGMENT: &str = r"[A-Za-z0-9_.\-]+";

/// Errors that can occur during resolution
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Neither a hosting-service identifier nor an existing directory
    #[error("cannot resolve repository '{0}': not a directory or {1} repository")]
    Unresolvable(String, String),

    /// Path exists but is not a directory
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Configured host produced an invalid pattern
    #[error("invalid host pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// A hosted repository, `owner/repo`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSlug {
    owner: String,
    repo: String,
}

impl RepoSlug {
    /// Create a slug; a trailing `.git` on the repository is dropped
    #[must_use]
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        let repo = repo.into();
        let repo = repo.strip_suffix(".git").map_or_else(|| repo.clone(), str::to_string);
        Self {
            owner: owner.into(),
            repo,
        }
    }

    /// Account or organization
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name
    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// What a repository identifier refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoTarget {
    /// A directory on disk
    Local(PathBuf),
    /// A repository on the hosting service
    Remote(RepoSlug),
}

/// Classifies repository identifiers
#[derive(Debug)]
pub struct Resolver {
    host: String,
    /// `https://host/owner/repo[.git][/...]`
    url: Regex,
    /// `git@host:owner/repo[.git]`
    ssh: Regex,
    /// `host/owner/repo[/...]`
    host_path: Regex,
    /// `owner/repo`
    shorthand: Regex,
}

impl Resolver {
    /// Create a resolver recognizing URLs for `host` (e.g. "github.com")
    pub fn new(host: &str) -> Result<Self, ResolveError> {
        let h = regex::escape(host);
        Ok(Self {
            host: host.to_string(),
            url: Regex::new(&format!(
                r"(?i)^https?://(?:www\.)?{h}/(?P<owner>{SEGMENT})/(?P<repo>{SEGMENT})(?:/.*)?$"
            ))?,
            ssh: Regex::new(&format!(
                r"(?i)^(?:ssh://)?git@{h}[:/](?P<owner>{SEGMENT})/(?P<repo>{SEGMENT})/?$"
            ))?,
            host_path: Regex::new(&format!(
                r"(?i)^(?:www\.)?{h}/(?P<owner>{SEGMENT})/(?P<repo>{SEGMENT})(?:/.*)?$"
            ))?,
            shorthand: Regex::new(&format!(r"^(?P<owner>{SEGMENT})/(?P<repo>{SEGMENT})/?$"))?,
        })
    }

    /// Host recognized in URL forms
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Classify `input`
    pub fn resolve(&self, input: &str) -> Result<RepoTarget, ResolveError> {
        let input = input.trim();

        // Explicit URL forms are never local paths
        for pattern in [&self.url, &self.ssh] {
            if let Some(slug) = Self::capture(pattern, input) {
                log::debug!("{input} resolved as remote {slug}");
                return Ok(RepoTarget::Remote(slug));
            }
        }

        let path = Path::new(input);
        if path.is_dir() {
            log::debug!("{input} resolved as local directory");
            return Ok(RepoTarget::Local(path.to_path_buf()));
        }
        if path.exists() {
            return Err(ResolveError::NotADirectory(path.to_path_buf()));
        }

        for pattern in [&self.host_path, &self.shorthand] {
            if let Some(slug) = Self::capture(pattern, input) {
                log::debug!("{input} resolved as remote {slug}");
                return Ok(RepoTarget::Remote(slug));
            }
        }

        Err(ResolveError::Unresolvable(input.to_string(), self.host.clone()))
    }

    /// Extract a slug; `.`, `..` and empty segments never name a repository
    fn capture(pattern: &Regex, input: &str) -> Option<RepoSlug> {
        let caps = pattern.captures(input)?;
        let slug = RepoSlug::new(&caps["owner"], &caps["repo"]);
        let valid = |segment: &str| !segment.is_empty() && !segment.chars().all(|c| c == '.');
        (valid(slug.owner()) && valid(slug.repo())).then_some(slug)
    }
}
