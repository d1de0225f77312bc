//! Python version parsing
//!
//! Extracts the minimum `major.minor` version from the loose specifiers found
//! in `pyproject.toml` (`">=3.13"`, `"^3.12"`, `">=3.9,<4.0"`), from Ruff
//! targets (`"py313"`), and from base image tags (`"python:3.13-slim"`).

use serde::{Deserialize, Serialize};

/// A `major.minor` Python version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PythonVersion {
    /// Major component
    pub major: u32,
    /// Minor component
    pub minor: u32,
}

impl PythonVersion {
    /// Create a version
    #[must_use]
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// First `X.Y` occurring in a version specifier
    ///
    /// For the lower-bounded specifiers used in practice this is the minimum
    /// supported version.
    #[must_use]
    pub fn from_specifier(spec: &str) -> Option<Self> {
        let bytes = spec.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i].is_ascii_digit() && (i == 0 || !bytes[i - 1].is_ascii_digit()) {
                let (major, after_major) = take_number(spec, i)?;
                if bytes.get(after_major) == Some(&b'.') {
                    if let Some((minor, _)) = take_number(spec, after_major + 1) {
                        return Some(Self::new(major, minor));
                    }
                }
                i = after_major;
            } else {
                i += 1;
            }
        }
        None
    }

    /// Parse a Ruff `target-version` such as `py313`
    #[must_use]
    pub fn from_ruff_target(target: &str) -> Option<Self> {
        let digits = target.trim().strip_prefix("py")?;
        if digits.len() < 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let (major, minor) = digits.split_at(1);
        Some(Self::new(major.parse().ok()?, minor.parse().ok()?))
    }
}

fn take_number(s: &str, start: usize) -> Option<(u32, usize)> {
    let end = s[start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(s.len(), |offset| start + offset);
    if end == start {
        return None;
    }
    s[start..end].parse().ok().map(|n| (n, end))
}

impl std::fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl std::str::FromStr for PythonVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (major, minor) = s
            .trim()
            .split_once('.')
            .ok_or_else(|| format!("Invalid Python version: {s}. Use: <major>.<minor>"))?;
        let parse = |part: &str| {
            part.parse::<u32>()
                .map_err(|_| format!("Invalid Python version: {s}. Use: <major>.<minor>"))
        };
        Ok(Self::new(parse(major)?, parse(minor)?))
    }
}

impl TryFrom<String> for PythonVersion {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PythonVersion> for String {
    fn from(version: PythonVersion) -> Self {
        version.to_string()
    }
}
