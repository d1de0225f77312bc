//! Infrastructure checks: container build

use crate::core::models::PythonVersion;
use crate::core::services::registry::{CheckContext, CheckError, Outcome};
use crate::paths;

/// Instructions of interest from a Dockerfile
#[derive(Debug, Default)]
struct Dockerfile<'a> {
    /// Image of the last `FROM` (the runtime stage)
    base: Option<&'a str>,
    /// Argument of the last `USER`
    user: Option<&'a str>,
}

impl<'a> Dockerfile<'a> {
    fn parse(content: &'a str) -> Self {
        let mut parsed = Self::default();
        for line in content.lines().map(str::trim) {
            let mut words = line.split_whitespace();
            let Some(instruction) = words.next() else {
                continue;
            };
            match instruction.to_ascii_uppercase().as_str() {
                "FROM" => {
                    parsed.base = words.find(|w| !w.starts_with("--"));
                },
                "USER" => parsed.user = words.next(),
                _ => {},
            }
        }
        parsed
    }

    /// Python version of an official `python:X.Y...` base image
    fn python_version(&self) -> Option<PythonVersion> {
        let image = self.base?;
        let tag = image
            .strip_prefix("python:")
            .or_else(|| image.strip_prefix("docker.io/library/python:"))?;
        PythonVersion::from_specifier(tag)
    }

    fn runs_as_root(&self) -> bool {
        self.user.is_none_or(|user| {
            let name = user.split(':').next().unwrap_or(user);
            name == "root" || name == "0"
        })
    }
}

/// A Dockerfile, if present, follows container best practices
pub(super) fn container_build(ctx: &CheckContext<'_>) -> Result<Outcome, CheckError> {
    let Some(content) = ctx.read(paths::DOCKERFILE)? else {
        return Ok(Outcome::not_applicable("No Dockerfile"));
    };

    let dockerfile = Dockerfile::parse(&content);
    let current = ctx.standards().current_python;
    let mut issues = Vec::new();

    match dockerfile.python_version() {
        Some(version) if version >= current => {},
        Some(version) => {
            issues.push(format!("base image uses Python {version} (should be {current})"));
        },
        None => issues.push(format!("base image is not python:{current}")),
    }
    if dockerfile.runs_as_root() {
        issues.push("runs as root (add a non-root USER)".to_string());
    }
    if !ctx.exists(paths::DOCKERIGNORE)? {
        issues.push(format!("{} missing", paths::DOCKERIGNORE));
    }

    Ok(if issues.is_empty() {
        Outcome::pass(format!("Dockerfile uses Python {current} and a non-root user"))
    } else {
        Outcome::warn(format!("Dockerfile issues: {}", issues.join("; ")))
    })
}
