//! Project-standards checks
//!
//! Each submodule holds the checks for one report category. Checks read
//! `pyproject.toml` and other files themselves; nothing is shared between
//! them, so any one of them can fail without affecting the rest.

mod ci;
mod configuration;
mod container;
mod documentation;
mod quality;
mod testing;

use crate::core::models::PythonVersion;
use crate::paths;

use super::registry::{Category, CheckContext, CheckDef, CheckError, CheckFn, CheckScope};

/// Every standard check in report order
#[must_use]
pub fn standard_checks() -> Vec<CheckDef> {
    vec![
        check(
            "python-version",
            "Python Version",
            Category::Configuration,
            5,
            configuration::python_version,
        ),
        check(
            "dependency-manager",
            "Dependency Manager",
            Category::Configuration,
            5,
            configuration::dependency_manager,
        ),
        check(
            "poetry-plugins",
            "Poetry Plugins",
            Category::Configuration,
            1,
            configuration::poetry_plugins,
        ),
        check("lock-file", "Lock File", Category::Configuration, 1, configuration::lock_file),
        check("linter", "Linter/Formatter", Category::CodeQuality, 5, quality::linter),
        check("ruff-style", "Ruff Style", Category::CodeQuality, 1, quality::ruff_style),
        check("type-checker", "Type Checker", Category::CodeQuality, 2, quality::type_checker),
        check("test-framework", "Test Framework", Category::Testing, 2, testing::test_framework),
        check("test-coverage", "Test Coverage", Category::Testing, 1, testing::test_coverage),
        check(
            "keywords",
            "Repository Keywords",
            Category::Configuration,
            1,
            configuration::keywords,
        ),
        check("pre-commit", "Pre-commit Hooks", Category::CodeQuality, 1, quality::pre_commit),
        check("ci-workflow", "Python Manager Workflow", Category::CiCd, 2, ci::ci_workflow),
        check(
            "format-workflow",
            "Ruff Formatting Workflow",
            Category::CiCd,
            1,
            ci::format_workflow,
        ),
        check(
            "container-build",
            "Container Build",
            Category::Infrastructure,
            1,
            container::container_build,
        ),
        check("sonarcloud", "SonarCloud", Category::CodeQuality, 1, quality::sonarcloud),
        check("readme", "README.md", Category::Documentation, 5, documentation::readme),
        check("srd", "SRD.md", Category::Documentation, 5, documentation::srd),
        check("claude-md", "CLAUDE.md", Category::Documentation, 1, documentation::claude_md),
        check("ai-tracking", "AI Tracking", Category::Documentation, 1, documentation::ai_tracking),
        CheckDef {
            scope: CheckScope::RemoteOnly,
            ..check(
                "repository-topics",
                "Repository Topics",
                Category::Configuration,
                1,
                configuration::topics,
            )
        },
    ]
}

const fn check(
    id: &'static str,
    title: &'static str,
    category: Category,
    weight: u32,
    run: CheckFn,
) -> CheckDef {
    CheckDef {
        id,
        title,
        category,
        weight,
        scope: CheckScope::Any,
        run,
    }
}

// =============================================================================
// pyproject.toml helpers
// =============================================================================

fn pyproject(ctx: &CheckContext<'_>) -> Result<Option<toml::Table>, CheckError> {
    ctx.read_toml(paths::PYPROJECT)
}

/// Walk nested tables by key
fn lookup<'a>(table: &'a toml::Table, keys: &[&str]) -> Option<&'a toml::Value> {
    let (first, rest) = keys.split_first()?;
    let mut value = table.get(*first)?;
    for key in rest {
        value = value.as_table()?.get(*key)?;
    }
    Some(value)
}

fn lookup_str<'a>(table: &'a toml::Table, keys: &[&str]) -> Option<&'a str> {
    lookup(table, keys)?.as_str()
}

fn has_key(table: &toml::Table, keys: &[&str]) -> bool {
    lookup(table, keys).is_some()
}

/// String entries of an array value; non-strings are skipped
fn string_list(value: Option<&toml::Value>) -> Vec<&str> {
    value
        .and_then(toml::Value::as_array)
        .map(|items| items.iter().filter_map(toml::Value::as_str).collect())
        .unwrap_or_default()
}

/// The Python requirement declared by the project
///
/// PEP 621 `project.requires-python` first, then Poetry's
/// `tool.poetry.dependencies.python`.
fn declared_python(table: &toml::Table) -> Option<&str> {
    lookup_str(table, &["project", "requires-python"])
        .or_else(|| lookup_str(table, &["tool", "poetry", "dependencies", "python"]))
}

fn declared_python_version(table: &toml::Table) -> Option<PythonVersion> {
    declared_python(table).and_then(PythonVersion::from_specifier)
}

/// Dependency managers recognized in `pyproject.toml`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Manager {
    Poetry,
    Uv,
    Pdm,
    Hatch,
}

impl Manager {
    const fn name(self) -> &'static str {
        match self {
            Self::Poetry => "Poetry",
            Self::Uv => "uv",
            Self::Pdm => "PDM",
            Self::Hatch => "Hatch",
        }
    }

    const fn lock_file(self) -> Option<&'static str> {
        match self {
            Self::Poetry => Some(paths::POETRY_LOCK),
            Self::Uv => Some(paths::UV_LOCK),
            Self::Pdm => Some(paths::PDM_LOCK),
            Self::Hatch => None,
        }
    }

    /// Detect from `[tool.*]` sections, then from build-system requirements
    fn detect(table: &toml::Table) -> Option<Self> {
        const SIGNATURES: [(Manager, &str, &str); 4] = [
            (Manager::Poetry, "poetry", "poetry"),
            (Manager::Uv, "uv", "uv_build"),
            (Manager::Pdm, "pdm", "pdm-backend"),
            (Manager::Hatch, "hatch", "hatchling"),
        ];

        if let Some((manager, _, _)) =
            SIGNATURES.iter().find(|(_, tool, _)| has_key(table, &["tool", *tool]))
        {
            return Some(*manager);
        }

        let requires = string_list(lookup(table, &["build-system", "requires"]));
        SIGNATURES
            .iter()
            .find(|(_, _, backend)| {
                requires.iter().any(|r| r.trim().to_lowercase().starts_with(*backend))
            })
            .map(|(manager, _, _)| *manager)
    }
}

/// Files directly under the workflows directory with a YAML extension
fn workflow_files(ctx: &CheckContext<'_>) -> Result<Vec<String>, CheckError> {
    let patterns = [glob::Pattern::new("*.yml"), glob::Pattern::new("*.yaml")];
    let names = ctx.accessor().list_dir(paths::WORKFLOWS_DIR)?;
    Ok(names
        .into_iter()
        .filter(|name| patterns.iter().flatten().any(|p| p.matches(name)))
        .collect())
}
