//! Configuration checks: Python version, dependency manager, keywords, topics

use crate::core::models::PythonVersion;
use crate::core::services::registry::{CheckContext, CheckError, Outcome};

use super::{Manager, declared_python, lookup, lookup_str, pyproject, string_list};

/// `requires-python` (or Poetry's python dependency) targets the current version
pub(super) fn python_version(ctx: &CheckContext<'_>) -> Result<Outcome, CheckError> {
    let Some(config) = pyproject(ctx)? else {
        return Ok(Outcome::fail("pyproject.toml not found"));
    };
    let Some(spec) = declared_python(&config) else {
        return Ok(Outcome::fail("Python version not specified in pyproject.toml"));
    };

    let standards = ctx.standards();
    let current = standards.current_python;
    Ok(match PythonVersion::from_specifier(spec) {
        Some(v) if v >= current => Outcome::pass(format!("Uses Python {spec} (current standard)")),
        Some(v) if v >= standards.acceptable_python => Outcome::warn(format!(
            "Uses Python {spec} (acceptable but should upgrade to >={current})"
        )),
        Some(_) => Outcome::fail(format!("Uses Python {spec} (should be >={current})")),
        None => Outcome::fail(format!(
            "Cannot determine a minimum version from '{spec}' (should be >={current})"
        )),
    })
}

/// First run of digits in a requirement string, e.g. `2` in `poetry-core>=2.0.0`
fn first_number(spec: &str) -> Option<u32> {
    let start = spec.find(|c: char| c.is_ascii_digit())?;
    let digits: String = spec[start..].chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// The Poetry version requirement: `tool.poetry.requires-poetry`, then the
/// build-system requirement on `poetry`/`poetry-core`
fn poetry_requirement(config: &toml::Table) -> Option<String> {
    if let Some(spec) = lookup_str(config, &["tool", "poetry", "requires-poetry"]) {
        return Some(spec.to_string());
    }
    string_list(lookup(config, &["build-system", "requires"]))
        .into_iter()
        .find(|req| req.trim().to_lowercase().starts_with("poetry"))
        .map(str::to_string)
}

/// Poetry 2.x is the standard dependency manager
pub(super) fn dependency_manager(ctx: &CheckContext<'_>) -> Result<Outcome, CheckError> {
    let Some(config) = pyproject(ctx)? else {
        return Ok(Outcome::fail("pyproject.toml not found"));
    };

    Ok(match Manager::detect(&config) {
        Some(Manager::Poetry) => match poetry_requirement(&config) {
            Some(spec) if first_number(&spec).is_some_and(|major| major >= 2) => {
                Outcome::pass(format!("Poetry {spec} specified"))
            },
            Some(spec) => Outcome::warn(format!("Poetry {spec} specified (should be >=2.1)")),
            None => Outcome::warn("Poetry used without a version requirement (should be >=2.1)"),
        },
        Some(other) => Outcome::warn(format!("Uses {} (standard is Poetry >=2.1)", other.name())),
        None => Outcome::fail("No dependency manager configured (standard is Poetry >=2.1)"),
    })
}

/// Plugin names declared under `tool.poetry.requires-plugins`
fn declared_plugins(config: &toml::Table) -> Option<Vec<String>> {
    let value = lookup(config, &["tool", "poetry", "requires-plugins"])?;
    if let Some(table) = value.as_table() {
        return Some(table.keys().cloned().collect());
    }
    Some(string_list(Some(value)).into_iter().map(str::to_string).collect())
}

/// A Poetry project declares the required plugins
pub(super) fn poetry_plugins(ctx: &CheckContext<'_>) -> Result<Outcome, CheckError> {
    let Some(config) = pyproject(ctx)? else {
        return Ok(Outcome::not_applicable("No pyproject.toml"));
    };
    if Manager::detect(&config) != Some(Manager::Poetry) {
        return Ok(Outcome::not_applicable("Not a Poetry project"));
    }
    let Some(declared) = declared_plugins(&config) else {
        return Ok(Outcome::not_applicable("No Poetry plugins declared"));
    };

    let missing: Vec<&str> = ctx
        .standards()
        .required_poetry_plugins
        .iter()
        .filter(|p| !declared.contains(*p))
        .map(String::as_str)
        .collect();

    Ok(if missing.is_empty() {
        Outcome::pass("Required Poetry plugins configured")
    } else {
        Outcome::warn(format!("Missing required plugin(s): {}", missing.join(", ")))
    })
}

/// The detected manager's lock file is committed
pub(super) fn lock_file(ctx: &CheckContext<'_>) -> Result<Outcome, CheckError> {
    let Some(config) = pyproject(ctx)? else {
        return Ok(Outcome::not_applicable("No pyproject.toml"));
    };
    let Some(manager) = Manager::detect(&config) else {
        return Ok(Outcome::not_applicable("No dependency manager detected"));
    };
    let Some(lock) = manager.lock_file() else {
        return Ok(Outcome::not_applicable(format!("{} does not use a lock file", manager.name())));
    };

    Ok(if ctx.exists(lock)? {
        Outcome::pass(format!("{lock} present"))
    } else {
        Outcome::fail(format!("{lock} missing"))
    })
}

/// Keywords from `project.keywords`, falling back to `tool.poetry.keywords`
fn declared_keywords(config: &toml::Table) -> Vec<&str> {
    let project = string_list(lookup(config, &["project", "keywords"]));
    if project.is_empty() {
        string_list(lookup(config, &["tool", "poetry", "keywords"]))
    } else {
        project
    }
}

/// The project declares one of the repository-type keywords
pub(super) fn keywords(ctx: &CheckContext<'_>) -> Result<Outcome, CheckError> {
    let Some(config) = pyproject(ctx)? else {
        return Ok(Outcome::fail("pyproject.toml not found"));
    };

    let standards = ctx.standards();
    let keywords = declared_keywords(&config);
    Ok(if standards.has_required_keyword(&keywords) {
        Outcome::pass("Has required keyword(s)")
    } else {
        Outcome::fail(format!(
            "Missing required keyword. Should have one of: {}",
            standards.required_keywords.join(", ")
        ))
    })
}

/// The hosted repository carries one of the repository-type topics
pub(super) fn topics(ctx: &CheckContext<'_>) -> Result<Outcome, CheckError> {
    let Some(topics) = ctx.accessor().topics()? else {
        return Ok(Outcome::not_applicable("Topics are only available for hosted repositories"));
    };

    let standards = ctx.standards();
    Ok(if standards.has_required_keyword(&topics) {
        Outcome::pass("Has required topic(s)")
    } else {
        Outcome::fail(format!(
            "Missing required topic. Should have one of: {}",
            standards.required_keywords.join(", ")
        ))
    })
}
