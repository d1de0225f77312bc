//! Code quality checks: Ruff, type checking, pre-commit, SonarCloud

use crate::core::models::PythonVersion;
use crate::core::services::registry::{CheckContext, CheckError, Outcome};
use crate::paths;

use super::{declared_python_version, has_key, lookup, pyproject, workflow_files};

/// Ruff settings and where they were found
struct RuffConfig {
    source: &'static str,
    table: toml::Table,
}

/// `[tool.ruff]` in pyproject.toml, else a standalone `ruff.toml`/`.ruff.toml`
fn ruff_config(ctx: &CheckContext<'_>) -> Result<Option<RuffConfig>, CheckError> {
    if let Some(config) = pyproject(ctx)? {
        if let Some(table) = lookup(&config, &["tool", "ruff"]).and_then(toml::Value::as_table) {
            return Ok(Some(RuffConfig {
                source: paths::PYPROJECT,
                table: table.clone(),
            }));
        }
    }
    for source in paths::RUFF_CONFIGS {
        if let Some(table) = ctx.read_toml(source)? {
            return Ok(Some(RuffConfig { source, table }));
        }
    }
    Ok(None)
}

/// Ruff is the linter/formatter and targets a supported Python
pub(super) fn linter(ctx: &CheckContext<'_>) -> Result<Outcome, CheckError> {
    if let Some(ruff) = ruff_config(ctx)? {
        let acceptable = ctx.standards().acceptable_python;
        let target = ruff.table.get("target-version").and_then(toml::Value::as_str);
        return Ok(match target {
            Some(t) if PythonVersion::from_ruff_target(t).is_some_and(|v| v >= acceptable) => {
                Outcome::pass(format!("Ruff configured with target {t}"))
            },
            Some(t) => Outcome::warn(format!(
                "Ruff configured but target {t} is older than Python {acceptable}"
            )),
            None => {
                Outcome::warn(format!("Ruff configured in {} without target-version", ruff.source))
            },
        });
    }

    let uses_black = pyproject(ctx)?.is_some_and(|config| has_key(&config, &["tool", "black"]));
    Ok(if uses_black {
        Outcome::warn("Uses Black (should migrate to Ruff)")
    } else {
        Outcome::fail("No linter/formatter configured")
    })
}

/// Ruff line length and quote style follow the standard
pub(super) fn ruff_style(ctx: &CheckContext<'_>) -> Result<Outcome, CheckError> {
    let Some(ruff) = ruff_config(ctx)? else {
        return Ok(Outcome::not_applicable("Ruff not configured"));
    };

    let expected = i64::from(ctx.standards().line_length);
    let mut gaps = Vec::new();
    match ruff.table.get("line-length").and_then(toml::Value::as_integer) {
        Some(length) if length == expected => {},
        Some(length) => gaps.push(format!("line-length is {length} (standard is {expected})")),
        None => gaps.push(format!("line-length not set (standard is {expected})")),
    }
    let quote_style = ruff
        .table
        .get("format")
        .and_then(toml::Value::as_table)
        .is_some_and(|format| format.contains_key("quote-style"));
    if !quote_style {
        gaps.push("format.quote-style not set".to_string());
    }

    Ok(if gaps.is_empty() {
        Outcome::pass(format!("Line length set to {expected} and quote style configured"))
    } else {
        Outcome::warn(gaps.join("; "))
    })
}

/// Pyright (or basedpyright) is configured for the current Python
pub(super) fn type_checker(ctx: &CheckContext<'_>) -> Result<Outcome, CheckError> {
    let config = pyproject(ctx)?;
    let current = ctx.standards().current_python;

    let from_pyproject = config.as_ref().and_then(|config| {
        ["basedpyright", "pyright"].into_iter().find_map(|tool| {
            lookup(config, &["tool", tool]).and_then(toml::Value::as_table).map(|table| {
                let version = table.get("pythonVersion").and_then(toml::Value::as_str);
                (tool, version.map(str::to_string))
            })
        })
    });

    let pyright = match from_pyproject {
        Some(found) => Some(found),
        None => ctx.read_json(paths::PYRIGHT_CONFIG)?.map(|json| {
            let version = json.get("pythonVersion").and_then(serde_json::Value::as_str);
            ("pyright", version.map(str::to_string))
        }),
    };

    if let Some((tool, version)) = pyright {
        let targets_current = version
            .as_deref()
            .and_then(PythonVersion::from_specifier)
            .is_some_and(|v| v >= current);
        return Ok(if targets_current {
            Outcome::pass(format!(
                "{tool} configured for Python {}",
                version.unwrap_or_default()
            ))
        } else {
            Outcome::warn(format!("{tool} not configured for Python {current}"))
        });
    }

    let uses_mypy = config.as_ref().is_some_and(|c| has_key(c, &["tool", "mypy"]))
        || ctx.exists(paths::MYPY_INI)?;
    Ok(if uses_mypy {
        Outcome::warn("Uses mypy (consider pyright)")
    } else {
        Outcome::warn("Pyright not configured")
    })
}

/// Pre-commit hooks are configured and run Ruff
pub(super) fn pre_commit(ctx: &CheckContext<'_>) -> Result<Outcome, CheckError> {
    Ok(match ctx.read(paths::PRE_COMMIT_CONFIG)? {
        Some(content) if content.to_lowercase().contains("ruff") => {
            Outcome::pass("Pre-commit hooks configured with Ruff")
        },
        Some(_) => Outcome::warn("Pre-commit hooks configured without Ruff"),
        None => Outcome::warn(format!("{} missing", paths::PRE_COMMIT_CONFIG)),
    })
}

/// SonarCloud analysis is configured for the current Python
pub(super) fn sonarcloud(ctx: &CheckContext<'_>) -> Result<Outcome, CheckError> {
    let mut configured = ctx.any_exists(&paths::SONAR_CONFIGS)?;
    if !configured {
        for name in workflow_files(ctx)? {
            let content = ctx.read(&paths::workflow(&name))?.unwrap_or_default();
            if content.to_lowercase().contains("sonar") {
                configured = true;
                break;
            }
        }
    }
    if !configured {
        return Ok(Outcome::warn("SonarCloud not configured"));
    }

    let current = ctx.standards().current_python;
    let declared = pyproject(ctx)?.as_ref().and_then(declared_python_version);
    Ok(if declared.is_some_and(|v| v >= current) {
        Outcome::pass(format!("SonarCloud configured for Python {current}"))
    } else {
        Outcome::warn(format!("SonarCloud configured but not for Python {current}"))
    })
}
