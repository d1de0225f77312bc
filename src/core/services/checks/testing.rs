//! Testing checks: pytest and coverage

use crate::core::services::registry::{CheckContext, CheckError, Outcome};
use crate::paths;

use super::{has_key, lookup, pyproject};

/// Whether `--cov` appears in pytest's `addopts` (string or list form)
fn addopts_has_cov(config: &toml::Table) -> bool {
    match lookup(config, &["tool", "pytest", "ini_options", "addopts"]) {
        Some(toml::Value::String(opts)) => opts.contains("--cov"),
        Some(toml::Value::Array(opts)) => opts
            .iter()
            .filter_map(toml::Value::as_str)
            .any(|opt| opt.contains("--cov")),
        _ => false,
    }
}

/// Pytest configured in pyproject.toml or pytest.ini
fn pytest_configured(
    ctx: &CheckContext<'_>,
    config: Option<&toml::Table>,
) -> Result<bool, CheckError> {
    if config.is_some_and(|c| has_key(c, &["tool", "pytest"])) {
        return Ok(true);
    }
    ctx.exists(paths::PYTEST_INI)
}

/// Pytest is the test framework
pub(super) fn test_framework(ctx: &CheckContext<'_>) -> Result<Outcome, CheckError> {
    let config = pyproject(ctx)?;
    Ok(if pytest_configured(ctx, config.as_ref())? {
        Outcome::pass("Pytest configured")
    } else {
        Outcome::fail("Pytest not configured")
    })
}

/// Pytest reports coverage
pub(super) fn test_coverage(ctx: &CheckContext<'_>) -> Result<Outcome, CheckError> {
    let config = pyproject(ctx)?;
    if !pytest_configured(ctx, config.as_ref())? {
        return Ok(Outcome::not_applicable("Pytest not configured"));
    }

    let configured = config
        .as_ref()
        .is_some_and(|c| has_key(c, &["tool", "coverage"]) || addopts_has_cov(c))
        || ctx.exists(paths::COVERAGERC)?;
    Ok(if configured {
        Outcome::pass("Coverage reporting configured")
    } else {
        Outcome::warn("Coverage reporting not configured")
    })
}
