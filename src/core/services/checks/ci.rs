//! CI/CD checks: required workflows

use crate::core::services::registry::{CheckContext, CheckError, Outcome};
use crate::paths;

use super::workflow_files;

/// The mandatory CI workflow is present
pub(super) fn ci_workflow(ctx: &CheckContext<'_>) -> Result<Outcome, CheckError> {
    let name = &ctx.standards().ci_workflow;
    Ok(if ctx.exists(&paths::workflow(name))? {
        Outcome::pass(format!("{name} workflow present"))
    } else {
        Outcome::fail(format!("Missing {name} workflow"))
    })
}

/// A Ruff auto-formatting workflow is present
pub(super) fn format_workflow(ctx: &CheckContext<'_>) -> Result<Outcome, CheckError> {
    let workflows = workflow_files(ctx)?;
    if workflows.is_empty() {
        return Ok(Outcome::warn(format!("No workflows in {}", paths::WORKFLOWS_DIR)));
    }

    let found = workflows.iter().find(|name| {
        let lower = name.to_lowercase();
        lower.contains("ruff") || lower.contains("format")
    });
    Ok(match found {
        Some(name) => Outcome::pass(format!("Ruff auto-formatting workflow present ({name})")),
        None => Outcome::warn("Missing Ruff auto-formatting workflow"),
    })
}
