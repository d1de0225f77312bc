//! Documentation checks: required and optional files

use crate::core::services::registry::{CheckContext, CheckError, Outcome};
use crate::paths;

fn required(ctx: &CheckContext<'_>, path: &str, what: &str) -> Result<Outcome, CheckError> {
    Ok(if ctx.exists(path)? {
        Outcome::pass(format!("{what} present"))
    } else {
        Outcome::fail(format!("{what} missing"))
    })
}

fn optional(ctx: &CheckContext<'_>, path: &str, what: &str) -> Result<Outcome, CheckError> {
    Ok(if ctx.exists(path)? {
        Outcome::pass(format!("{what} present (optional)"))
    } else {
        Outcome::not_applicable(format!("{what} not present (optional)"))
    })
}

pub(super) fn readme(ctx: &CheckContext<'_>) -> Result<Outcome, CheckError> {
    required(ctx, paths::README, "README.md")
}

pub(super) fn srd(ctx: &CheckContext<'_>) -> Result<Outcome, CheckError> {
    required(ctx, paths::SRD, "System Readiness Document")
}

pub(super) fn claude_md(ctx: &CheckContext<'_>) -> Result<Outcome, CheckError> {
    optional(ctx, paths::CLAUDE_MD, "AI assistant instructions")
}

pub(super) fn ai_tracking(ctx: &CheckContext<'_>) -> Result<Outcome, CheckError> {
    optional(ctx, paths::AI_TRACKING, "AI development tracking")
}
