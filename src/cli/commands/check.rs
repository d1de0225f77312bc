//! Check a repository and report its compliance

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use pycomply::adapters::LocalAccessor;
use pycomply::adapters::github::{AuthMethod, GhCli, RemoteAccessor, resolve_credential};
use pycomply::config::Config;
use pycomply::core::ports::SourceAccessor;
use pycomply::core::services::{CheckRegistry, Execution};
use pycomply::output::{OutputMode, ReportDocument};
use pycomply::resolver::{RepoTarget, Resolver};

/// Command-line options for a compliance run
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Local path, owner/repo, or URL
    pub repository: String,
    /// Credential strategy
    pub auth: AuthMethod,
    /// Explicit API token
    pub token: Option<String>,
    /// Show all messages
    pub verbose: bool,
    /// Report file
    pub output: Option<PathBuf>,
    /// Config file override
    pub config: Option<PathBuf>,
    /// API root override
    pub api_url: Option<String>,
    /// Timeout override in seconds
    pub timeout: Option<u64>,
    /// Run checks in parallel
    pub parallel: bool,
}

fn load_config(options: &CheckOptions) -> anyhow::Result<Config> {
    let mut config = match &options.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    if let Some(api_url) = &options.api_url {
        config.remote.api_url.clone_from(api_url);
    }
    if let Some(timeout) = options.timeout {
        config.remote.timeout_secs = timeout;
    }
    if options.parallel {
        config.run.parallel = true;
    }
    Ok(config)
}

/// Build the accessor for a resolved target
///
/// Remote targets need a credential and a reachable API; both failures are
/// fatal and happen before any check runs.
fn accessor_for(
    target: RepoTarget,
    options: &CheckOptions,
    config: &Config,
) -> anyhow::Result<Box<dyn SourceAccessor>> {
    match target {
        RepoTarget::Local(path) => {
            log::info!("checking local directory {}", path.display());
            Ok(Box::new(LocalAccessor::new(path)))
        },
        RepoTarget::Remote(slug) => {
            log::info!("checking remote repository {slug}");
            let env = |name: &str| std::env::var(name).ok();
            let credential =
                resolve_credential(options.auth, options.token.as_deref(), &env, &GhCli)?;
            let accessor = RemoteAccessor::new(
                slug,
                &config.remote.api_url,
                credential,
                config.remote.timeout(),
            )?;
            accessor
                .check_reachable()
                .with_context(|| format!("cannot reach repository {}", accessor.slug()))?;
            Ok(Box::new(accessor))
        },
    }
}

fn write_report(path: &Path, document: &ReportDocument, mode: OutputMode) -> anyhow::Result<()> {
    let content = match mode {
        OutputMode::Json => document.to_json(),
        OutputMode::Human => document.to_markdown(chrono::Local::now()),
    };
    fs::write(path, content).with_context(|| format!("cannot write report to {}", path.display()))?;
    log::info!("report written to {}", path.display());
    Ok(())
}

/// Run every check against the repository and present the report
///
/// Returns whether the score meets the passing bar.
pub fn check(options: &CheckOptions, mode: OutputMode) -> anyhow::Result<bool> {
    let config = load_config(options)?;

    let resolver = Resolver::new(&config.remote.host)?;
    let target = resolver.resolve(&options.repository)?;
    let accessor = accessor_for(target, options, &config)?;

    let execution = if config.run.parallel {
        Execution::Parallel
    } else {
        Execution::Sequential
    };
    let registry = CheckRegistry::standard();
    let report =
        registry.evaluate(accessor.as_ref(), &config.standards, &options.repository, execution);
    let document = ReportDocument::from(&report);

    match &options.output {
        Some(path) => {
            write_report(path, &document, mode)?;
            println!(
                "Report written to {} (score {:.1}%, {})",
                path.display(),
                document.score,
                document.tier
            );
        },
        None => document.render(mode, options.verbose),
    }

    Ok(report.meets_standard())
}
