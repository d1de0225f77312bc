//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use super::commands::{self, CheckOptions};
use pycomply::adapters::github::AuthMethod;
use pycomply::output::OutputMode;

/// pycomply - Python project standards compliance checker
#[derive(Parser, Debug)]
#[command(
    name = "pycomply",
    version,
    about = "Score a Python repository against the project standards",
    long_about = "Score a Python repository against the project standards.\n\n\
                  REPOSITORY is a local directory, an owner/repo shorthand, or a\n\
                  repository URL. Exits 0 when the score is at least 75%."
)]
pub struct Cli {
    /// Local path, owner/repo, or repository URL
    pub repository: String,

    /// Credential strategy for hosted repositories
    #[arg(long, value_enum, default_value_t = AuthMethod::Auto)]
    pub auth: AuthMethod,

    /// API token (takes priority over GITHUB_TOKEN / GH_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Show every check's message, including passing and optional checks
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,

    /// Write the report to this file (Markdown, or JSON with --json)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Config file (default: ~/.config/pycomply/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the hosting API root URL
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Override the per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Run checks in parallel
    #[arg(long)]
    pub parallel: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let options = CheckOptions {
        repository: cli.repository,
        auth: cli.auth,
        token: cli.token,
        verbose: cli.verbose,
        output: cli.output,
        config: cli.config,
        api_url: cli.api_url,
        timeout: cli.timeout,
        parallel: cli.parallel,
    };

    let passed = commands::check(&options, output_mode)?;
    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
