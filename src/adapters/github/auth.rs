//! Credential resolution for the hosting API
//!
//! Strategies are tried in priority order: explicit token, then the token
//! environment variables, then the `gh` CLI session. The first non-empty
//! value wins. Nothing here reads process-global state on its own; the
//! environment lookup and the session source are passed in.

use std::fmt;
use std::process::Command;

use thiserror::Error;

/// Environment variables holding a token, in lookup order
pub const TOKEN_ENV_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// Which credential strategies to try
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum AuthMethod {
    /// Token first, then the CLI session
    #[default]
    Auto,
    /// Explicit token or environment variable only
    Token,
    /// `gh auth token` only
    Gh,
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Token => write!(f, "token"),
            Self::Gh => write!(f, "gh"),
        }
    }
}

/// Where a credential came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// `--token` flag
    Flag,
    /// Named environment variable
    Env(&'static str),
    /// `gh auth token`
    GhCli,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag => write!(f, "--token"),
            Self::Env(name) => write!(f, "${name}"),
            Self::GhCli => write!(f, "gh auth token"),
        }
    }
}

/// A resolved API token
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
    source: CredentialSource,
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

impl Credential {
    /// Wrap a token
    #[must_use]
    pub fn new(token: impl Into<String>, source: CredentialSource) -> Self {
        Self {
            token: token.into(),
            source,
        }
    }

    /// The bearer token
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Where the token came from
    #[must_use]
    pub const fn source(&self) -> CredentialSource {
        self.source
    }
}

/// No credential could be resolved
#[derive(Debug, Clone, Copy, Error)]
#[error("no credential available (--auth {method}): {hint}")]
pub struct AuthError {
    method: AuthMethod,
    hint: &'static str,
}

impl AuthError {
    /// The strategy that was requested
    #[must_use]
    pub const fn method(&self) -> AuthMethod {
        self.method
    }
}

/// A provider of tokens from an authenticated CLI session
pub trait SessionTokenSource {
    /// Current session token, if logged in
    fn session_token(&self) -> Option<String>;
}

/// The GitHub CLI (`gh auth token`)
#[derive(Debug, Clone, Copy, Default)]
pub struct GhCli;

impl SessionTokenSource for GhCli {
    fn session_token(&self) -> Option<String> {
        let output = match Command::new("gh").args(["auth", "token"]).output() {
            Ok(output) => output,
            Err(e) => {
                log::debug!("gh not available: {e}");
                return None;
            },
        };
        if !output.status.success() {
            log::debug!("gh auth token exited with {}", output.status);
            return None;
        }
        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn from_token(explicit: Option<&str>, env: &dyn Fn(&str) -> Option<String>) -> Option<Credential> {
    if let Some(token) = non_empty(explicit.map(str::to_string)) {
        return Some(Credential::new(token, CredentialSource::Flag));
    }
    TOKEN_ENV_VARS.into_iter().find_map(|name| {
        non_empty(env(name)).map(|token| Credential::new(token, CredentialSource::Env(name)))
    })
}

fn from_session(session: &dyn SessionTokenSource) -> Option<Credential> {
    non_empty(session.session_token()).map(|token| Credential::new(token, CredentialSource::GhCli))
}

/// Resolve a credential with the given strategy
///
/// `env` looks up an environment variable by name; pass
/// `|name| std::env::var(name).ok()` for the process environment.
pub fn resolve_credential(
    method: AuthMethod,
    explicit: Option<&str>,
    env: &dyn Fn(&str) -> Option<String>,
    session: &dyn SessionTokenSource,
) -> Result<Credential, AuthError> {
    let (credential, hint) = match method {
        AuthMethod::Token => (
            from_token(explicit, env),
            "pass --token or set GITHUB_TOKEN / GH_TOKEN",
        ),
        AuthMethod::Gh => (from_session(session), "run `gh auth login`"),
        AuthMethod::Auto => (
            from_token(explicit, env).or_else(|| from_session(session)),
            "pass --token, set GITHUB_TOKEN / GH_TOKEN, or run `gh auth login`",
        ),
    };

    let credential = credential.ok_or(AuthError { method, hint })?;
    log::debug!("using credential from {}", credential.source());
    Ok(credential)
}
