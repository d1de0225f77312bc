//! GitHub-hosted repositories
//!
//! - `auth` - Credential resolution (token, environment, `gh` session)
//! - `client` - `SourceAccessor` over the REST contents API

mod auth;
mod client;

pub use auth::{
    AuthError, AuthMethod, Credential, CredentialSource, GhCli, SessionTokenSource,
    TOKEN_ENV_VARS, resolve_credential,
};
pub use client::RemoteAccessor;
