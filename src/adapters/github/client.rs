//! Hosting API accessor
//!
//! Every `exists`/`read`/`list_dir` call is one request against the
//! repository contents endpoint. Nothing is cached. `exists` asks for entry
//! metadata and, like the local accessor, is true only for files.

use std::fmt;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Deserialize;

use crate::core::ports::{AccessError, SourceAccessor, SourceKind};
use crate::resolver::RepoSlug;

use super::auth::Credential;

/// Media type returning file content as-is
const RAW: &str = "application/vnd.github.raw";
/// Media type returning JSON metadata
const JSON: &str = "application/vnd.github+json";
/// REST API version sent with every request
const API_VERSION: &str = "2022-11-28";

/// One entry of a directory listing
#[derive(Debug, Deserialize)]
struct ContentEntry {
    name: String,
    #[serde(rename = "type")]
    kind: String,
}

/// The fields of repository metadata we use
#[derive(Debug, Deserialize)]
struct RepoInfo {
    #[serde(default)]
    topics: Vec<String>,
}

/// Source accessor backed by the hosting service's REST API
#[derive(Clone)]
pub struct RemoteAccessor {
    slug: RepoSlug,
    api_url: String,
    credential: Credential,
    client: Client,
}

impl fmt::Debug for RemoteAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteAccessor")
            .field("slug", &self.slug)
            .field("api_url", &self.api_url)
            .field("credential", &self.credential)
            .finish_non_exhaustive()
    }
}

impl RemoteAccessor {
    /// Create an accessor for `slug`
    ///
    /// `api_url` is the REST API root (e.g. `https://api.github.com`);
    /// `timeout` bounds each request.
    pub fn new(
        slug: RepoSlug,
        api_url: &str,
        credential: Credential,
        timeout: Duration,
    ) -> Result<Self, AccessError> {
        let mut headers = HeaderMap::new();
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static(API_VERSION));

        let client = Client::builder()
            .user_agent(format!("pycomply/{}", crate::VERSION))
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| AccessError::Network {
                path: api_url.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            slug,
            api_url: api_url.trim_end_matches('/').to_string(),
            credential,
            client,
        })
    }

    /// The repository being accessed
    #[must_use]
    pub const fn slug(&self) -> &RepoSlug {
        &self.slug
    }

    fn repo_url(&self) -> String {
        format!("{}/repos/{}/{}", self.api_url, self.slug.owner(), self.slug.repo())
    }

    fn contents_url(&self, path: &str) -> String {
        format!("{}/contents/{}", self.repo_url(), path.trim_start_matches('/'))
    }

    /// Send a GET; `Ok(None)` on 404
    fn get(
        &self,
        url: &str,
        accept: &'static str,
        path: &str,
    ) -> Result<Option<Response>, AccessError> {
        log::debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .header(ACCEPT, accept)
            .bearer_auth(self.credential.token())
            .send()
            .map_err(|e| transport_error(path, &e))?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response)),
            status => Err(AccessError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            }),
        }
    }

    /// Confirm the repository is reachable with this credential
    ///
    /// A missing repository is reported as a 404 status error.
    pub fn check_reachable(&self) -> Result<(), AccessError> {
        let subject = self.slug.to_string();
        match self.get(&self.repo_url(), JSON, &subject)? {
            Some(_) => Ok(()),
            None => Err(AccessError::Status {
                path: subject,
                status: StatusCode::NOT_FOUND.as_u16(),
            }),
        }
    }
}

fn transport_error(path: &str, err: &reqwest::Error) -> AccessError {
    if err.is_timeout() {
        AccessError::Timeout {
            path: path.to_string(),
        }
    } else {
        AccessError::Network {
            path: path.to_string(),
            message: err.to_string(),
        }
    }
}

fn decode_error(path: &str, err: &reqwest::Error) -> AccessError {
    if err.is_timeout() {
        return transport_error(path, err);
    }
    AccessError::InvalidResponse {
        path: path.to_string(),
        message: err.to_string(),
    }
}

impl SourceAccessor for RemoteAccessor {
    fn exists(&self, path: &str) -> Result<bool, AccessError> {
        let Some(response) = self.get(&self.contents_url(path), JSON, path)? else {
            return Ok(false);
        };
        // Directories answer with an array listing, files with one entry
        let metadata: serde_json::Value = response.json().map_err(|e| decode_error(path, &e))?;
        Ok(metadata.get("type").and_then(serde_json::Value::as_str) == Some("file"))
    }

    fn read(&self, path: &str) -> Result<Option<String>, AccessError> {
        let Some(response) = self.get(&self.contents_url(path), RAW, path)? else {
            return Ok(None);
        };
        response.text().map(Some).map_err(|e| decode_error(path, &e))
    }

    fn list_dir(&self, path: &str) -> Result<Vec<String>, AccessError> {
        let Some(response) = self.get(&self.contents_url(path), JSON, path)? else {
            return Ok(Vec::new());
        };
        let entries: Vec<ContentEntry> = response.json().map_err(|e| decode_error(path, &e))?;
        let mut names: Vec<String> = entries
            .into_iter()
            .filter(|entry| entry.kind == "file")
            .map(|entry| entry.name)
            .collect();
        names.sort();
        Ok(names)
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Remote
    }

    fn display_name(&self) -> String {
        self.slug.to_string()
    }

    fn topics(&self) -> Result<Option<Vec<String>>, AccessError> {
        let subject = self.slug.to_string();
        let Some(response) = self.get(&self.repo_url(), JSON, &subject)? else {
            return Err(AccessError::Status {
                path: subject,
                status: StatusCode::NOT_FOUND.as_u16(),
            });
        };
        let info: RepoInfo = response.json().map_err(|e| decode_error(&subject, &e))?;
        Ok(Some(info.topics))
    }
}
