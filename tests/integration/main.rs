//! Integration tests for the pycomply CLI
//!
//! These tests run the compiled binary against repositories in temporary
//! directories and against an in-process fake of the hosting API, covering
//! the exit status contract and every output mode.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::thread;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;
use tiny_http::{Response, Server};

/// Helper function to create a pycomply command isolated from user config
fn pycomply(home: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("pycomply"));
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("GITHUB_TOKEN")
        .env_remove("GH_TOKEN")
        .env_remove("RUST_LOG");
    cmd
}

/// Helper to write files into a directory
fn write_files(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full = root.join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full, content).unwrap();
    }
}

const MODERN_PYPROJECT: &str = r#"
[project]
name = "widget"
requires-python = ">=3.13"

[tool.poetry]
requires-poetry = ">=2.1"

[tool.ruff]
target-version = "py313"
"#;

/// Minimal modern project without a lock file: scores just above the passing bar
fn modern_repo() -> TempDir {
    let temp = TempDir::new().unwrap();
    write_files(
        temp.path(),
        &[
            ("pyproject.toml", MODERN_PYPROJECT),
            ("README.md", "# Widget\n"),
            ("SRD.md", "# SRD\n"),
        ],
    );
    temp
}

/// Old project: only a `pyproject.toml` targeting Python 3.9
fn legacy_repo() -> TempDir {
    let temp = TempDir::new().unwrap();
    write_files(temp.path(), &[("pyproject.toml", "[project]\nrequires-python = \">=3.9\"\n")]);
    temp
}

// =============================================================================
// EXIT STATUS
// =============================================================================

#[test]
fn test_legacy_project_fails() {
    let home = TempDir::new().unwrap();
    let repo = legacy_repo();

    pycomply(home.path())
        .arg(repo.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("PYTHON PROJECT STANDARDS COMPLIANCE REPORT"))
        .stdout(predicate::str::contains("Compliance Score: 7.1%"))
        .stdout(predicate::str::contains("NEEDS WORK"));
}

#[test]
fn test_modern_project_passes() {
    let home = TempDir::new().unwrap();
    let repo = modern_repo();

    pycomply(home.path())
        .arg(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Compliance Score: 75.7%"))
        .stdout(predicate::str::contains("GOOD"))
        .stdout(predicate::str::contains("Type: LOCAL"));
}

#[test]
fn test_parallel_matches_sequential() {
    let home = TempDir::new().unwrap();
    let repo = modern_repo();

    let sequential = pycomply(home.path()).arg(repo.path()).arg("--json").output().unwrap();
    let parallel = pycomply(home.path())
        .arg(repo.path())
        .args(["--json", "--parallel"])
        .output()
        .unwrap();
    assert_eq!(sequential.stdout, parallel.stdout);
    assert_eq!(sequential.status.code(), parallel.status.code());
}

// =============================================================================
// OUTPUT MODES
// =============================================================================

#[test]
fn test_json_output_shape() {
    let home = TempDir::new().unwrap();
    let repo = modern_repo();

    let output = pycomply(home.path()).arg(repo.path()).arg("--json").output().unwrap();
    assert_eq!(output.status.code(), Some(0));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["type"], "local");
    assert_eq!(json["score"], 75.7);
    assert_eq!(json["tier"], "GOOD");
    assert!(json["checks"].as_array().is_some_and(|c| !c.is_empty()));
    let names: Vec<&str> = json["checks"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|c| c["name"].as_str())
        .collect();
    assert!(names.contains(&"python-version"));
    assert!(names.contains(&"readme"));
}

#[test]
fn test_verbose_shows_passing_messages() {
    let home = TempDir::new().unwrap();
    let repo = modern_repo();

    pycomply(home.path())
        .arg(repo.path())
        .assert()
        .stdout(predicate::str::contains("No problems noted"));

    pycomply(home.path())
        .arg(repo.path())
        .arg("--verbose")
        .assert()
        .stdout(predicate::str::contains("README.md present"));
}

#[test]
fn test_output_file_markdown() {
    let home = TempDir::new().unwrap();
    let repo = legacy_repo();
    let report = home.path().join("report.md");

    pycomply(home.path())
        .arg(repo.path())
        .arg("--output")
        .arg(&report)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Report written to"))
        .stdout(predicate::str::contains("NEEDS WORK"))
        .stdout(predicate::str::contains("COMPLIANCE REPORT").not());

    let content = fs::read_to_string(&report).unwrap();
    assert!(content.starts_with("# Compliance Report: "));
    assert!(content.contains("| Status | Check | Weight | Message |"));
}

#[test]
fn test_output_file_json() {
    let home = TempDir::new().unwrap();
    let repo = modern_repo();
    let report = home.path().join("report.json");

    pycomply(home.path())
        .arg(repo.path())
        .args(["--json", "-o"])
        .arg(&report)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(json["tier"], "GOOD");
}

// =============================================================================
// CONFIGURATION
// =============================================================================

#[test]
fn test_config_changes_standards() {
    let home = TempDir::new().unwrap();
    let repo = legacy_repo();
    let config = home.path().join("pycomply.toml");
    fs::write(
        &config,
        "[standards]\ncurrent_python = \"3.9\"\nacceptable_python = \"3.8\"\n",
    )
    .unwrap();

    pycomply(home.path())
        .arg(repo.path())
        .arg("--config")
        .arg(&config)
        .arg("--verbose")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Uses Python >=3.9 (current standard)"));
}

#[test]
fn test_missing_config_is_fatal() {
    let home = TempDir::new().unwrap();
    let repo = modern_repo();

    pycomply(home.path())
        .arg(repo.path())
        .args(["--config", "/no/such/pycomply.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("cannot read config"));
}

// =============================================================================
// INPUT ERRORS
// =============================================================================

#[test]
fn test_unresolvable_input() {
    let home = TempDir::new().unwrap();

    pycomply(home.path())
        .arg("/no/such/path/anywhere")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_file_instead_of_directory() {
    let home = TempDir::new().unwrap();
    let repo = legacy_repo();

    pycomply(home.path())
        .arg(repo.path().join("pyproject.toml"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_usage_errors_exit_two() {
    let home = TempDir::new().unwrap();

    pycomply(home.path()).assert().code(2);
    pycomply(home.path())
        .args(["acme/widget", "--auth", "password"])
        .assert()
        .code(2);
}

// =============================================================================
// REMOTE REPOSITORIES
// =============================================================================

#[test]
fn test_remote_without_credential() {
    let home = TempDir::new().unwrap();

    pycomply(home.path())
        .args(["acme/widget", "--auth", "token"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no credential available"));
}

#[test]
fn test_remote_unreachable_api() {
    let home = TempDir::new().unwrap();
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    pycomply(home.path())
        .args(["acme/widget", "--token", "sekret", "--timeout", "2"])
        .args(["--api-url", &format!("http://127.0.0.1:{port}")])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot reach repository acme/widget"));
}

/// Serve a repository's files the way the contents API does
///
/// Raw requests get the file body; JSON requests get entry metadata, or a
/// listing for the workflows directory.
fn serve_repository(files: &[(&str, &str)], topics: &[&str]) -> String {
    let server = Server::http("127.0.0.1:0").unwrap();
    let base = format!("http://{}", server.server_addr());

    let mut raw: HashMap<String, String> = HashMap::new();
    let mut json: HashMap<String, String> = HashMap::new();
    for (path, body) in files {
        let url = format!("/repos/acme/widget/contents/{path}");
        json.insert(url.clone(), serde_json::json!({"name": path, "type": "file"}).to_string());
        raw.insert(url, (*body).to_string());
    }
    let workflows: Vec<serde_json::Value> = files
        .iter()
        .filter_map(|(path, _)| path.strip_prefix(".github/workflows/"))
        .map(|name| serde_json::json!({"name": name, "type": "file"}))
        .collect();
    json.insert(
        "/repos/acme/widget/contents/.github/workflows".to_string(),
        serde_json::Value::from(workflows).to_string(),
    );
    json.insert(
        "/repos/acme/widget".to_string(),
        serde_json::json!({"full_name": "acme/widget", "topics": topics}).to_string(),
    );

    thread::spawn(move || {
        for req in server.incoming_requests() {
            let wants_raw = req
                .headers()
                .iter()
                .any(|h| h.field.equiv("Accept") && h.value.as_str().ends_with(".raw"));
            let routes = if wants_raw { &raw } else { &json };
            let response = match routes.get(req.url()) {
                Some(body) => Response::from_string(body.clone()),
                None => Response::from_string("{}").with_status_code(404),
            };
            let _ = req.respond(response);
        }
    });
    base
}

#[test]
fn test_remote_repository_report() {
    let home = TempDir::new().unwrap();
    let api = serve_repository(
        &[
            ("pyproject.toml", MODERN_PYPROJECT),
            ("poetry.lock", "# lock\n"),
            ("README.md", "# Widget\n"),
            ("SRD.md", "# SRD\n"),
            (".github/workflows/PythonManager.yml", "name: ci\n"),
        ],
        &["python-lib"],
    );

    pycomply(home.path())
        .args(["https://github.com/acme/widget", "--token", "sekret", "--api-url", &api])
        .assert()
        .success()
        .stdout(predicate::str::contains("Repository: acme/widget"))
        .stdout(predicate::str::contains("Type: REMOTE"))
        .stdout(predicate::str::contains("Location: https://github.com/acme/widget"));
}
