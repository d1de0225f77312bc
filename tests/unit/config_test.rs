//! Tests for config file loading

use std::path::Path;

use pycomply::config::{Config, ConfigError};
use pycomply::core::models::PythonVersion;

use crate::common::TestRepo;

#[test]
fn load_from_reads_every_section() {
    let repo = TestRepo::new();
    repo.add_file(
        "config.toml",
        r#"
        [remote]
        host = "git.example.org"
        api_url = "https://git.example.org/api/v3"

        [standards]
        current_python = "3.14"
        acceptable_python = "3.13"
        required_keywords = ["internal-lib"]
        line_length = 100
        ci_workflow = "ci.yml"

        [run]
        parallel = true
        "#,
    );

    let config = Config::load_from(&repo.path().join("config.toml")).unwrap();
    assert_eq!(config.remote.host, "git.example.org");
    assert_eq!(config.remote.timeout_secs, 10);
    assert_eq!(config.standards.current_python, PythonVersion::new(3, 14));
    assert_eq!(config.standards.required_keywords, ["internal-lib"]);
    assert_eq!(config.standards.line_length, 100);
    assert_eq!(config.standards.required_poetry_plugins.len(), 3);
    assert!(config.run.parallel);
}

#[test]
fn load_from_missing_file_is_error() {
    let err = Config::load_from(Path::new("/nonexistent/pycomply/config.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn load_from_malformed_file_is_error() {
    let repo = TestRepo::new();
    repo.add_file("config.toml", "[remote\n");
    let err = Config::load_from(&repo.path().join("config.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn unknown_keys_are_ignored() {
    let config = Config::parse("[ui]\ntheme = \"dark\"\n", Path::new("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn default_config_path_is_under_app_dir() {
    assert!(Config::config_path().ends_with("pycomply/config.toml"));
}
