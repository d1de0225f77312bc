//! Centralized path definitions for pycomply
//!
//! This module provides a single source of truth for every file path a check
//! inspects and for the location of the user configuration file.
//!
//! ## Inspected Layout
//!
//! ```text
//! repo/
//! ├── pyproject.toml                # Project, Poetry, Ruff, Pyright, Pytest config
//! ├── poetry.lock | uv.lock | pdm.lock
//! ├── ruff.toml | .ruff.toml        # Standalone Ruff config
//! ├── pyrightconfig.json
//! ├── pytest.ini
//! ├── .coveragerc
//! ├── .pre-commit-config.yaml
//! ├── Dockerfile
//! ├── .dockerignore
//! ├── sonar-project.properties | .sonarcloud.properties
//! ├── README.md
//! ├── SRD.md                        # System Readiness Document
//! ├── CLAUDE.md                     # Optional
//! ├── .ai/README.md                 # Optional
//! └── .github/workflows/*.yml
//! ```
//!
//! ### Global (User-Level)
//!
//! ```text
//! ~/.config/pycomply/
//! └── config.toml               # Remote endpoint, timeout, standards
//! ```

use std::path::PathBuf;

// =============================================================================
// Repository paths (relative to the repository root)
// =============================================================================

/// Project configuration
pub const PYPROJECT: &str = "pyproject.toml";

/// Poetry lock file
pub const POETRY_LOCK: &str = "poetry.lock";

/// uv lock file
pub const UV_LOCK: &str = "uv.lock";

/// PDM lock file
pub const PDM_LOCK: &str = "pdm.lock";

/// Standalone Ruff configuration files, in lookup order
pub const RUFF_CONFIGS: [&str; 2] = ["ruff.toml", ".ruff.toml"];

/// Standalone Pyright configuration
pub const PYRIGHT_CONFIG: &str = "pyrightconfig.json";

/// Standalone mypy configuration
pub const MYPY_INI: &str = "mypy.ini";

/// Standalone Pytest configuration
pub const PYTEST_INI: &str = "pytest.ini";

/// Standalone coverage configuration
pub const COVERAGERC: &str = ".coveragerc";

/// Pre-commit hook configuration
pub const PRE_COMMIT_CONFIG: &str = ".pre-commit-config.yaml";

/// GitHub Actions workflow directory
pub const WORKFLOWS_DIR: &str = ".github/workflows";

/// Container build file
pub const DOCKERFILE: &str = "Dockerfile";

/// Container build context exclusions
pub const DOCKERIGNORE: &str = ".dockerignore";

/// SonarCloud configuration files
pub const SONAR_CONFIGS: [&str; 2] = ["sonar-project.properties", ".sonarcloud.properties"];

/// Project overview
pub const README: &str = "README.md";

/// System Readiness Document
pub const SRD: &str = "SRD.md";

/// AI assistant instructions (optional)
pub const CLAUDE_MD: &str = "CLAUDE.md";

/// AI development tracking (optional)
pub const AI_TRACKING: &str = ".ai/README.md";

/// Path of a workflow file by name
#[must_use]
pub fn workflow(name: &str) -> String {
    format!("{WORKFLOWS_DIR}/{name}")
}

// =============================================================================
// Global paths (user-level)
// =============================================================================

/// Application directory name under the user config directory
const APP_DIR: &str = "pycomply";

/// Global configuration filename
const CONFIG_FILE: &str = "config.toml";

/// Get the global config directory (`~/.config/pycomply/`)
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR)
}

/// Get path to the global config file (`~/.config/pycomply/config.toml`)
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(CONFIG_FILE)
}
