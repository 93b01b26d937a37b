//! Global configuration management
//!
//! Optional user preferences for the bootstrap tool, stored at
//! `~/.hsa/config.toml`. Every field has a default; a missing or unparseable
//! file silently falls back to the defaults, so the tool works with zero
//! configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::paths;

/// Global hsa configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Name of the project directory the scaffold creates
    #[serde(default = "default_project_dir")]
    pub project_dir: String,
    /// Python interpreter used to create the virtual environment
    #[serde(default = "default_python")]
    pub python: String,
    /// Identity used for the initial commit
    #[serde(default)]
    pub git: GitIdentity,
}

fn default_project_dir() -> String {
    paths::PROJECT_DIR.to_string()
}

fn default_python() -> String {
    "python3".to_string()
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            project_dir: default_project_dir(),
            python: default_python(),
            git: GitIdentity::default(),
        }
    }
}

/// Author identity for the scaffold's initial commit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitIdentity {
    /// Committer name
    #[serde(default = "default_git_name")]
    pub name: String,
    /// Committer email
    #[serde(default = "default_git_email")]
    pub email: String,
}

fn default_git_name() -> String {
    "HSA Demo".to_string()
}

fn default_git_email() -> String {
    "demo@example.com".to_string()
}

impl Default for GitIdentity {
    fn default() -> Self {
        Self {
            name: default_git_name(),
            email: default_git_email(),
        }
    }
}

impl GlobalConfig {
    /// Load config from `~/.hsa/config.toml`, or defaults if not present.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&paths::global_config())
    }

    /// Load config from a specific path, or defaults if missing/invalid.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            fs::read_to_string(path)
                .ok()
                .and_then(|content| toml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }
}
