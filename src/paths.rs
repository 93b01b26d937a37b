//! Centralized path definitions for hsa
//!
//! Single source of truth for the filesystem layout the scaffold produces and
//! the launcher inspects.
//!
//! ## Scaffolded project layout
//!
//! ```text
//! helpscout-analytics/
//! ├── .github/workflows/        # CI workflow directory (empty stub)
//! ├── .gitignore
//! ├── .env.example              # Secrets template (committed)
//! ├── .env                      # Secrets file (gitignored, created by `hsa run`)
//! ├── README.md
//! ├── requirements.txt          # Python dependency manifest
//! ├── data/
//! │   ├── README.md
//! │   └── customer.csv          # Dropped in by the user, not scaffolded
//! ├── notebooks/analysis.ipynb
//! ├── presentation/slides.md
//! ├── src/                      # Application modules (out of scope here)
//! ├── output/
//! └── venv/                     # Virtual environment (gitignored)
//! ```
//!
//! ## Global (user-level)
//!
//! ```text
//! ~/.hsa/
//! └── config.toml               # Interpreter, project dir, git identity
//! ```

use std::path::{Path, PathBuf};

// =============================================================================
// Project-level paths (inside the scaffolded project)
// =============================================================================

/// Default name of the scaffolded project directory
pub const PROJECT_DIR: &str = "helpscout-analytics";

/// Virtual environment directory name
pub const VENV_DIR: &str = "venv";

/// Secrets file (gitignored, holds real credentials)
pub const ENV_FILE: &str = ".env";

/// Secrets template (committed, placeholder values)
pub const ENV_EXAMPLE: &str = ".env.example";

/// Python dependency manifest
pub const REQUIREMENTS_FILE: &str = "requirements.txt";

/// Customer data file the app reads; its absence is non-fatal
pub const DATA_FILE: &str = "data/customer.csv";

/// Entrypoint of the web application started by `hsa run`
pub const APP_ENTRYPOINT: &str = "streamlit_app.py";

#[cfg(windows)]
const VENV_BIN: &str = "Scripts";
#[cfg(not(windows))]
const VENV_BIN: &str = "bin";

/// Get the virtual environment directory under `root`.
#[must_use]
pub fn venv_dir(root: &Path) -> PathBuf {
    root.join(VENV_DIR)
}

/// Get the path of an executable installed in the virtual environment.
///
/// Resolves `venv/bin/<tool>` (or `venv\Scripts\<tool>` on Windows).
#[must_use]
pub fn venv_tool(root: &Path, tool: &str) -> PathBuf {
    venv_dir(root).join(VENV_BIN).join(tool)
}

/// Get path to the secrets file under `root`.
#[must_use]
pub fn env_file(root: &Path) -> PathBuf {
    root.join(ENV_FILE)
}

/// Get path to the secrets template under `root`.
#[must_use]
pub fn env_example(root: &Path) -> PathBuf {
    root.join(ENV_EXAMPLE)
}

/// Get path to the customer data file under `root`.
#[must_use]
pub fn data_file(root: &Path) -> PathBuf {
    root.join(DATA_FILE)
}

// =============================================================================
// Global paths (user-level)
// =============================================================================

/// Global config directory name
const GLOBAL_DIR: &str = ".hsa";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global hsa directory.
///
/// Returns `~/.hsa/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.hsa/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
