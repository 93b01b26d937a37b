//! Virtual environment management
//!
//! Creates the isolated Python environment and installs the declared
//! dependencies into it. Both steps shell out to the interpreter with
//! inherited stdio so the user sees the installer's own progress output;
//! a non-zero exit from either tool is fatal.

use std::path::Path;
use std::process::Command;

use crate::paths;

/// Create the virtual environment at `root/venv` using `python`.
pub fn create(root: &Path, python: &str) -> anyhow::Result<()> {
    log::debug!("creating virtual environment with {python}");
    let status = Command::new(python)
        .args(["-m", "venv", paths::VENV_DIR])
        .current_dir(root)
        .status()
        .map_err(|err| anyhow::anyhow!("failed to run {python}: {err}"))?;

    if !status.success() {
        anyhow::bail!("{python} -m venv exited with {status}");
    }
    Ok(())
}

/// Install the dependency manifest into the virtual environment.
pub fn install(root: &Path) -> anyhow::Result<()> {
    let pip = paths::venv_tool(root, "pip");
    log::debug!("installing {} via {}", paths::REQUIREMENTS_FILE, pip.display());
    let status = Command::new(&pip)
        .args(["install", "-r", paths::REQUIREMENTS_FILE])
        .current_dir(root)
        .status()
        .map_err(|err| anyhow::anyhow!("failed to run {}: {err}", pip.display()))?;

    if !status.success() {
        anyhow::bail!("pip install exited with {status}");
    }
    Ok(())
}
