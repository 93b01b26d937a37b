//! Scaffold the demo project

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;

use hsa::config::GlobalConfig;
use hsa::output::{OutputMode, SetupSummary};
use hsa::{git, scaffold, venv};

/// Message of the single commit the scaffold creates
const INITIAL_COMMIT_MESSAGE: &str = "Initial commit: Help Scout analytics demo scaffold";

/// Scaffold the demo project in the current directory.
///
/// If the project directory already exists, asks for confirmation before
/// deleting it (`yes` skips the prompt). Declined, unexpected, or
/// non-interactive input aborts with the directory untouched. Everything
/// after the confirmation is fail-fast: the first error stops the run.
pub fn setup(yes: bool, mode: OutputMode) -> anyhow::Result<()> {
    let config = GlobalConfig::load();
    let root = PathBuf::from(&config.project_dir);

    if root.exists() {
        let confirmed = yes || confirm_delete(&config.project_dir);
        if !confirmed {
            anyhow::bail!("aborted - {} left untouched", config.project_dir);
        }
        fs::remove_dir_all(&root)
            .with_context(|| format!("deleting {}", config.project_dir))?;
        log::info!("deleted existing {}", config.project_dir);
    }

    println!("Scaffolding {}...\n", config.project_dir);

    let written = scaffold::write_tree(&root)?;
    println!("  Created {} directories, {} files", scaffold::DIRS.len(), written.len());

    let repo = git::init(&root)?;
    println!("  Initialized git repository");

    venv::create(&root, &config.python).context("creating virtual environment")?;
    println!("  Created virtual environment");

    venv::install(&root).context("installing dependencies")?;
    println!("  Installed dependencies");

    let oid = git::commit_all(&repo, INITIAL_COMMIT_MESSAGE, &config.git.name, &config.git.email)?;

    let summary = SetupSummary {
        success: true,
        project_dir: config.project_dir,
        files_created: scaffold::manifest(&root).len(),
        commit: git::short_id(oid),
    };
    summary.render(mode);
    Ok(())
}

/// Ask whether the existing project directory may be deleted.
///
/// Only an explicit "y"/"yes" proceeds; any other answer, including a closed
/// or non-interactive stdin, counts as "no".
fn confirm_delete(project_dir: &str) -> bool {
    print!("{project_dir} already exists. Delete and recreate? [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
