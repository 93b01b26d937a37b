//! Check prerequisites and start the web app

use std::process::Command;

use anyhow::Context;

use hsa::launcher;
use hsa::output::{OutputMode, PreflightReport};
use hsa::paths;

/// Check prerequisites in the current directory and start the web app.
///
/// The server runs in the foreground until interrupted; a non-zero server
/// exit is reported as an error. The first failing prerequisite aborts
/// before anything is started.
pub fn run(mode: OutputMode) -> anyhow::Result<()> {
    let root = std::env::current_dir().context("determining current directory")?;

    let preflight = launcher::preflight(&root)?;

    let report = PreflightReport {
        venv: true,
        env_file: true,
        data_file: preflight.data_present,
    };
    report.render(mode);

    let streamlit = paths::venv_tool(&root, "streamlit");
    println!("\nStarting {}...", paths::APP_ENTRYPOINT);
    log::info!("exec {} run {}", streamlit.display(), paths::APP_ENTRYPOINT);

    let status = Command::new(&streamlit)
        .args(["run", paths::APP_ENTRYPOINT])
        .current_dir(&root)
        .status()
        .with_context(|| format!("failed to start {}", streamlit.display()))?;

    if !status.success() {
        anyhow::bail!("streamlit exited with {status}");
    }
    Ok(())
}
