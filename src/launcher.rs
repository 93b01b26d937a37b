//! Launch preflight - prerequisite checks before starting the app
//!
//! Mirrors the launcher contract: a missing virtual environment aborts, a
//! missing secrets file is materialized from its template and then aborts,
//! and a missing data file is merely noted. The checks run in that order and
//! the first failure wins.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::paths;

/// Errors that stop the launch before the server is started
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The virtual environment directory does not exist
    #[error("virtual environment not found at {0} - run `hsa setup` first")]
    VenvMissing(PathBuf),

    /// The secrets file was just created from its template; the user must
    /// fill it in before launching
    #[error("created {0} from template - add your OPENAI_API_KEY, then run again")]
    EnvFileCreated(PathBuf),

    /// Neither the secrets file nor its template exists
    #[error("missing {0} and no {1} template to copy it from")]
    EnvTemplateMissing(PathBuf, PathBuf),

    /// Underlying filesystem error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of a successful preflight
#[derive(Debug, Clone, Copy)]
pub struct Preflight {
    /// Whether the customer data file is present. Its absence is non-fatal;
    /// the app generates sample data.
    pub data_present: bool,
}

/// Run the launch prerequisite checks for the project at `root`.
///
/// Side effect: when `.env` is absent but `.env.example` exists, the template
/// is copied into place before [`LaunchError::EnvFileCreated`] is returned.
pub fn preflight(root: &Path) -> Result<Preflight, LaunchError> {
    let venv = paths::venv_dir(root);
    if !venv.is_dir() {
        return Err(LaunchError::VenvMissing(venv));
    }

    let env_file = paths::env_file(root);
    if !env_file.exists() {
        let template = paths::env_example(root);
        if !template.exists() {
            return Err(LaunchError::EnvTemplateMissing(env_file, template));
        }
        fs::copy(&template, &env_file)?;
        log::info!("copied {} to {}", template.display(), env_file.display());
        return Err(LaunchError::EnvFileCreated(env_file));
    }

    Ok(Preflight {
        data_present: paths::data_file(root).exists(),
    })
}
