//! Project scaffold - directory tree and template files
//!
//! Writes the fixed layout `hsa setup` produces. All content comes from
//! [`crate::templates`]; this module only decides where it lands. Writing is
//! content-idempotent: running it twice over the same root produces identical
//! bytes (modulo the date stamp in the slide deck).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use walkdir::WalkDir;

use crate::paths;
use crate::templates;

/// Directories created by the scaffold, relative to the project root.
pub const DIRS: [&str; 6] = [
    "data",
    "src",
    "notebooks",
    "presentation",
    "output",
    ".github/workflows",
];

/// Create the directory tree and write every template file under `root`.
///
/// Returns the relative paths of the files written, in write order.
pub fn write_tree(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    for dir in DIRS {
        fs::create_dir_all(root.join(dir)).with_context(|| format!("creating {dir}/"))?;
        log::debug!("created {dir}/");
    }

    let mut written = Vec::new();
    for (rel, content) in template_files()? {
        let path = root.join(rel);
        fs::write(&path, content).with_context(|| format!("writing {rel}"))?;
        log::debug!("wrote {rel}");
        written.push(PathBuf::from(rel));
    }
    Ok(written)
}

/// The template files and their rendered content, in write order.
fn template_files() -> anyhow::Result<Vec<(&'static str, String)>> {
    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    Ok(vec![
        (".gitignore", templates::GITIGNORE.to_string()),
        (paths::ENV_EXAMPLE, templates::ENV_EXAMPLE.to_string()),
        (paths::REQUIREMENTS_FILE, templates::REQUIREMENTS.to_string()),
        ("notebooks/analysis.ipynb", templates::notebook_json()?),
        ("presentation/slides.md", templates::slide_deck(&date)),
        ("README.md", templates::README.to_string()),
        ("data/README.md", templates::DATA_README.to_string()),
    ])
}

/// Enumerate the scaffolded files under `root`, relative to it.
///
/// Skips `.git/` and the virtual environment, which are not part of the
/// template set. Sorted for stable output.
#[must_use]
pub fn manifest(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| {
            let name = entry.file_name().to_string_lossy();
            name != ".git" && name != paths::VENV_DIR
        })
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.path().strip_prefix(root).ok().map(Path::to_path_buf))
        .collect();
    files.sort();
    files
}
