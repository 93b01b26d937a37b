//! Git integration
//!
//! Repository creation and the scaffold's single initial commit, built on
//! libgit2 so no `git` binary is required on the machine running setup.

use std::path::Path;

use anyhow::Context;
use git2::{IndexAddOption, Oid, Repository, Signature};

/// Initialize a fresh repository at `root`.
pub fn init(root: &Path) -> anyhow::Result<Repository> {
    let repo = Repository::init(root)
        .with_context(|| format!("initializing git repository at {}", root.display()))?;
    log::debug!("initialized repository at {}", root.display());
    Ok(repo)
}

/// Stage everything in the work tree and create a commit on HEAD.
///
/// Ignore rules apply, so the virtual environment and secrets stay out of
/// the commit. Returns the new commit id.
pub fn commit_all(
    repo: &Repository,
    message: &str,
    name: &str,
    email: &str,
) -> anyhow::Result<Oid> {
    let mut index = repo.index().context("opening index")?;
    index
        .add_all(["*"].iter(), IndexAddOption::DEFAULT, None)
        .context("staging files")?;
    index.write().context("writing index")?;

    let tree_id = index.write_tree().context("writing tree")?;
    let tree = repo.find_tree(tree_id)?;
    let sig = Signature::now(name, email).context("building signature")?;

    // First commit on an unborn HEAD has no parents
    let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    let oid = repo
        .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .context("creating commit")?;
    log::debug!("created commit {oid}");
    Ok(oid)
}

/// Shorten a commit id for display.
#[must_use]
pub fn short_id(oid: Oid) -> String {
    let mut id = oid.to_string();
    id.truncate(7);
    id
}
