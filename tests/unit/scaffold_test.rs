//! Tests for the scaffold writer

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use hsa::scaffold;

/// Files write_tree is expected to produce, relative to the project root
const EXPECTED_FILES: [&str; 7] = [
    ".gitignore",
    ".env.example",
    "requirements.txt",
    "notebooks/analysis.ipynb",
    "presentation/slides.md",
    "README.md",
    "data/README.md",
];

#[test]
fn test_write_tree_creates_directories() {
    let temp = TempDir::new().unwrap();
    scaffold::write_tree(temp.path()).unwrap();

    for dir in scaffold::DIRS {
        assert!(temp.path().join(dir).is_dir(), "missing directory {dir}");
    }
}

#[test]
fn test_write_tree_creates_template_files() {
    let temp = TempDir::new().unwrap();
    let written = scaffold::write_tree(temp.path()).unwrap();

    assert_eq!(written.len(), EXPECTED_FILES.len());
    for file in EXPECTED_FILES {
        assert!(temp.path().join(file).is_file(), "missing file {file}");
    }
}

#[test]
fn test_write_tree_is_content_idempotent() {
    let temp = TempDir::new().unwrap();
    scaffold::write_tree(temp.path()).unwrap();

    let snapshot: BTreeMap<&str, Vec<u8>> = EXPECTED_FILES
        .iter()
        .map(|f| (*f, fs::read(temp.path().join(f)).unwrap()))
        .collect();

    scaffold::write_tree(temp.path()).unwrap();

    for (file, before) in snapshot {
        let after = fs::read(temp.path().join(file)).unwrap();
        assert_eq!(before, after, "{file} changed between runs");
    }
}

#[test]
fn test_manifest_lists_scaffolded_files() {
    let temp = TempDir::new().unwrap();
    scaffold::write_tree(temp.path()).unwrap();

    let manifest = scaffold::manifest(temp.path());
    assert_eq!(manifest.len(), EXPECTED_FILES.len());
    for file in EXPECTED_FILES {
        assert!(manifest.contains(&PathBuf::from(file)), "manifest missing {file}");
    }
}

#[test]
fn test_manifest_skips_venv_and_git() {
    let temp = TempDir::new().unwrap();
    scaffold::write_tree(temp.path()).unwrap();

    fs::create_dir_all(temp.path().join("venv/bin")).unwrap();
    fs::write(temp.path().join("venv/bin/python"), "").unwrap();
    fs::create_dir_all(temp.path().join(".git")).unwrap();
    fs::write(temp.path().join(".git/HEAD"), "ref: refs/heads/main\n").unwrap();

    let manifest = scaffold::manifest(temp.path());
    assert_eq!(manifest.len(), EXPECTED_FILES.len());
    assert!(!manifest.iter().any(|p| p.starts_with("venv")));
    assert!(!manifest.iter().any(|p| p.starts_with(".git")));
}

#[test]
fn test_notebook_on_disk_is_valid_json() {
    let temp = TempDir::new().unwrap();
    scaffold::write_tree(temp.path()).unwrap();

    let raw = fs::read_to_string(temp.path().join("notebooks/analysis.ipynb")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed["nbformat"], 4);
}
