//! Tests for global config loading

use std::fs;

use tempfile::TempDir;

use hsa::config::GlobalConfig;

#[test]
fn test_missing_file_yields_defaults() {
    let temp = TempDir::new().unwrap();
    let config = GlobalConfig::load_from(&temp.path().join("config.toml"));

    assert_eq!(config.project_dir, "helpscout-analytics");
    assert_eq!(config.python, "python3");
    assert_eq!(config.git.name, "HSA Demo");
    assert_eq!(config.git.email, "demo@example.com");
}

#[test]
fn test_full_config_overrides_everything() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        r#"
project_dir = "takehome"
python = "python3.12"

[git]
name = "Jane Doe"
email = "jane@example.com"
"#,
    )
    .unwrap();

    let config = GlobalConfig::load_from(&path);
    assert_eq!(config.project_dir, "takehome");
    assert_eq!(config.python, "python3.12");
    assert_eq!(config.git.name, "Jane Doe");
    assert_eq!(config.git.email, "jane@example.com");
}

#[test]
fn test_partial_config_keeps_other_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "python = \"python3.11\"\n").unwrap();

    let config = GlobalConfig::load_from(&path);
    assert_eq!(config.python, "python3.11");
    assert_eq!(config.project_dir, "helpscout-analytics");
    assert_eq!(config.git.name, "HSA Demo");
}

#[test]
fn test_invalid_toml_falls_back_to_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "this is not { toml").unwrap();

    let config = GlobalConfig::load_from(&path);
    assert_eq!(config.project_dir, "helpscout-analytics");
}
