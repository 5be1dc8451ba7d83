use roster::config::{Config, ConfigError};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("write config file");
    path
}

#[test]
fn defaults_carry_the_builtin_seed() {
    let config = Config::default();
    assert_eq!(config.tick_rate_ms, 250);
    let names: Vec<&str> = config.items.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, ["Alaska", "Montana", "Kentucky", "Ohio"]);
}

#[test]
fn explicit_missing_path_is_a_read_error() {
    let dir = TempDir::new().expect("tempdir");
    let missing = dir.path().join("nope.toml");
    let result = Config::load(Some(&missing));
    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}

#[test]
fn file_overrides_the_seed_items() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(
        &dir,
        r#"
tick_rate_ms = 100

[[items]]
id = 1
name = "Vermont"

[[items]]
id = 2
name = "Maine"
"#,
    );

    let config = Config::load(Some(&path)).expect("load config");
    assert_eq!(config.tick_rate_ms, 100);
    let names: Vec<&str> = config.items.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, ["Vermont", "Maine"]);
}

#[test]
fn partial_file_keeps_the_default_seed() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, "tick_rate_ms = 100\n");

    let config = Config::load(Some(&path)).expect("load config");
    assert_eq!(config.tick_rate_ms, 100);
    assert_eq!(config.items.len(), 4);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, "tick_rate_ms = [not toml\n");
    let result = Config::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn duplicate_item_ids_are_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(
        &dir,
        r#"
[[items]]
id = 1
name = "Vermont"

[[items]]
id = 1
name = "Maine"
"#,
    );

    let result = Config::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

#[test]
fn empty_item_list_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, "items = []\n");
    let result = Config::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}
