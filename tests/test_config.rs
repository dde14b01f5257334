// Configuration tests
// Author: Gabriel Demetrios Lafis

use std::fs;

use bikeshare_explorer::{AppError, Config};
use log::LevelFilter;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = Config::default();

    assert_eq!(config.data.dir, "./data");
    assert_eq!(config.display.raw_rows_per_page, 5);
    assert_eq!(config.log_level_filter(), LevelFilter::Warn);
}

#[test]
fn test_json_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{ "data": { "dir": "/srv/bikeshare" }, "logging": { "level": "DEBUG" } }"#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.data.dir, "/srv/bikeshare");
    assert_eq!(config.display.raw_rows_per_page, 5);
    assert_eq!(config.log_level_filter(), LevelFilter::Debug);
}

#[test]
fn test_yaml_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yml");
    fs::write(&path, "display:\n  raw_rows_per_page: 10\n").unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.display.raw_rows_per_page, 10);
    assert_eq!(config.data.dir, "./data");
}

#[test]
fn test_rejected_configs() {
    let dir = TempDir::new().unwrap();

    let toml = dir.path().join("config.toml");
    fs::write(&toml, "").unwrap();
    assert!(matches!(Config::from_file(&toml), Err(AppError::Config(_))));

    let zero = dir.path().join("config.json");
    fs::write(&zero, r#"{ "display": { "raw_rows_per_page": 0 } }"#).unwrap();
    assert!(matches!(Config::from_file(&zero), Err(AppError::Config(_))));

    let missing = dir.path().join("missing.json");
    assert!(matches!(Config::from_file(&missing), Err(AppError::Io(_))));
}
