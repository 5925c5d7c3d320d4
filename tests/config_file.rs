// Tests for loading configuration files from disk.
use std::fs;

use gabarito::models::Config;
use tempfile::TempDir;

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gabarito.toml");
    fs::write(
        &path,
        r#"
[sheets]
base_url = "https://sheets.example.com/d"
document_id = "abc123"
login_sheet = "Roster"

[http]
user_agent = "gabarito-test"
timeout_secs = 10
max_concurrent = 2

[cache]
ttl_secs = 60

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.sheets.login_sheet, "Roster");
    assert_eq!(config.http.max_concurrent, 2);
    assert_eq!(config.cache.ttl().num_seconds(), 60);
    assert_eq!(config.logging.level, "debug");
    assert!(config.validate().is_ok());
    assert_eq!(
        config.sheets.export_url().unwrap().as_str(),
        "https://sheets.example.com/d/abc123/gviz/tq?tqx=out%3Acsv"
    );
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_or_default(dir.path().join("absent.toml"));
    assert_eq!(config.sheets.login_sheet, "Login");
    assert_eq!(config.cache.ttl_secs, 300);
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[sheets\nbase_url = ").unwrap();

    assert!(Config::load(&path).is_err());
}

#[test]
fn test_invalid_values_fail_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("zero.toml");
    fs::write(&path, "[http]\ntimeout_secs = 0\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert!(config.validate().is_err());
}
