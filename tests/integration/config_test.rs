//! Integration tests for configuration loading

use derelict::{Config, ConfigError};
use tempfile::TempDir;

use crate::helpers::write_temp;

#[test]
fn missing_file_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn save_then_load_preserves_settings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.typewriter.glitch_threshold = 10;
    config.terminals.truncate(1);
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn invalid_toml_reports_path() {
    let (_dir, path) = write_temp("config.toml", "[typewriter\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn inverted_jitter_is_rejected_on_load() {
    let (_dir, path) = write_temp("config.toml", "[typewriter]\nnormal_jitter = [1.2, 0.8]\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            key: "typewriter.normal_jitter",
            ..
        }
    ));
}

#[test]
fn out_of_range_integrity_is_rejected_on_load() {
    let toml = r#"
[[terminals]]
name = "bridge"
kind = "NAV"
integrity = { cpu = 150, memory = 100, storage = 100 }
"#;
    let (_dir, path) = write_temp("config.toml", toml);
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("cpu"), "{}", err);
}
