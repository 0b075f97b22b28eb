//! Configuration loader tests

use alertbridge_domain::error::ErrorKind;
use alertbridge_infrastructure::config::{AppConfig, BatcherSettings, ConfigBuilder, ConfigLoader};
use alertbridge_infrastructure::constants::{
    DEFAULT_ALERTMANAGER_API_URL, DEFAULT_BATCHER_CAPACITY, DEFAULT_MAX_BATCH_SIZE,
    DEFAULT_MAX_LINGER_MS, STORE_PROVIDER_MEMORY,
};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> Result<NamedTempFile, Box<dyn std::error::Error>> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[test]
fn test_default_config_values() {
    let config = AppConfig::default();

    assert_eq!(config.alertmanager.legacy.api_url, DEFAULT_ALERTMANAGER_API_URL);
    assert_eq!(config.alertmanager.batcher.capacity, DEFAULT_BATCHER_CAPACITY);
    assert_eq!(config.alertmanager.batcher.max_batch_size, DEFAULT_MAX_BATCH_SIZE);
    assert_eq!(config.alertmanager.batcher.max_linger_ms, DEFAULT_MAX_LINGER_MS);
    assert_eq!(config.store.provider, STORE_PROVIDER_MEMORY);
    assert!(config.store.orgs.is_empty());
}

#[test]
fn test_load_from_toml_file() -> Result<(), Box<dyn std::error::Error>> {
    let file = write_config(
        r#"
[logging]
level = "debug"

[alertmanager.legacy]
api_url = "http://engine.internal:9093/api/"

[alertmanager.batcher]
max_batch_size = 10
max_linger_ms = 250

[store]
orgs = ["main", "staging"]
"#,
    )?;

    let config = ConfigLoader::new().with_config_path(file.path()).load()?;

    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.alertmanager.legacy.api_url,
        "http://engine.internal:9093/api/"
    );
    assert_eq!(config.alertmanager.batcher.max_batch_size, 10);
    // Keys absent from the file keep their defaults
    assert_eq!(config.alertmanager.batcher.capacity, DEFAULT_BATCHER_CAPACITY);
    assert_eq!(config.store.orgs, vec!["main", "staging"]);

    let batcher = config.alertmanager.batcher.batcher_config();
    assert_eq!(batcher.max_linger, Duration::from_millis(250));
    Ok(())
}

#[test]
fn test_missing_explicit_file_falls_back_to_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let loader = ConfigLoader::new().with_config_path(dir.path().join("absent.toml"));

    let config = loader.load()?;

    assert_eq!(config.alertmanager.legacy.api_url, DEFAULT_ALERTMANAGER_API_URL);
    assert!(loader.config_path().is_some());
    Ok(())
}

#[test]
fn test_invalid_api_url_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let file = write_config("[alertmanager.legacy]\napi_url = \"not a url\"\n")?;

    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .expect_err("invalid URL must fail");

    assert_eq!(err.kind(), ErrorKind::Configuration);
    Ok(())
}

#[test]
fn test_non_http_scheme_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let file = write_config("[alertmanager.legacy]\napi_url = \"ftp://engine/api/\"\n")?;

    let result = ConfigLoader::new().with_config_path(file.path()).load();

    assert!(result.is_err());
    Ok(())
}

#[test]
fn test_zero_batch_size_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let file = write_config("[alertmanager.batcher]\nmax_batch_size = 0\n")?;

    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .expect_err("zero batch size must fail");

    assert!(err.to_string().contains("max_batch_size"));
    Ok(())
}

#[test]
fn test_unknown_store_provider_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let file = write_config("[store]\nprovider = \"postgres\"\n")?;

    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .expect_err("unknown provider must fail");

    assert!(err.to_string().contains("postgres"));
    Ok(())
}

#[test]
fn test_invalid_log_level_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let file = write_config("[logging]\nlevel = \"loud\"\n")?;

    assert!(
        ConfigLoader::new()
            .with_config_path(file.path())
            .load()
            .is_err()
    );
    Ok(())
}

#[test]
fn test_save_and_reload_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("saved.toml");
    let config = ConfigBuilder::new()
        .with_api_url("https://engine.example.com/api/")
        .with_org("main")
        .build()?;

    let loader = ConfigLoader::new().with_config_path(&path);
    loader.save_to_file(&config, &path)?;
    let reloaded = loader.load()?;

    assert_eq!(
        reloaded.alertmanager.legacy.api_url,
        "https://engine.example.com/api/"
    );
    assert_eq!(reloaded.store.orgs, vec!["main"]);
    Ok(())
}

#[test]
fn test_builder_validates() {
    let result = ConfigBuilder::new()
        .with_batcher(BatcherSettings {
            capacity: 0,
            ..BatcherSettings::default()
        })
        .build();

    assert!(result.is_err());
}

#[test]
fn test_builder_rejects_blank_org() {
    assert!(ConfigBuilder::new().with_org("  ").build().is_err());
}

#[test]
fn test_save_to_missing_directory_is_io_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("missing").join("saved.toml");

    let err = ConfigLoader::new()
        .save_to_file(&AppConfig::default(), &path)
        .expect_err("parent directory does not exist");

    assert!(err.to_string().contains("saved.toml"));
    Ok(())
}
