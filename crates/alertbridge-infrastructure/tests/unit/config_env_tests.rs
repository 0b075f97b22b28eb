//! Environment variable layering tests
//!
//! These tests modify environment variables and must run sequentially:
//!
//! ```bash
//! cargo test -p alertbridge-infrastructure --test unit config_env -- --test-threads=1 --ignored
//! ```
//!
//! # Safety
//!
//! Tests use `unsafe` blocks for `env::set_var`/`env::remove_var` because
//! Rust 2024 edition requires this for environment variable mutations.

use alertbridge_infrastructure::config::ConfigLoader;
use std::env;
use std::io::Write;

/// Helper to set env var safely
fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

/// Helper to remove env var safely
fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_prefixed_env_vars_loaded() {
    set_env("ALERTBRIDGE__ALERTMANAGER__HTTP__TIMEOUT_SECS", "5");
    set_env("ALERTBRIDGE__LOGGING__LEVEL", "warn");

    let config = ConfigLoader::new().load().expect("Should load config");

    assert_eq!(config.alertmanager.http.timeout_secs, 5);
    assert_eq!(config.logging.level, "warn");

    remove_env("ALERTBRIDGE__ALERTMANAGER__HTTP__TIMEOUT_SECS");
    remove_env("ALERTBRIDGE__LOGGING__LEVEL");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(file, "[alertmanager.batcher]\nmax_batch_size = 10").expect("write config");
    set_env("ALERTBRIDGE__ALERTMANAGER__BATCHER__MAX_BATCH_SIZE", "20");

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .expect("Should load config");

    assert_eq!(config.alertmanager.batcher.max_batch_size, 20);

    remove_env("ALERTBRIDGE__ALERTMANAGER__BATCHER__MAX_BATCH_SIZE");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_single_underscore_prefix_ignored() {
    set_env("ALERTBRIDGE_ALERTMANAGER__HTTP__TIMEOUT_SECS", "0");

    let config = ConfigLoader::new().load().expect("Should load config");

    assert_ne!(config.alertmanager.http.timeout_secs, 0);

    remove_env("ALERTBRIDGE_ALERTMANAGER__HTTP__TIMEOUT_SECS");
}
