//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables and
//! default values, using Figment.

use crate::config::AppConfig;
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use alertbridge_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use reqwest::Url;
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, else the first default location found)
    /// 3. Environment variables with prefix (e.g., `ALERTBRIDGE__ALERTMANAGER__HTTP__TIMEOUT_SECS`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Double underscore separates nested keys so field names may contain `_`
        figment = figment.merge(
            Env::prefixed(&format!("{}{}", self.env_prefix, CONFIG_ENV_SEPARATOR))
                .split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let path = path.as_ref();
        let toml_string = toml::to_string_pretty(config)
            .with_context(|| format!("Failed to serialize config for {}", path.display()))?;

        std::fs::write(path, toml_string)
            .io_context(format!("Failed to write config file {}", path.display()))?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = vec![
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Performs validation of all configuration sections.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_logging_config(config)?;
    validate_alertmanager_config(config)?;
    validate_batcher_config(config)?;
    validate_store_config(config)?;
    Ok(())
}

fn validate_logging_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_alertmanager_config(config: &AppConfig) -> Result<()> {
    let api_url = &config.alertmanager.legacy.api_url;
    let url = Url::parse(api_url)
        .config_context(format!("Invalid alertmanager API URL '{api_url}'"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::configuration(format!(
            "Alertmanager API URL must use http or https, got '{}'",
            url.scheme()
        )));
    }
    if config.alertmanager.http.timeout_secs == 0 {
        return Err(Error::configuration("HTTP timeout cannot be 0"));
    }
    Ok(())
}

fn validate_batcher_config(config: &AppConfig) -> Result<()> {
    let batcher = &config.alertmanager.batcher;
    if batcher.capacity == 0 {
        return Err(Error::configuration("Batcher capacity cannot be 0"));
    }
    if batcher.max_batch_size == 0 {
        return Err(Error::configuration("Batcher max_batch_size cannot be 0"));
    }
    if batcher.max_linger_ms == 0 {
        return Err(Error::configuration("Batcher max_linger_ms cannot be 0"));
    }
    Ok(())
}

fn validate_store_config(config: &AppConfig) -> Result<()> {
    if config.store.provider != STORE_PROVIDER_MEMORY {
        return Err(Error::configuration(format!(
            "Unknown store provider '{}'. Supported: {}",
            config.store.provider, STORE_PROVIDER_MEMORY
        )));
    }
    if config.store.orgs.iter().any(|org| org.trim().is_empty()) {
        return Err(Error::configuration("Store organization ids cannot be empty"));
    }
    Ok(())
}

/// Configuration builder for programmatic configuration
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: crate::config::LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Set the external engine API root
    pub fn with_api_url<S: Into<String>>(mut self, api_url: S) -> Self {
        self.config.alertmanager.legacy.api_url = api_url.into();
        self
    }

    /// Set batching configuration
    pub fn with_batcher(mut self, batcher: crate::config::BatcherSettings) -> Self {
        self.config.alertmanager.batcher = batcher;
        self
    }

    /// Seed an organization into the config store
    pub fn with_org<S: Into<String>>(mut self, org_id: S) -> Self {
        self.config.store.orgs.push(org_id.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig> {
        validate_app_config(&self.config)?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
