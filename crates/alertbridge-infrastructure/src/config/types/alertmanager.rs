//! External engine configuration types

use crate::constants::{
    DEFAULT_ALERTMANAGER_API_URL, DEFAULT_BATCHER_CAPACITY, DEFAULT_HTTP_TIMEOUT_SECS,
    DEFAULT_MAX_BATCH_SIZE, DEFAULT_MAX_LINGER_MS,
};
use alertbridge_application::use_cases::BatcherConfig;
use alertbridge_providers::http::HttpClientConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// External engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertmanagerConfig {
    /// Legacy API endpoint
    pub legacy: LegacyApiConfig,
    /// HTTP client settings
    pub http: HttpSettings,
    /// Alert batching settings
    pub batcher: BatcherSettings,
}

/// Legacy API endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyApiConfig {
    /// API root; endpoint paths are appended to it
    pub api_url: String,
}

impl Default for LegacyApiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_ALERTMANAGER_API_URL.to_string(),
        }
    }
}

/// HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// User agent; empty keeps the client default
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            user_agent: String::new(),
        }
    }
}

impl HttpSettings {
    /// Client configuration for the HTTP providers
    pub fn client_config(&self) -> HttpClientConfig {
        let mut config = HttpClientConfig::with_timeout(Duration::from_secs(self.timeout_secs));
        if !self.user_agent.is_empty() {
            config.user_agent = self.user_agent.clone();
        }
        config
    }
}

/// Alert batching settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatcherSettings {
    /// Input queue capacity in alerts
    pub capacity: usize,
    /// Maximum alerts per batch
    pub max_batch_size: usize,
    /// Maximum linger of the oldest pending alert, in milliseconds
    pub max_linger_ms: u64,
}

impl Default for BatcherSettings {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_BATCHER_CAPACITY,
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
            max_linger_ms: DEFAULT_MAX_LINGER_MS,
        }
    }
}

impl BatcherSettings {
    /// Batcher tuning for the application layer
    pub fn batcher_config(&self) -> BatcherConfig {
        BatcherConfig {
            capacity: self.capacity,
            max_batch_size: self.max_batch_size,
            max_linger: Duration::from_millis(self.max_linger_ms),
        }
    }
}
