//! Main application configuration

use super::alertmanager::AlertmanagerConfig;
use super::logging::LoggingConfig;
use super::store::StoreConfig;
use serde::{Deserialize, Serialize};

/// Main application configuration
///
/// ```toml
/// [logging]
/// level = "info"
///
/// [alertmanager.legacy]
/// api_url = "http://localhost:9093/api/"
///
/// [alertmanager.batcher]
/// max_batch_size = 64
/// max_linger_ms = 1000
///
/// [store]
/// provider = "memory"
/// orgs = ["main"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// External engine and batching configuration
    pub alertmanager: AlertmanagerConfig,
    /// Config store configuration
    pub store: StoreConfig,
}
