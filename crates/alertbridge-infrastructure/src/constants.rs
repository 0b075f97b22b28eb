//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `alertbridge_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "alertbridge.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "alertbridge";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "ALERTBRIDGE";

/// Separator between the prefix and nested keys of configuration variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "ALERTBRIDGE_LOG";

/// File stem used when the log file path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "alertbridge";

// ============================================================================
// ALERTMANAGER CONSTANTS
// ============================================================================

/// Default API root of the external engine
pub const DEFAULT_ALERTMANAGER_API_URL: &str = "http://localhost:9093/api/";

/// Default request timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Default batcher input queue capacity (alerts)
pub const DEFAULT_BATCHER_CAPACITY: usize = 1000;

/// Default maximum alerts per batch
pub const DEFAULT_MAX_BATCH_SIZE: usize = 64;

/// Default maximum linger time in milliseconds
pub const DEFAULT_MAX_LINGER_MS: u64 = 1000;

// ============================================================================
// STORE CONSTANTS
// ============================================================================

/// In-memory config store provider name
pub const STORE_PROVIDER_MEMORY: &str = "memory";
