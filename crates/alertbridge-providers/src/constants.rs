//! Provider Constants
//!
//! Constants specific to provider implementations. Endpoint paths shared
//! with the rest of the bridge live in `alertbridge_domain::constants`.

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// JSON content type header value
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Default request timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Default maximum idle connections per host
pub const DEFAULT_MAX_IDLE_PER_HOST: usize = 10;

/// Default idle connection timeout in seconds
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 90;

/// Error message prefix for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";

// ============================================================================
// REMOTE ENGINE CONSTANTS
// ============================================================================

/// Envelope field holding the alert list in listing responses
pub const ALERTS_DATA_FIELD: &str = "data";

/// Provider name of the HTTP legacy Alertmanager client
pub const LEGACY_ALERTMANAGER_PROVIDER: &str = "legacy-http";

// ============================================================================
// CONFIG STORE CONSTANTS
// ============================================================================

/// Provider name of the in-memory config store
pub const IN_MEMORY_STORE_PROVIDER: &str = "memory";
