//! Domain layer constants
//!
//! Values that are part of the contract with the alert producers and the
//! external alert-routing engine.

// ============================================================================
// ALERT LABEL CONSTANTS
// ============================================================================

/// Label key identifying the rule that produced an alert
pub const RULE_ID_LABEL: &str = "ruleId";

// ============================================================================
// REMOTE ENGINE PATHS
// ============================================================================

/// Alert submission and listing path
pub const ALERTS_PATH: &str = "/v1/alerts";

/// Routing receiver path (POST create, PUT update, DELETE remove)
pub const ROUTES_PATH: &str = "/v1/routes";

/// Receiver test path
pub const TEST_RECEIVER_PATH: &str = "/v1/testReceiver";

// ============================================================================
// CHANNEL CONSTANTS
// ============================================================================

/// Suffix of receiver fields holding integration configurations
pub const INTEGRATION_CONFIG_SUFFIX: &str = "_configs";

/// Channel type used when a receiver carries no integration
pub const UNKNOWN_CHANNEL_TYPE: &str = "unknown";
