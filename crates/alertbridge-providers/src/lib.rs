//! # Alert Bridge - Provider Implementations
//!
//! Adapters implementing the ports defined in `alertbridge-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Remote engine | `RemoteAlertmanager` | [`HttpLegacyAlertmanager`] |
//! | Config store | `ConfigStore` | [`InMemoryConfigStore`] |
//!
//! ## Usage
//!
//! ```ignore
//! use alertbridge_providers::alertmanager::HttpLegacyAlertmanager;
//! use alertbridge_providers::config_store::InMemoryConfigStore;
//! ```

// Re-export domain types commonly used with providers
pub use alertbridge_domain::error::{Error, Result};
pub use alertbridge_domain::ports::{ConfigStore, RemoteAlertmanager};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// HTTP client configuration
pub mod http;

/// Remote Alertmanager clients
///
/// Implements `RemoteAlertmanager` over the engine's HTTP API.
pub mod alertmanager;

/// Config store implementations
///
/// Implements `ConfigStore` with the commit-gate contract.
pub mod config_store;

pub use alertmanager::HttpLegacyAlertmanager;
pub use config_store::InMemoryConfigStore;
pub use http::HttpClientConfig;
