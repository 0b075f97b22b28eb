//! # Alert Bridge
//!
//! Batches alerts from many producers and delivers them to an external
//! Alertmanager with per-rule receiver attribution, and keeps notification
//! channels consistent between a local config store and that engine.
//!
//! ## Example
//!
//! ```ignore
//! use alertbridge::infrastructure::{AppConfig, init_app};
//!
//! let context = init_app(AppConfig::default()).await?;
//! let batches = context.alertmanager().open().await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Entities, ports and the error classification
//! - `application` - Alert batcher and the synchronization orchestrator
//! - `providers` - HTTP client for the external engine and config stores
//! - `infrastructure` - Configuration, logging and bootstrap
//! - [`ingest`] - Line-oriented alert intake used by the binary

/// Domain layer - entities, ports and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use alertbridge_domain::*;
}

/// Application layer - use cases and service port
pub mod application {
    pub use alertbridge_application::*;
}

/// Provider implementations
pub mod providers {
    pub use alertbridge_providers::*;
}

/// Infrastructure layer - config, logging and bootstrap
pub mod infrastructure {
    pub use alertbridge_infrastructure::*;
}

pub mod ingest;

pub use application::{AlertmanagerInterface, LegacyAlertmanager};
pub use ingest::{IngestReport, ingest_lines, run};
