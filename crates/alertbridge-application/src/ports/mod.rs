//! Application Ports
//!
//! Service interfaces implemented by the use cases in this crate.

/// Alertmanager service interface
pub mod services;

pub use services::{AlertmanagerInterface, SharedAlertmanager};
