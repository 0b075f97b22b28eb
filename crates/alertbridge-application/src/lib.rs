//! Application Layer - Alert Bridge
//!
//! Use cases that sit between the alert producers, the local config store
//! and the external alert-routing engine.
//!
//! ## Use Cases
//!
//! - [`AlertBatcher`]: coalesces concurrent alert submissions into bounded batches
//! - [`LegacyAlertmanager`]: delivers batches with receiver attribution and
//!   drives the dual-write protocol for channel mutations
//!
//! ## Ports (Interfaces)
//!
//! - [`ports::services::AlertmanagerInterface`]: the service surface exposed to callers
//!
//! ## Dependencies
//!
//! This crate depends only on `alertbridge-domain` and the async runtime.
//! Concrete stores and HTTP clients are injected as domain port trait objects.

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
