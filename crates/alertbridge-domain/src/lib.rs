//! # Alert Bridge - Domain Layer
//!
//! Core types and port contracts for the bridge between the internal alert
//! pipeline and an external, HTTP-only alert-routing engine.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | Alerts, receivers, channels and the per-org config aggregate |
//! | [`ports`] | Config store, commit gate and remote engine contracts |
//! | [`error`] | Closed error enumeration and [`ErrorKind`] classification |
//! | [`constants`] | Label keys and remote paths |

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;

pub use entities::*;
pub use error::{Error, ErrorKind, Result};
