//! # Alert Bridge - Infrastructure Layer
//!
//! Cross-cutting technical concerns and the composition root.
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`config`] | Figment-layered [`AppConfig`](config::AppConfig) loading and validation |
//! | [`logging`] | tracing-subscriber initialization |
//! | [`error_ext`] | Context helpers mapping foreign errors into domain errors |
//! | [`bootstrap`] | Wiring of store, remote client and orchestrator into an [`AppContext`] |
//! | [`constants`] | Infrastructure defaults |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{AppContext, init_app};
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
