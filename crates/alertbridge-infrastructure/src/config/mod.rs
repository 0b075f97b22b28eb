//! Configuration management
//!
//! Typed application configuration and its Figment-based loader.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
