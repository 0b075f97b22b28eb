//! Configuration types module

pub mod alertmanager;
pub mod app;
pub mod logging;
pub mod store;

// Re-export main types
pub use alertmanager::{AlertmanagerConfig, BatcherSettings, HttpSettings, LegacyApiConfig};
pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use store::StoreConfig;
