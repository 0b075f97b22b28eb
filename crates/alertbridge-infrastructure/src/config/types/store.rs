//! Config store configuration types

use crate::constants::STORE_PROVIDER_MEMORY;
use serde::{Deserialize, Serialize};

/// Config store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Store provider (`memory`)
    pub provider: String,
    /// Organizations seeded at startup, in order; the first becomes active
    pub orgs: Vec<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: STORE_PROVIDER_MEMORY.to_string(),
            orgs: Vec::new(),
        }
    }
}
