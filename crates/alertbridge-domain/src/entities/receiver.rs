//! Receiver definitions
//!
//! A receiver is a named notification target. Its integration settings
//! (`email_configs`, `slack_configs`, `webhook_configs`, ...) are opaque to the
//! bridge and travel verbatim to the external engine.

use crate::constants::{INTEGRATION_CONFIG_SUFFIX, UNKNOWN_CHANNEL_TYPE};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Named notification target
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Receiver {
    /// Receiver name, unique within an organization
    pub name: String,
    /// Integration configurations keyed by field name
    #[serde(flatten)]
    pub integrations: Map<String, Value>,
}

impl Receiver {
    /// Create a receiver with no integrations
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            integrations: Map::new(),
        }
    }

    /// Add an integration configuration list (e.g. `slack_configs`)
    pub fn with_integration<S: Into<String>>(mut self, field: S, configs: Value) -> Self {
        self.integrations.insert(field.into(), configs);
        self
    }

    /// Reject receivers that cannot be addressed by name
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid_argument("receiver name cannot be empty"));
        }
        Ok(())
    }

    /// Integration kind of the first non-empty `*_configs` field
    ///
    /// `slack_configs: [..]` yields `"slack"`; receivers without any
    /// configured integration yield `"unknown"`.
    pub fn channel_type(&self) -> String {
        self.integrations
            .iter()
            .filter(|(_, value)| value.as_array().is_some_and(|configs| !configs.is_empty()))
            .find_map(|(field, _)| field.strip_suffix(INTEGRATION_CONFIG_SUFFIX))
            .unwrap_or(UNKNOWN_CHANNEL_TYPE)
            .to_string()
    }
}
