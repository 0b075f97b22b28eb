//! Alert Value Objects
//!
//! Alerts are produced by the rule engine and consumed read-only here. The
//! JSON shape follows the Alertmanager v1 API that the external engine speaks.

use crate::constants::RULE_ID_LABEL;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Label or annotation set (ordered for stable payloads)
pub type LabelSet = BTreeMap<String, String>;

/// Value Object: Alert ready for delivery
///
/// ## Example
///
/// ```rust
/// use alertbridge_domain::entities::PostableAlert;
///
/// let alert = PostableAlert::new()
///     .with_label("ruleId", "42")
///     .with_label("severity", "critical")
///     .with_annotation("summary", "disk almost full");
///
/// assert_eq!(alert.rule_id(), Some("42"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostableAlert {
    /// Identifying labels; [`RULE_ID_LABEL`] names the originating rule
    #[serde(default)]
    pub labels: LabelSet,
    /// Descriptive annotations
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: LabelSet,
    /// Time the alert started firing
    #[serde(rename = "startsAt", default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    /// Time the alert resolved or expires
    #[serde(rename = "endsAt", default, skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    /// Link back to the producer
    #[serde(rename = "generatorURL", default, skip_serializing_if = "String::is_empty")]
    pub generator_url: String,
}

impl PostableAlert {
    /// Create an empty alert
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a label
    pub fn with_label<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Add an annotation
    pub fn with_annotation<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }

    /// Set the firing window
    pub fn with_window(mut self, starts_at: DateTime<Utc>, ends_at: Option<DateTime<Utc>>) -> Self {
        self.starts_at = Some(starts_at);
        self.ends_at = ends_at;
        self
    }

    /// Rule identifier carried by the alert's labels
    pub fn rule_id(&self) -> Option<&str> {
        self.labels.get(RULE_ID_LABEL).map(String::as_str)
    }
}

/// Delivery payload for the external engine: the alert plus its receivers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyPostableAlert {
    /// The alert itself, flattened into the payload
    #[serde(flatten)]
    pub alert: PostableAlert,
    /// Receiver names resolved from the organization's routing table
    pub receivers: Vec<String>,
}

impl LegacyPostableAlert {
    /// Attach receivers to an alert
    pub fn new(alert: PostableAlert, receivers: Vec<String>) -> Self {
        Self { alert, receivers }
    }
}

/// Receiver reference inside a listed alert
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReceiverRef {
    /// Receiver name
    pub name: String,
}

/// Status block of a listed alert
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertStatus {
    /// `active`, `suppressed` or `unprocessed`
    #[serde(default)]
    pub state: String,
    /// Silences muting the alert
    #[serde(rename = "silencedBy", default)]
    pub silenced_by: Vec<String>,
    /// Alerts inhibiting this one
    #[serde(rename = "inhibitedBy", default)]
    pub inhibited_by: Vec<String>,
}

/// Alert as listed by the external engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GettableAlert {
    /// Identifying labels
    #[serde(default)]
    pub labels: LabelSet,
    /// Descriptive annotations
    #[serde(default)]
    pub annotations: LabelSet,
    /// Time the alert started firing
    #[serde(rename = "startsAt", default)]
    pub starts_at: Option<DateTime<Utc>>,
    /// Time the alert resolves
    #[serde(rename = "endsAt", default)]
    pub ends_at: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Link back to the producer
    #[serde(rename = "generatorURL", default)]
    pub generator_url: String,
    /// Alert fingerprint
    #[serde(default)]
    pub fingerprint: String,
    /// Receivers the alert was routed to
    #[serde(default)]
    pub receivers: Vec<ReceiverRef>,
    /// Processing status
    #[serde(default)]
    pub status: AlertStatus,
}

/// Parameters for listing alerts; the raw query string is passed through
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GettableAlertsParams {
    /// Raw query string without the leading `?`
    pub raw_query: String,
}

impl GettableAlertsParams {
    /// Build params from a raw query string
    pub fn new<S: Into<String>>(raw_query: S) -> Self {
        Self {
            raw_query: raw_query.into(),
        }
    }
}
