//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`PostableAlert`] | Alert produced by the rule engine, ready for delivery |
//! | [`LegacyPostableAlert`] | Delivery payload: alert plus resolved receiver names |
//! | [`GettableAlert`] | Alert as listed by the remote engine |
//! | [`Receiver`] | Named notification target |
//! | [`Channel`] | Locally persisted materialization of a receiver |
//! | [`Config`] | Per-organization routing table and receiver definitions |

/// Alert value objects
pub mod alert;
/// Locally persisted channels
pub mod channel;
/// Per-organization configuration aggregate
pub mod config;
/// Receiver definitions
pub mod receiver;

pub use alert::{
    AlertStatus, GettableAlert, GettableAlertsParams, LabelSet, LegacyPostableAlert,
    PostableAlert, ReceiverRef,
};
pub use channel::{Channel, ChannelId};
pub use config::{Config, OrgId};
pub use receiver::Receiver;
