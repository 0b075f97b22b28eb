//! Locally persisted channels
//!
//! A channel is the relational materialization of one [`Receiver`]. The
//! remote engine keeps its own copy of the same receiver, so every change
//! goes through the dual-write protocol of the orchestrator.

use crate::entities::config::OrgId;
use crate::entities::receiver::Receiver;
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Channel identifier assigned by the config store
pub type ChannelId = i64;

/// Entity: locally persisted receiver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    /// Store-assigned identifier (0 until created)
    pub id: ChannelId,
    /// Owning organization
    pub org_id: OrgId,
    /// Receiver name
    pub name: String,
    /// Integration kind (`slack`, `email`, `webhook`, ...)
    #[serde(rename = "type")]
    pub channel_type: String,
    /// Serialized receiver definition
    pub data: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last update time
    pub updated_at: DateTime<Utc>,
}

impl Channel {
    /// Materialize a receiver as a not-yet-persisted channel
    pub fn from_receiver(receiver: &Receiver, org_id: &str) -> Result<Self> {
        let now = Utc::now();
        Ok(Self {
            id: 0,
            org_id: org_id.to_string(),
            name: receiver.name.clone(),
            channel_type: receiver.channel_type(),
            data: serde_json::to_string(receiver)?,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace the stored receiver definition
    ///
    /// Channels cannot be renamed: the name is the join key with the
    /// remote engine's routing table.
    pub fn update(&mut self, receiver: &Receiver) -> Result<()> {
        if receiver.name != self.name {
            return Err(Error::invalid_argument(format!(
                "cannot rename channel '{}' to '{}'",
                self.name, receiver.name
            )));
        }

        self.channel_type = receiver.channel_type();
        self.data = serde_json::to_string(receiver)?;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Decode the stored receiver definition
    pub fn receiver(&self) -> Result<Receiver> {
        Ok(serde_json::from_str(&self.data)?)
    }
}
