//! Config Store Port
//!
//! Narrow contract over the relational persistence layer. Channel mutations
//! take a [`CommitGate`]: the store stages its write, runs the gate, and
//! commits only if the gate succeeds. A failing gate fails the whole call
//! and leaves the store exactly as it was.

use crate::entities::{Channel, ChannelId, Config, OrgId};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Action executed by the store between staging and committing a write
///
/// Implementations must be safe to call at most once per store call; the
/// store never retries a gate.
///
/// ## Example
///
/// ```rust
/// use alertbridge_domain::ports::CommitGate;
/// use alertbridge_domain::Result;
///
/// struct AuditGate;
///
/// #[async_trait::async_trait]
/// impl CommitGate for AuditGate {
///     async fn on_local_commit(&self) -> Result<()> {
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait CommitGate: Send + Sync {
    /// Called once the local write is staged; an error aborts it
    async fn on_local_commit(&self) -> Result<()>;
}

/// Gate that always lets the write through
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCommitGate;

#[async_trait]
impl CommitGate for NoopCommitGate {
    async fn on_local_commit(&self) -> Result<()> {
        Ok(())
    }
}

/// Config store interface
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Known organizations, in store order
    async fn list_orgs(&self) -> Result<Vec<OrgId>>;

    /// Current configuration of an organization
    async fn get(&self, org_id: &str) -> Result<Config>;

    /// Replace the configuration of an organization
    async fn set(&self, org_id: &str, config: &Config) -> Result<()>;

    /// Channels of an organization ordered by id
    async fn list_channels(&self, org_id: &str) -> Result<Vec<Channel>>;

    /// Channels of every organization ordered by id
    async fn list_all_channels(&self) -> Result<Vec<Channel>>;

    /// A single channel; `NotFound` if it does not exist in the org
    async fn get_channel_by_id(&self, org_id: &str, id: ChannelId) -> Result<Channel>;

    /// Insert a channel, gated by `gate`; returns the channel with its id
    async fn create_channel(
        &self,
        org_id: &str,
        channel: Channel,
        gate: &dyn CommitGate,
    ) -> Result<Channel>;

    /// Replace a channel, gated by `gate`
    async fn update_channel(
        &self,
        org_id: &str,
        channel: Channel,
        gate: &dyn CommitGate,
    ) -> Result<Channel>;

    /// Remove a channel, gated by `gate`
    async fn delete_channel_by_id(
        &self,
        org_id: &str,
        id: ChannelId,
        gate: &dyn CommitGate,
    ) -> Result<()>;
}

/// Shared config store for dependency injection
pub type SharedConfigStore = Arc<dyn ConfigStore>;
