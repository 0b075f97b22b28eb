//! Application Service Port Interfaces
//!
//! The surface callers use to drive alert delivery and receiver management.

use alertbridge_domain::entities::{
    Channel, ChannelId, Config, GettableAlert, GettableAlertsParams, PostableAlert, Receiver,
};
use alertbridge_domain::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

// ============================================================================
// Alertmanager Service Interface
// ============================================================================

/// Alertmanager Service Interface
///
/// Alert submission is asynchronous: [`put_alerts`](Self::put_alerts)
/// returns once the alerts are queued, and delivery happens in the loop
/// driven by [`start`](Self::start). Channel mutations are synchronous and
/// keep the local store and the remote engine in step.
#[async_trait]
pub trait AlertmanagerInterface: Send + Sync {
    /// Run the delivery loop until `cancel` fires or the service stops
    async fn start(&self, cancel: CancellationToken) -> Result<()>;

    /// Stop accepting alerts and flush what was queued
    async fn stop(&self);

    /// Queue alerts for delivery
    async fn put_alerts(&self, org_id: &str, alerts: Vec<PostableAlert>) -> Result<()>;

    /// List alerts known to the remote engine
    async fn get_alerts(
        &self,
        org_id: &str,
        params: &GettableAlertsParams,
    ) -> Result<Vec<GettableAlert>>;

    /// Send a test notification through a receiver
    async fn test_receiver(&self, org_id: &str, receiver: &Receiver) -> Result<()>;

    /// Deliver one alert to explicit receivers, bypassing the routing table
    async fn test_alert(
        &self,
        org_id: &str,
        alert: PostableAlert,
        receivers: Vec<String>,
    ) -> Result<()>;

    /// Channels of an organization
    async fn list_channels(&self, org_id: &str) -> Result<Vec<Channel>>;

    /// Channels of every organization
    async fn list_all_channels(&self) -> Result<Vec<Channel>>;

    /// A single channel
    async fn get_channel_by_id(&self, org_id: &str, id: ChannelId) -> Result<Channel>;

    /// Create a channel and its remote route
    async fn create_channel(&self, org_id: &str, receiver: Receiver) -> Result<Channel>;

    /// Replace a channel and its remote route
    async fn update_channel_by_receiver_and_id(
        &self,
        org_id: &str,
        receiver: Receiver,
        id: ChannelId,
    ) -> Result<Channel>;

    /// Delete a channel and its remote route
    async fn delete_channel_by_id(&self, org_id: &str, id: ChannelId) -> Result<()>;

    /// Current configuration of an organization
    async fn get_config(&self, org_id: &str) -> Result<Config>;

    /// Replace the configuration of an organization
    ///
    /// A whole-config write passed straight to the store. It is not
    /// serialized with channel mutations: the last writer wins, so a config
    /// read before a mutation and written after it drops that mutation's
    /// receiver.
    async fn set_config(&self, org_id: &str, config: &Config) -> Result<()>;
}

/// Shared service handle for dependency injection
pub type SharedAlertmanager = Arc<dyn AlertmanagerInterface>;
