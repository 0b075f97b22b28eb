//! Remote Alertmanager Port
//!
//! Typed operations against the external alert-routing engine. Each call is
//! a single request bounded by a fixed timeout; any non-2xx status is a
//! failure carrying the status line.

use crate::entities::{GettableAlert, GettableAlertsParams, LegacyPostableAlert, Receiver};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// External engine interface
#[async_trait]
pub trait RemoteAlertmanager: Send + Sync {
    /// List alerts, passing the raw query string through
    async fn get_alerts(&self, params: &GettableAlertsParams) -> Result<Vec<GettableAlert>>;

    /// Submit alerts with their resolved receivers in one request
    async fn post_alerts(&self, alerts: &[LegacyPostableAlert]) -> Result<()>;

    /// Ask the engine to send a test notification through a receiver
    async fn test_receiver(&self, receiver: &Receiver) -> Result<()>;

    /// Create the receiver's route
    async fn create_route(&self, receiver: &Receiver) -> Result<()>;

    /// Replace the receiver's route
    async fn update_route(&self, receiver: &Receiver) -> Result<()>;

    /// Remove the route of the named receiver
    async fn delete_route(&self, receiver_name: &str) -> Result<()>;

    /// Name of this client implementation
    fn provider_name(&self) -> &str;
}

/// Shared remote client for dependency injection
pub type SharedRemoteAlertmanager = Arc<dyn RemoteAlertmanager>;
