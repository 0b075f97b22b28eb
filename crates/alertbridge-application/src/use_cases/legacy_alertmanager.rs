//! Legacy Alertmanager Synchronization Service
//!
//! Delivers batched alerts to the external engine with receiver attribution
//! and keeps the local channel table, the organization's config and the
//! remote routing table in step.
//!
//! ## Delivery path (per batch)
//!
//! 1. Resolve the active organization ([`OrgResolver`])
//! 2. Fetch the organization's [`Config`]
//! 3. Attribute every alert through its rule id; unattributable alerts are
//!    logged and skipped individually
//! 4. Submit the survivors in one request; a failure drops the batch
//!
//! ## Channel mutations (dual write)
//!
//! The in-memory config is validated first, then the store stages the
//! channel write and runs a remote route gate. The gate calls the remote
//! engine and, only on success, persists the updated config. A failing
//! remote call aborts the staged write. See [`Mutation`] for the phases.
//! Mutations are serialized so the config each one persists includes the
//! changes of the ones before it.

use crate::ports::services::AlertmanagerInterface;
use crate::use_cases::batcher::{AlertBatch, AlertBatcher, BatcherConfig};
use crate::use_cases::mutation::{Mutation, MutationKind, MutationPhase};
use crate::use_cases::org_resolver::OrgResolver;
use alertbridge_domain::entities::{
    Channel, ChannelId, Config, GettableAlert, GettableAlertsParams, LegacyPostableAlert,
    PostableAlert, Receiver,
};
use alertbridge_domain::error::{Error, Result};
use alertbridge_domain::ports::{
    CommitGate, ConfigStore, RemoteAlertmanager, SharedConfigStore, SharedRemoteAlertmanager,
};
use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Outcome of delivering one batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    /// Alerts included in the outbound payload
    pub delivered: usize,
    /// Alerts skipped for lack of attribution
    pub skipped: usize,
}

/// Synchronization orchestrator over a remote engine and a config store
pub struct LegacyAlertmanager {
    remote: SharedRemoteAlertmanager,
    store: SharedConfigStore,
    batcher: AlertBatcher,
    orgs: OrgResolver,
    // Config read-modify-write spans the store's own locking
    mutations: Mutex<()>,
}

impl LegacyAlertmanager {
    /// Create the service; the delivery loop starts with [`start`](AlertmanagerInterface::start)
    pub fn new(
        remote: SharedRemoteAlertmanager,
        store: SharedConfigStore,
        batcher_config: BatcherConfig,
    ) -> Result<Self> {
        Ok(Self {
            remote,
            orgs: OrgResolver::new(store.clone()),
            store,
            batcher: AlertBatcher::new(batcher_config)?,
            mutations: Mutex::new(()),
        })
    }

    /// Active organization resolver
    pub fn org_resolver(&self) -> &OrgResolver {
        &self.orgs
    }

    /// Start the batcher and take its batch stream
    ///
    /// Callers that spawn the delivery loop open first, so alerts queued
    /// before a quick `stop` are still flushed into the stream.
    pub async fn open(&self) -> Result<mpsc::Receiver<AlertBatch>> {
        let batches = self.batcher.take_receiver().await?;
        self.batcher.start().await?;
        info!(
            "Legacy alertmanager opened (remote: {})",
            self.remote.provider_name()
        );
        Ok(batches)
    }

    /// Deliver batches one at a time until the stream ends or `cancel` fires
    pub async fn deliver_batches(
        &self,
        mut batches: mpsc::Receiver<AlertBatch>,
        cancel: CancellationToken,
    ) {
        loop {
            tokio::select! {
                biased;

                _ = cancel.cancelled() => {
                    info!("Delivery loop cancelled");
                    break;
                }

                next = batches.recv() => match next {
                    Some(batch) => {
                        let batch_size = batch.len();
                        tokio::select! {
                            biased;
                            _ = cancel.cancelled() => {
                                warn!("Delivery loop cancelled while delivering {} alerts", batch_size);
                                break;
                            }
                            _ = self.deliver_batch(batch) => {}
                        }
                    }
                    None => {
                        info!("Batch stream closed, delivery loop exiting");
                        break;
                    }
                },
            }
        }
    }

    /// Deliver one batch, logging and dropping it on failure
    pub async fn deliver_batch(&self, batch: AlertBatch) {
        let batch_size = batch.len();
        let org_id = match self.orgs.resolve().await {
            Ok(org_id) => org_id,
            Err(e) => {
                error!(
                    batch_size,
                    kind = ?e.kind(),
                    "Dropping batch: cannot resolve organization: {}",
                    e
                );
                return;
            }
        };

        match self.send_alerts(&org_id, batch).await {
            Ok(report) => debug!(
                org_id = %org_id,
                delivered = report.delivered,
                skipped = report.skipped,
                "Batch processed"
            ),
            Err(e) => error!(
                org_id = %org_id,
                batch_size,
                kind = ?e.kind(),
                "Dropping batch: {}",
                e
            ),
        }
    }

    /// Attribute alerts through the org's routing table and submit the survivors
    ///
    /// Alerts that cannot be attributed are skipped; when none survive no
    /// request is made.
    pub async fn send_alerts(
        &self,
        org_id: &str,
        alerts: Vec<PostableAlert>,
    ) -> Result<DeliveryReport> {
        let config = self.store.get(org_id).await?;

        let mut report = DeliveryReport::default();
        let mut payload = Vec::with_capacity(alerts.len());
        for alert in alerts {
            match attribute(&config, &alert) {
                Ok(receivers) => payload.push(LegacyPostableAlert::new(alert, receivers)),
                Err(e) => {
                    report.skipped += 1;
                    warn!(
                        org_id = %org_id,
                        rule_id = alert.rule_id().unwrap_or_default(),
                        "Skipping alert: {}",
                        e
                    );
                }
            }
        }

        if payload.is_empty() {
            debug!(org_id = %org_id, "No attributable alerts, skipping delivery");
            return Ok(report);
        }

        self.remote.post_alerts(&payload).await?;
        report.delivered = payload.len();
        Ok(report)
    }
}

/// Receiver names for an alert, or why there are none
fn attribute(config: &Config, alert: &PostableAlert) -> Result<Vec<String>> {
    let rule_id = alert
        .rule_id()
        .ok_or_else(|| Error::attribution(None, "alert has no rule id label"))?;

    let receivers = config.receiver_names_from_rule_id(rule_id);
    if receivers.is_empty() {
        return Err(Error::attribution(
            Some(rule_id),
            format!("no receivers routed for rule '{rule_id}'"),
        ));
    }
    Ok(receivers)
}

/// Remote route operation performed inside the commit gate
enum RouteOperation<'a> {
    Create(&'a Receiver),
    Update(&'a Receiver),
    Delete(&'a str),
}

/// Commit gate: remote route call, then config persist
struct RemoteRouteGate<'a> {
    remote: &'a dyn RemoteAlertmanager,
    store: &'a dyn ConfigStore,
    operation: RouteOperation<'a>,
    config: &'a Config,
    mutation: &'a Mutation,
}

#[async_trait]
impl CommitGate for RemoteRouteGate<'_> {
    async fn on_local_commit(&self) -> Result<()> {
        self.mutation.advance(MutationPhase::RemoteCallPending);
        let remote_result = match self.operation {
            RouteOperation::Create(receiver) => self.remote.create_route(receiver).await,
            RouteOperation::Update(receiver) => self.remote.update_route(receiver).await,
            RouteOperation::Delete(name) => self.remote.delete_route(name).await,
        };
        remote_result.map_err(|e| Error::remote_gate(self.mutation.receiver(), e))?;

        self.mutation.advance(MutationPhase::ConfigPersistPending);
        self.store.set(&self.config.org_id, self.config).await
    }
}

impl LegacyAlertmanager {
    fn gate<'a>(
        &'a self,
        operation: RouteOperation<'a>,
        config: &'a Config,
        mutation: &'a Mutation,
    ) -> RemoteRouteGate<'a> {
        RemoteRouteGate {
            remote: self.remote.as_ref(),
            store: self.store.as_ref(),
            operation,
            config,
            mutation,
        }
    }

    async fn create(&self, org_id: &str, receiver: &Receiver, mutation: &Mutation) -> Result<Channel> {
        let channel = Channel::from_receiver(receiver, org_id)?;
        let mut config = self.store.get(org_id).await?;
        config.org_id = org_id.to_string();
        config.create_receiver(receiver.clone())?;
        mutation.advance(MutationPhase::Validated);

        let gate = self.gate(RouteOperation::Create(receiver), &config, mutation);
        mutation.advance(MutationPhase::LocalWritePending);
        self.store.create_channel(org_id, channel, &gate).await
    }

    async fn update(
        &self,
        org_id: &str,
        receiver: &Receiver,
        id: ChannelId,
        mutation: &Mutation,
    ) -> Result<Channel> {
        let mut channel = self.store.get_channel_by_id(org_id, id).await?;
        channel.update(receiver)?;
        let mut config = self.store.get(org_id).await?;
        config.org_id = org_id.to_string();
        config.update_receiver(receiver.clone())?;
        mutation.advance(MutationPhase::Validated);

        let gate = self.gate(RouteOperation::Update(receiver), &config, mutation);
        mutation.advance(MutationPhase::LocalWritePending);
        self.store.update_channel(org_id, channel, &gate).await
    }

    async fn delete(&self, org_id: &str, channel: &Channel, mutation: &Mutation) -> Result<()> {
        let mut config = self.store.get(org_id).await?;
        config.org_id = org_id.to_string();
        config.delete_receiver(&channel.name)?;
        mutation.advance(MutationPhase::Validated);

        let gate = self.gate(RouteOperation::Delete(&channel.name), &config, mutation);
        mutation.advance(MutationPhase::LocalWritePending);
        self.store.delete_channel_by_id(org_id, channel.id, &gate).await
    }
}

#[async_trait]
impl AlertmanagerInterface for LegacyAlertmanager {
    async fn start(&self, cancel: CancellationToken) -> Result<()> {
        let batches = self.open().await?;
        self.deliver_batches(batches, cancel).await;
        Ok(())
    }

    async fn stop(&self) {
        self.batcher.stop().await;
    }

    async fn put_alerts(&self, _org_id: &str, alerts: Vec<PostableAlert>) -> Result<()> {
        self.batcher.add(alerts).await;
        Ok(())
    }

    async fn get_alerts(
        &self,
        _org_id: &str,
        params: &GettableAlertsParams,
    ) -> Result<Vec<GettableAlert>> {
        self.remote.get_alerts(params).await
    }

    async fn test_receiver(&self, _org_id: &str, receiver: &Receiver) -> Result<()> {
        receiver.validate()?;
        self.remote.test_receiver(receiver).await
    }

    async fn test_alert(
        &self,
        _org_id: &str,
        alert: PostableAlert,
        receivers: Vec<String>,
    ) -> Result<()> {
        if receivers.is_empty() {
            return Err(Error::invalid_argument("test alert needs at least one receiver"));
        }
        self.remote
            .post_alerts(&[LegacyPostableAlert::new(alert, receivers)])
            .await
    }

    async fn list_channels(&self, org_id: &str) -> Result<Vec<Channel>> {
        self.store.list_channels(org_id).await
    }

    async fn list_all_channels(&self) -> Result<Vec<Channel>> {
        self.store.list_all_channels().await
    }

    async fn get_channel_by_id(&self, org_id: &str, id: ChannelId) -> Result<Channel> {
        self.store.get_channel_by_id(org_id, id).await
    }

    async fn create_channel(&self, org_id: &str, receiver: Receiver) -> Result<Channel> {
        let _serial = self.mutations.lock().await;
        let mutation = Mutation::begin(MutationKind::Create, org_id, &receiver.name);
        let result = self.create(org_id, &receiver, &mutation).await;
        mutation.finish(result)
    }

    async fn update_channel_by_receiver_and_id(
        &self,
        org_id: &str,
        receiver: Receiver,
        id: ChannelId,
    ) -> Result<Channel> {
        let _serial = self.mutations.lock().await;
        let mutation = Mutation::begin(MutationKind::Update, org_id, &receiver.name);
        let result = self.update(org_id, &receiver, id, &mutation).await;
        mutation.finish(result)
    }

    async fn delete_channel_by_id(&self, org_id: &str, id: ChannelId) -> Result<()> {
        let _serial = self.mutations.lock().await;
        let channel = self.store.get_channel_by_id(org_id, id).await?;
        let mutation = Mutation::begin(MutationKind::Delete, org_id, &channel.name);
        let result = self.delete(org_id, &channel, &mutation).await;
        mutation.finish(result)
    }

    async fn get_config(&self, org_id: &str) -> Result<Config> {
        self.store.get(org_id).await
    }

    // Not taken under `mutations`; ordering with mutations is up to the caller
    async fn set_config(&self, org_id: &str, config: &Config) -> Result<()> {
        self.store.set(org_id, config).await
    }
}
