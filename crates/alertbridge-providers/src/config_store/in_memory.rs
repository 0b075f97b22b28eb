//! In-memory config store implementation
//!
//! Stores organization configs and channels in memory for development and
//! testing. Data is not persisted and will be lost on restart.
//!
//! Channel mutations follow the commit-gate contract: the write is staged
//! under the organization's lock, the gate runs, and the channel table only
//! changes when the gate succeeds. Holding the lock across the gate
//! serializes mutations per organization.

use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use alertbridge_domain::entities::{Channel, ChannelId, Config, OrgId};
use alertbridge_domain::error::{Error, Result};
use alertbridge_domain::ports::{CommitGate, ConfigStore};

use crate::constants::IN_MEMORY_STORE_PROVIDER;

/// In-memory config store
pub struct InMemoryConfigStore {
    orgs: RwLock<Vec<OrgId>>,
    configs: DashMap<OrgId, Config>,
    org_locks: DashMap<OrgId, Arc<Mutex<()>>>,
    channels: RwLock<BTreeMap<ChannelId, Channel>>,
    next_id: AtomicI64,
}

impl InMemoryConfigStore {
    /// Create an empty store with no organizations
    pub fn new() -> Self {
        Self::with_orgs(Vec::<String>::new())
    }

    /// Create a store seeded with empty configs for `orgs`, in order
    pub fn with_orgs<I, S>(orgs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OrgId>,
    {
        let configs = DashMap::new();
        let mut ordered = Vec::new();
        for org_id in orgs {
            let org_id = org_id.into();
            if configs.contains_key(&org_id) {
                continue;
            }
            configs.insert(org_id.clone(), Config::new(org_id.clone()));
            ordered.push(org_id);
        }

        Self {
            orgs: RwLock::new(ordered),
            configs,
            org_locks: DashMap::new(),
            channels: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Register an organization with an empty config; no-op if known
    pub async fn add_org(&self, org_id: &str) {
        let mut orgs = self.orgs.write().await;
        if self.configs.contains_key(org_id) {
            return;
        }
        self.configs
            .insert(org_id.to_string(), Config::new(org_id));
        orgs.push(org_id.to_string());
    }

    /// Provider name
    pub fn provider_name(&self) -> &str {
        IN_MEMORY_STORE_PROVIDER
    }

    fn ensure_org(&self, org_id: &str) -> Result<()> {
        if self.configs.contains_key(org_id) {
            Ok(())
        } else {
            Err(Error::not_found(format!("organization '{org_id}'")))
        }
    }

    fn org_lock(&self, org_id: &str) -> Arc<Mutex<()>> {
        self.org_locks
            .entry(org_id.to_string())
            .or_default()
            .clone()
    }

    async fn find_channel(&self, org_id: &str, id: ChannelId) -> Result<Channel> {
        self.channels
            .read()
            .await
            .get(&id)
            .filter(|channel| channel.org_id == org_id)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("channel {id} in organization '{org_id}'")))
    }

    async fn ensure_unique_name(&self, org_id: &str, name: &str, except: ChannelId) -> Result<()> {
        let taken = self
            .channels
            .read()
            .await
            .values()
            .any(|channel| channel.org_id == org_id && channel.name == name && channel.id != except);
        if taken {
            return Err(Error::already_exists(format!(
                "channel '{name}' in organization '{org_id}'"
            )));
        }
        Ok(())
    }
}

impl Default for InMemoryConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for InMemoryConfigStore {
    async fn list_orgs(&self) -> Result<Vec<OrgId>> {
        Ok(self.orgs.read().await.clone())
    }

    async fn get(&self, org_id: &str) -> Result<Config> {
        self.configs
            .get(org_id)
            .map(|config| config.value().clone())
            .ok_or_else(|| Error::not_found(format!("organization '{org_id}'")))
    }

    async fn set(&self, org_id: &str, config: &Config) -> Result<()> {
        let mut stored = config.clone();
        stored.org_id = org_id.to_string();

        let mut orgs = self.orgs.write().await;
        if self.configs.insert(org_id.to_string(), stored).is_none() {
            orgs.push(org_id.to_string());
        }
        Ok(())
    }

    async fn list_channels(&self, org_id: &str) -> Result<Vec<Channel>> {
        self.ensure_org(org_id)?;
        Ok(self
            .channels
            .read()
            .await
            .values()
            .filter(|channel| channel.org_id == org_id)
            .cloned()
            .collect())
    }

    async fn list_all_channels(&self) -> Result<Vec<Channel>> {
        Ok(self.channels.read().await.values().cloned().collect())
    }

    async fn get_channel_by_id(&self, org_id: &str, id: ChannelId) -> Result<Channel> {
        self.find_channel(org_id, id).await
    }

    async fn create_channel(
        &self,
        org_id: &str,
        mut channel: Channel,
        gate: &dyn CommitGate,
    ) -> Result<Channel> {
        self.ensure_org(org_id)?;
        let lock = self.org_lock(org_id);
        let _guard = lock.lock().await;

        self.ensure_unique_name(org_id, &channel.name, 0).await?;
        channel.org_id = org_id.to_string();

        gate.on_local_commit().await.inspect_err(|_| {
            debug!("Discarding staged create of channel '{}'", channel.name);
        })?;

        channel.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.channels.write().await.insert(channel.id, channel.clone());
        Ok(channel)
    }

    async fn update_channel(
        &self,
        org_id: &str,
        mut channel: Channel,
        gate: &dyn CommitGate,
    ) -> Result<Channel> {
        let lock = self.org_lock(org_id);
        let _guard = lock.lock().await;

        let existing = self.find_channel(org_id, channel.id).await?;
        self.ensure_unique_name(org_id, &channel.name, channel.id).await?;
        channel.org_id = org_id.to_string();
        channel.created_at = existing.created_at;

        gate.on_local_commit().await.inspect_err(|_| {
            debug!("Discarding staged update of channel {}", channel.id);
        })?;

        self.channels.write().await.insert(channel.id, channel.clone());
        Ok(channel)
    }

    async fn delete_channel_by_id(
        &self,
        org_id: &str,
        id: ChannelId,
        gate: &dyn CommitGate,
    ) -> Result<()> {
        let lock = self.org_lock(org_id);
        let _guard = lock.lock().await;

        self.find_channel(org_id, id).await?;

        gate.on_local_commit().await.inspect_err(|_| {
            debug!("Discarding staged delete of channel {}", id);
        })?;

        self.channels.write().await.remove(&id);
        Ok(())
    }
}
