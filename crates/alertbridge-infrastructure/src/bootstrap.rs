//! Composition Root
//!
//! Builds the config store, the remote engine client and the legacy
//! alertmanager orchestrator from an [`AppConfig`].
//!
//! ```text
//! AppConfig → StoreConfig ──────→ InMemoryConfigStore ─┐
//!           → AlertmanagerConfig → HttpLegacyAlertmanager ─┼→ LegacyAlertmanager
//!                               → BatcherConfig ─────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(AppConfig::default()).await?;
//! let batches = context.alertmanager().open().await?;
//! ```

use crate::config::{AppConfig, StoreConfig};
use crate::constants::STORE_PROVIDER_MEMORY;
use alertbridge_application::use_cases::LegacyAlertmanager;
use alertbridge_domain::error::{Error, Result};
use alertbridge_domain::ports::{ConfigStore, SharedConfigStore, SharedRemoteAlertmanager};
use alertbridge_providers::{HttpLegacyAlertmanager, InMemoryConfigStore};
use std::sync::Arc;
use tracing::info;

/// Application context holding the wired services
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    store: SharedConfigStore,
    remote: SharedRemoteAlertmanager,
    alertmanager: Arc<LegacyAlertmanager>,
}

impl AppContext {
    /// Config store
    pub fn store(&self) -> SharedConfigStore {
        Arc::clone(&self.store)
    }

    /// External engine client
    pub fn remote(&self) -> SharedRemoteAlertmanager {
        Arc::clone(&self.remote)
    }

    /// Orchestrator over store and remote
    pub fn alertmanager(&self) -> Arc<LegacyAlertmanager> {
        Arc::clone(&self.alertmanager)
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("api_url", &self.config.alertmanager.legacy.api_url)
            .field("store_provider", &self.config.store.provider)
            .field("remote_provider", &self.remote.provider_name())
            .finish()
    }
}

/// Initialize the application context from configuration
pub async fn init_app(config: AppConfig) -> Result<AppContext> {
    info!("Initializing application context");

    let store = create_store(&config.store).await?;

    let remote: SharedRemoteAlertmanager = Arc::new(HttpLegacyAlertmanager::from_config(
        config.alertmanager.legacy.api_url.clone(),
        &config.alertmanager.http.client_config(),
    )?);
    info!(
        "Remote alertmanager resolved: {} ({})",
        remote.provider_name(),
        config.alertmanager.legacy.api_url
    );

    let alertmanager = Arc::new(LegacyAlertmanager::new(
        Arc::clone(&remote),
        Arc::clone(&store),
        config.alertmanager.batcher.batcher_config(),
    )?);

    Ok(AppContext {
        config: Arc::new(config),
        store,
        remote,
        alertmanager,
    })
}

async fn create_store(config: &StoreConfig) -> Result<SharedConfigStore> {
    match config.provider.as_str() {
        STORE_PROVIDER_MEMORY => {
            let store = InMemoryConfigStore::new();
            for org_id in &config.orgs {
                store.add_org(org_id).await;
            }
            info!(
                "Config store resolved: {} ({} organizations)",
                store.provider_name(),
                store.list_orgs().await?.len()
            );
            Ok(Arc::new(store))
        }
        other => Err(Error::configuration(format!(
            "Unknown store provider '{other}'"
        ))),
    }
}
