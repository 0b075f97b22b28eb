//! Active organization resolution
//!
//! The bridge serves one organization: the first one the config store
//! lists. It is resolved lazily on first use and cached for the lifetime of
//! the process. Concurrent callers share a single resolution.

use alertbridge_domain::entities::OrgId;
use alertbridge_domain::error::{Error, Result};
use alertbridge_domain::ports::SharedConfigStore;
use tokio::sync::Mutex;
use tracing::info;

/// Resolution state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrgState {
    /// Not resolved yet (or the last attempt found no organization)
    Uninitialized,
    /// Cached active organization
    Resolved(OrgId),
}

/// Lazily resolved, cached active organization
pub struct OrgResolver {
    store: SharedConfigStore,
    state: Mutex<OrgState>,
}

impl OrgResolver {
    /// Create an unresolved resolver
    pub fn new(store: SharedConfigStore) -> Self {
        Self {
            store,
            state: Mutex::new(OrgState::Uninitialized),
        }
    }

    /// Active organization, resolving it on first call
    ///
    /// Returns [`Error::NoOrganization`] while the store lists none; the
    /// next call tries again.
    pub async fn resolve(&self) -> Result<OrgId> {
        let mut state = self.state.lock().await;
        if let OrgState::Resolved(org_id) = &*state {
            return Ok(org_id.clone());
        }

        let org_id = self
            .store
            .list_orgs()
            .await?
            .into_iter()
            .next()
            .ok_or(Error::NoOrganization)?;

        info!("Resolved active organization '{}'", org_id);
        *state = OrgState::Resolved(org_id.clone());
        Ok(org_id)
    }

    /// Current state without triggering resolution
    pub async fn state(&self) -> OrgState {
        self.state.lock().await.clone()
    }
}
