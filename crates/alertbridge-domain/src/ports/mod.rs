//! Domain Port Interfaces
//!
//! Boundary contracts between the bridge and the systems it synchronizes.
//!
//! | Port | Description |
//! |------|-------------|
//! | [`ConfigStore`] | Local persistence of orgs, configs and channels |
//! | [`CommitGate`] | Action a store runs before committing a channel write |
//! | [`RemoteAlertmanager`] | Typed operations against the external engine |

/// Config store port and commit gate contract
pub mod config_store;
/// External alert-routing engine port
pub mod remote;

pub use config_store::{CommitGate, ConfigStore, NoopCommitGate, SharedConfigStore};
pub use remote::{RemoteAlertmanager, SharedRemoteAlertmanager};
