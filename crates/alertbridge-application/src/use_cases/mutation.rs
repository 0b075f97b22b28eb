//! Dual-write mutation tracking
//!
//! A channel mutation touches three places: the local channel table, the
//! remote engine's route and the organization's persisted config. The
//! phases below are traversed in order; a failure in any phase before
//! `Committed` leaves the local channel table untouched.
//!
//! ```text
//! Validating -> Validated -> LocalWritePending -> RemoteCallPending
//!            -> ConfigPersistPending -> Committed
//! ```
//!
//! A crash between a successful remote call and the config persist leaves
//! the remote route in place without a local record. There is no
//! reconciliation: the remote engine offers no way to list routes.

use alertbridge_domain::error::{Error, Result};
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use tracing::{debug, info, warn};

/// Kind of channel mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    /// New channel and route
    Create,
    /// Replaced channel and route
    Update,
    /// Removed channel and route
    Delete,
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Phase of a dual-write mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum MutationPhase {
    /// Preconditions are being checked
    Validating = 0,
    /// Preconditions hold; nothing written yet
    Validated = 1,
    /// Local write staged in the store
    LocalWritePending = 2,
    /// Remote route call in flight
    RemoteCallPending = 3,
    /// Remote call succeeded; config being persisted
    ConfigPersistPending = 4,
    /// Local write committed
    Committed = 5,
}

impl MutationPhase {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Validating,
            1 => Self::Validated,
            2 => Self::LocalWritePending,
            3 => Self::RemoteCallPending,
            4 => Self::ConfigPersistPending,
            _ => Self::Committed,
        }
    }
}

/// Phase tracker for one mutation
///
/// Shared by reference between the orchestrator and the commit gate the
/// store invokes, hence the atomic phase.
#[derive(Debug)]
pub struct Mutation {
    kind: MutationKind,
    org_id: String,
    receiver: String,
    phase: AtomicU8,
}

impl Mutation {
    /// Start tracking a mutation of `receiver` in `org_id`
    pub fn begin(kind: MutationKind, org_id: &str, receiver: &str) -> Self {
        Self {
            kind,
            org_id: org_id.to_string(),
            receiver: receiver.to_string(),
            phase: AtomicU8::new(MutationPhase::Validating as u8),
        }
    }

    /// Mutation kind
    pub fn kind(&self) -> MutationKind {
        self.kind
    }

    /// Receiver being mutated
    pub fn receiver(&self) -> &str {
        &self.receiver
    }

    /// Current phase
    pub fn phase(&self) -> MutationPhase {
        MutationPhase::from_u8(self.phase.load(Ordering::SeqCst))
    }

    /// Move to `next`
    pub fn advance(&self, next: MutationPhase) {
        self.phase.store(next as u8, Ordering::SeqCst);
        debug!(
            org_id = %self.org_id,
            receiver = %self.receiver,
            phase = ?next,
            "Channel {} advanced",
            self.kind
        );
    }

    /// Close the mutation: mark it committed or log where it failed
    pub fn finish<T>(&self, result: Result<T>) -> Result<T> {
        match result {
            Ok(value) => {
                self.advance(MutationPhase::Committed);
                info!(
                    org_id = %self.org_id,
                    receiver = %self.receiver,
                    "Channel {} committed",
                    self.kind
                );
                Ok(value)
            }
            Err(e) => {
                self.log_abort(&e);
                Err(e)
            }
        }
    }

    fn log_abort(&self, error: &Error) {
        warn!(
            org_id = %self.org_id,
            receiver = %self.receiver,
            phase = ?self.phase(),
            kind = ?error.kind(),
            "Channel {} aborted: {}",
            self.kind,
            error
        );
    }
}
