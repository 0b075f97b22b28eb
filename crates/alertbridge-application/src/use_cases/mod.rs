//! Use Case Implementations
//!
//! | Use Case | Description |
//! |----------|-------------|
//! | [`AlertBatcher`] | Size/linger bounded alert aggregation |
//! | [`LegacyAlertmanager`] | Batch delivery and dual-write channel synchronization |
//! | [`OrgResolver`] | Lazily resolved, cached active organization |
//! | [`Mutation`] | Phase tracking for one dual-write mutation |

pub mod batcher;
pub mod legacy_alertmanager;
pub mod mutation;
pub mod org_resolver;

pub use batcher::{AlertBatch, AlertBatcher, BatcherConfig};
pub use legacy_alertmanager::{DeliveryReport, LegacyAlertmanager};
pub use mutation::{Mutation, MutationKind, MutationPhase};
pub use org_resolver::{OrgResolver, OrgState};
