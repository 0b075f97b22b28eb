//! Tests for dual-write mutation phase tracking

use alertbridge_application::use_cases::{Mutation, MutationKind, MutationPhase};
use alertbridge_domain::error::{Error, ErrorKind};

#[test]
fn test_phases_are_ordered() {
    assert!(MutationPhase::Validating < MutationPhase::Validated);
    assert!(MutationPhase::Validated < MutationPhase::LocalWritePending);
    assert!(MutationPhase::LocalWritePending < MutationPhase::RemoteCallPending);
    assert!(MutationPhase::RemoteCallPending < MutationPhase::ConfigPersistPending);
    assert!(MutationPhase::ConfigPersistPending < MutationPhase::Committed);
}

#[test]
fn test_finish_ok_commits() {
    let mutation = Mutation::begin(MutationKind::Create, "org-1", "ops");
    assert_eq!(mutation.phase(), MutationPhase::Validating);

    mutation.advance(MutationPhase::Validated);
    mutation.advance(MutationPhase::LocalWritePending);
    let value = mutation.finish(Ok(7));

    assert!(matches!(value, Ok(7)));
    assert_eq!(mutation.phase(), MutationPhase::Committed);
    assert_eq!(mutation.receiver(), "ops");
    assert_eq!(mutation.kind(), MutationKind::Create);
}

#[test]
fn test_finish_err_keeps_failed_phase() {
    let mutation = Mutation::begin(MutationKind::Delete, "org-1", "ops");
    mutation.advance(MutationPhase::Validated);
    mutation.advance(MutationPhase::LocalWritePending);
    mutation.advance(MutationPhase::RemoteCallPending);

    let result: Result<(), Error> = mutation.finish(Err(Error::remote_gate(
        "ops",
        Error::network("connection refused"),
    )));

    assert!(result.is_err_and(|e| e.kind() == ErrorKind::DualWriteGate));
    assert_eq!(mutation.phase(), MutationPhase::RemoteCallPending);
}

#[test]
fn test_kind_display() {
    assert_eq!(MutationKind::Create.to_string(), "create");
    assert_eq!(MutationKind::Update.to_string(), "update");
    assert_eq!(MutationKind::Delete.to_string(), "delete");
}
