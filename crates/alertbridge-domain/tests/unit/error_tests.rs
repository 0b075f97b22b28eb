//! Unit tests for domain error types

use alertbridge_domain::{Error, ErrorKind};

#[test]
fn test_precondition_errors_are_classified() {
    assert_eq!(Error::not_found("channel 7").kind(), ErrorKind::Precondition);
    assert_eq!(
        Error::already_exists("receiver 'ops'").kind(),
        ErrorKind::Precondition
    );
    assert_eq!(
        Error::invalid_argument("empty name").kind(),
        ErrorKind::Precondition
    );
}

#[test]
fn test_remote_errors_are_transient() {
    let status = Error::remote_status("/v1/alerts", "500 Internal Server Error");
    assert_eq!(status.kind(), ErrorKind::TransientDelivery);
    assert_eq!(
        status.to_string(),
        "bad response status 500 Internal Server Error from /v1/alerts"
    );

    assert_eq!(
        Error::network("connection refused").kind(),
        ErrorKind::TransientDelivery
    );
}

#[test]
fn test_remote_gate_wraps_remote_failure() {
    let error = Error::remote_gate("ops", Error::remote_status("/v1/routes", "409 Conflict"));
    assert_eq!(error.kind(), ErrorKind::DualWriteGate);

    match error {
        Error::RemoteGate { receiver, source } => {
            assert_eq!(receiver, "ops");
            assert_eq!(source.kind(), ErrorKind::TransientDelivery);
        }
        _ => panic!("Expected RemoteGate error"),
    }
}

#[test]
fn test_remaining_kinds() {
    assert_eq!(Error::NoOrganization.kind(), ErrorKind::Bootstrap);
    assert_eq!(Error::database("locked").kind(), ErrorKind::Store);
    assert_eq!(
        Error::configuration("bad url").kind(),
        ErrorKind::Configuration
    );
    assert_eq!(
        Error::attribution(Some("r1"), "no receivers").kind(),
        ErrorKind::Attribution
    );
    assert_eq!(Error::internal("boom").kind(), ErrorKind::Internal);
}

#[test]
fn test_not_found_and_already_exists_helpers() {
    assert!(Error::not_found("x").is_not_found());
    assert!(!Error::not_found("x").is_already_exists());
    assert!(Error::already_exists("x").is_already_exists());
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: Error = json_err.into();
    assert_eq!(error.kind(), ErrorKind::Internal);
}
