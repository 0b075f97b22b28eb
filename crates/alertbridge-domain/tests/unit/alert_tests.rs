//! Unit tests for alert value objects

use alertbridge_domain::constants::RULE_ID_LABEL;
use alertbridge_domain::entities::{GettableAlert, LegacyPostableAlert, PostableAlert};
use chrono::{TimeZone, Utc};
use serde_json::json;

#[test]
fn test_rule_id_is_read_from_labels() {
    let alert = PostableAlert::new().with_label(RULE_ID_LABEL, "r-1");
    assert_eq!(alert.rule_id(), Some("r-1"));

    let unlabelled = PostableAlert::new().with_label("severity", "info");
    assert_eq!(unlabelled.rule_id(), None);
}

#[test]
fn test_legacy_payload_flattens_alert_and_adds_receivers() {
    let starts_at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let alert = PostableAlert::new()
        .with_label("ruleId", "r-1")
        .with_annotation("summary", "cpu high")
        .with_window(starts_at, None);

    let payload = LegacyPostableAlert::new(alert, vec!["A".to_string(), "B".to_string()]);
    let value = serde_json::to_value(&payload).unwrap();

    assert_eq!(
        value,
        json!({
            "labels": {"ruleId": "r-1"},
            "annotations": {"summary": "cpu high"},
            "startsAt": "2024-01-02T03:04:05Z",
            "receivers": ["A", "B"]
        })
    );
}

#[test]
fn test_gettable_alert_tolerates_sparse_payloads() {
    let alert: GettableAlert = serde_json::from_value(json!({
        "labels": {"alertname": "HighCPU"},
        "fingerprint": "abc",
        "receivers": [{"name": "ops"}],
        "status": {"state": "active"}
    }))
    .unwrap();

    assert_eq!(alert.fingerprint, "abc");
    assert_eq!(alert.receivers[0].name, "ops");
    assert_eq!(alert.status.state, "active");
    assert!(alert.status.silenced_by.is_empty());
    assert!(alert.starts_at.is_none());
}
