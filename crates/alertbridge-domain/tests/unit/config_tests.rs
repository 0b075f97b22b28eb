//! Unit tests for the per-organization config aggregate

use alertbridge_domain::entities::{Config, Receiver};

fn config_with(receivers: &[&str]) -> Config {
    let mut config = Config::new("org-1");
    for name in receivers {
        config.create_receiver(Receiver::new(*name)).unwrap();
    }
    config
}

#[test]
fn test_receiver_names_from_rule_id() {
    let mut config = config_with(&["A", "B"]);
    config
        .set_route("R1", vec!["A".to_string(), "B".to_string()])
        .unwrap();

    assert_eq!(config.receiver_names_from_rule_id("R1"), vec!["A", "B"]);
    assert!(config.receiver_names_from_rule_id("R2").is_empty());
}

#[test]
fn test_create_receiver_rejects_duplicates() {
    let mut config = config_with(&["A"]);

    let err = config.create_receiver(Receiver::new("A")).unwrap_err();

    assert!(err.is_already_exists());
    assert_eq!(config.receivers.len(), 1);
}

#[test]
fn test_update_unknown_receiver_fails() {
    let mut config = config_with(&["A"]);

    let err = config.update_receiver(Receiver::new("B")).unwrap_err();

    assert!(err.is_not_found());
}

#[test]
fn test_delete_receiver_prunes_routes() {
    let mut config = config_with(&["A", "B"]);
    config
        .set_route("R1", vec!["A".to_string(), "B".to_string()])
        .unwrap();
    config.set_route("R2", vec!["A".to_string()]).unwrap();

    config.delete_receiver("A").unwrap();

    assert_eq!(config.receiver_names_from_rule_id("R1"), vec!["B"]);
    assert!(!config.routes.contains_key("R2"));
    assert!(config.delete_receiver("A").unwrap_err().is_not_found());
}

#[test]
fn test_set_route_requires_known_receivers() {
    let mut config = config_with(&["A"]);

    let err = config
        .set_route("R1", vec!["A".to_string(), "ghost".to_string()])
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(config.routes.is_empty());
}

#[test]
fn test_empty_route_removes_rule() {
    let mut config = config_with(&["A"]);
    config.set_route("R1", vec!["A".to_string()]).unwrap();

    config.set_route("R1", Vec::new()).unwrap();

    assert!(!config.delete_route("R1"));
}
