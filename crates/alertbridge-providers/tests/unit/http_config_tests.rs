//! Tests for the HTTP client configuration

use alertbridge_providers::http::HttpClientConfig;
use std::time::Duration;

#[test]
fn test_default_config() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.max_idle_per_host, 10);
    assert!(config.user_agent.starts_with("alertbridge/"));
}

#[test]
fn test_with_timeout_keeps_other_defaults() {
    let config = HttpClientConfig::with_timeout(Duration::from_secs(3));
    assert_eq!(config.timeout, Duration::from_secs(3));
    assert_eq!(config.idle_timeout, Duration::from_secs(90));
}

#[test]
fn test_build_client() {
    assert!(HttpClientConfig::default().build_client().is_ok());
}
