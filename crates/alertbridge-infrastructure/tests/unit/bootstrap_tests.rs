//! Composition root tests

use alertbridge_application::ports::AlertmanagerInterface;
use alertbridge_domain::ports::{ConfigStore, RemoteAlertmanager};
use alertbridge_infrastructure::config::{AppConfig, ConfigBuilder};
use alertbridge_infrastructure::init_app;

#[tokio::test]
async fn test_init_app_wires_default_services() -> Result<(), Box<dyn std::error::Error>> {
    let context = init_app(AppConfig::default()).await?;

    assert_eq!(context.remote().provider_name(), "legacy-http");
    assert!(context.store().list_orgs().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_init_app_seeds_configured_orgs() -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigBuilder::new().with_org("main").with_org("staging").build()?;

    let context = init_app(config).await?;

    assert_eq!(context.store().list_orgs().await?, vec!["main", "staging"]);
    let alertmanager = context.alertmanager();
    assert_eq!(alertmanager.org_resolver().resolve().await?, "main");
    assert!(alertmanager.list_channels("main").await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_init_app_rejects_unknown_store() {
    let mut config = AppConfig::default();
    config.store.provider = "etcd".to_string();

    let err = init_app(config).await.expect_err("unknown store must fail");

    assert!(err.to_string().contains("etcd"));
}

#[tokio::test]
async fn test_init_app_seeds_each_org_once_in_order() -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigBuilder::new()
        .with_org("staging")
        .with_org("main")
        .with_org("staging")
        .build()?;

    let context = init_app(config).await?;

    assert_eq!(context.store().list_orgs().await?, vec!["staging", "main"]);
    assert!(context.store().get("main").await?.receivers.is_empty());
    Ok(())
}
