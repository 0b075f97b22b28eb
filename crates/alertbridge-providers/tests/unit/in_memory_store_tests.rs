//! Tests for the in-memory config store and its commit-gate contract

use std::sync::atomic::{AtomicUsize, Ordering};

use alertbridge_domain::entities::{Channel, Config, Receiver};
use alertbridge_domain::error::{Error, Result};
use alertbridge_domain::ports::{CommitGate, ConfigStore, NoopCommitGate};
use alertbridge_providers::config_store::InMemoryConfigStore;
use async_trait::async_trait;

/// Gate that counts invocations and fails on demand
struct CountingGate {
    calls: AtomicUsize,
    fail: bool,
}

impl CountingGate {
    fn passing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CommitGate for CountingGate {
    async fn on_local_commit(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::remote_gate(
                "ops",
                Error::remote_status("/v1/routes", "500 Internal Server Error"),
            ));
        }
        Ok(())
    }
}

fn channel(name: &str) -> Channel {
    match Channel::from_receiver(&Receiver::new(name), "org-1") {
        Ok(channel) => channel,
        Err(e) => panic!("channel fixture: {e}"),
    }
}

#[tokio::test]
async fn test_orgs_listed_in_seed_order() -> Result<()> {
    let store = InMemoryConfigStore::with_orgs(["org-b", "org-a", "org-b"]);
    assert_eq!(store.list_orgs().await?, vec!["org-b", "org-a"]);

    store.add_org("org-c").await;
    store.add_org("org-a").await;
    assert_eq!(store.list_orgs().await?, vec!["org-b", "org-a", "org-c"]);
    Ok(())
}

#[tokio::test]
async fn test_empty_store_has_no_orgs() -> Result<()> {
    let store = InMemoryConfigStore::new();
    assert!(store.list_orgs().await?.is_empty());
    assert!(store.get("org-1").await.is_err_and(|e| e.is_not_found()));
    Ok(())
}

#[tokio::test]
async fn test_set_then_get_round_trips_config() -> Result<()> {
    let store = InMemoryConfigStore::with_orgs(["org-1"]);
    let mut config = Config::new("org-1");
    config.create_receiver(Receiver::new("ops"))?;
    config.set_route("rule-1", vec!["ops".to_string()])?;

    store.set("org-1", &config).await?;
    assert_eq!(store.get("org-1").await?, config);
    Ok(())
}

#[tokio::test]
async fn test_set_registers_unknown_org() -> Result<()> {
    let store = InMemoryConfigStore::new();
    store.set("org-9", &Config::default()).await?;
    assert_eq!(store.list_orgs().await?, vec!["org-9"]);
    assert_eq!(store.get("org-9").await?.org_id, "org-9");
    Ok(())
}

#[tokio::test]
async fn test_create_assigns_increasing_ids() -> Result<()> {
    let store = InMemoryConfigStore::with_orgs(["org-1"]);
    let first = store
        .create_channel("org-1", channel("ops"), &NoopCommitGate)
        .await?;
    let second = store
        .create_channel("org-1", channel("dev"), &NoopCommitGate)
        .await?;

    assert!(first.id > 0);
    assert!(second.id > first.id);
    assert_eq!(store.get_channel_by_id("org-1", second.id).await?.name, "dev");
    assert_eq!(store.list_channels("org-1").await?.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_failing_gate_discards_create() -> Result<()> {
    let store = InMemoryConfigStore::with_orgs(["org-1"]);
    let gate = CountingGate::failing();

    let result = store.create_channel("org-1", channel("ops"), &gate).await;

    assert!(result.is_err());
    assert_eq!(gate.calls(), 1);
    assert!(store.list_channels("org-1").await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_duplicate_name_rejected_before_gate() -> Result<()> {
    let store = InMemoryConfigStore::with_orgs(["org-1"]);
    store
        .create_channel("org-1", channel("ops"), &NoopCommitGate)
        .await?;

    let gate = CountingGate::passing();
    let result = store.create_channel("org-1", channel("ops"), &gate).await;

    assert!(result.is_err_and(|e| e.is_already_exists()));
    assert_eq!(gate.calls(), 0);
    assert_eq!(store.list_channels("org-1").await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_same_name_allowed_in_other_org() -> Result<()> {
    let store = InMemoryConfigStore::with_orgs(["org-1", "org-2"]);
    store
        .create_channel("org-1", channel("ops"), &NoopCommitGate)
        .await?;
    store
        .create_channel("org-2", channel("ops"), &NoopCommitGate)
        .await?;

    assert_eq!(store.list_all_channels().await?.len(), 2);
    assert_eq!(store.list_channels("org-2").await?[0].org_id, "org-2");
    Ok(())
}

#[tokio::test]
async fn test_failing_gate_keeps_previous_channel_on_update() -> Result<()> {
    let store = InMemoryConfigStore::with_orgs(["org-1"]);
    let created = store
        .create_channel("org-1", channel("ops"), &NoopCommitGate)
        .await?;

    let mut changed = created.clone();
    changed.data = r#"{"name":"ops","email_configs":[{"to":"ops@example.com"}]}"#.to_string();
    let result = store
        .update_channel("org-1", changed, &CountingGate::failing())
        .await;

    assert!(result.is_err());
    assert_eq!(store.get_channel_by_id("org-1", created.id).await?, created);
    Ok(())
}

#[tokio::test]
async fn test_update_unknown_channel_is_not_found() -> Result<()> {
    let store = InMemoryConfigStore::with_orgs(["org-1"]);
    let mut ghost = channel("ghost");
    ghost.id = 42;

    let gate = CountingGate::passing();
    let result = store.update_channel("org-1", ghost, &gate).await;
    assert!(result.is_err_and(|e| e.is_not_found()));
    assert_eq!(gate.calls(), 0);
    Ok(())
}

#[tokio::test]
async fn test_delete_runs_gate_and_removes() -> Result<()> {
    let store = InMemoryConfigStore::with_orgs(["org-1"]);
    let created = store
        .create_channel("org-1", channel("ops"), &NoopCommitGate)
        .await?;

    let failing = CountingGate::failing();
    assert!(
        store
            .delete_channel_by_id("org-1", created.id, &failing)
            .await
            .is_err()
    );
    assert_eq!(store.list_channels("org-1").await?.len(), 1);

    let passing = CountingGate::passing();
    store
        .delete_channel_by_id("org-1", created.id, &passing)
        .await?;
    assert_eq!(passing.calls(), 1);
    assert!(store.list_channels("org-1").await?.is_empty());

    let again = store
        .delete_channel_by_id("org-1", created.id, &NoopCommitGate)
        .await;
    assert!(again.is_err_and(|e| e.is_not_found()));
    Ok(())
}

#[tokio::test]
async fn test_channel_not_visible_from_other_org() -> Result<()> {
    let store = InMemoryConfigStore::with_orgs(["org-1", "org-2"]);
    let created = store
        .create_channel("org-1", channel("ops"), &NoopCommitGate)
        .await?;

    let result = store.get_channel_by_id("org-2", created.id).await;
    assert!(result.is_err_and(|e| e.is_not_found()));
    Ok(())
}
