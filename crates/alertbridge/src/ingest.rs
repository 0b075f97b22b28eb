//! Alert Intake
//!
//! Feeds newline-delimited JSON arrays of alerts into the service and runs
//! the binary's lifecycle around it.
//!
//! | Step | Effect |
//! |------|--------|
//! | Load | Figment configuration and logging |
//! | Wire | [`init_app`] builds store, remote client and orchestrator |
//! | Open | Batcher started, delivery loop spawned |
//! | Ingest | One `put_alerts` per stdin line until EOF or Ctrl-C |
//! | Stop | Batcher flushed, delivery loop drained |

use std::path::Path;
use std::sync::Arc;

use alertbridge_application::ports::AlertmanagerInterface;
use alertbridge_application::use_cases::LegacyAlertmanager;
use alertbridge_domain::entities::PostableAlert;
use alertbridge_domain::error::Result;
use alertbridge_infrastructure::config::{AppConfig, ConfigLoader};
use alertbridge_infrastructure::error_ext::ErrorContext;
use alertbridge_infrastructure::{init_app, logging};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Outcome of an intake run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Non-blank lines read
    pub lines: usize,
    /// Alerts handed to the service
    pub accepted: usize,
    /// Lines that were not a JSON array of alerts
    pub malformed: usize,
}

/// Read alert arrays line by line and queue them on `alertmanager`
///
/// Blank lines are ignored; malformed lines are logged and skipped. Returns
/// at EOF or on the first error from the service.
pub async fn ingest_lines<R, S>(reader: R, alertmanager: &S, org_id: &str) -> Result<IngestReport>
where
    R: AsyncBufRead + Unpin,
    S: AlertmanagerInterface + ?Sized,
{
    let mut report = IngestReport::default();
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await.io_context("Failed to read alert line")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        report.lines += 1;

        let alerts: Vec<PostableAlert> = match serde_json::from_str(line) {
            Ok(alerts) => alerts,
            Err(e) => {
                report.malformed += 1;
                warn!(line = report.lines, "Skipping malformed alert line: {}", e);
                continue;
            }
        };

        debug!(line = report.lines, batch_size = alerts.len(), "Queueing alerts");
        report.accepted += alerts.len();
        alertmanager.put_alerts(org_id, alerts).await?;
    }

    Ok(report)
}

/// Run Alert Bridge over stdin
pub async fn run(config_path: Option<&Path>) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    logging::init_logging(config.logging.clone())?;

    info!(
        api_url = %config.alertmanager.legacy.api_url,
        orgs = config.store.orgs.len(),
        "Starting Alert Bridge"
    );

    let org_id = config.store.orgs.first().cloned().unwrap_or_default();
    let context = init_app(config).await?;
    let alertmanager = context.alertmanager();

    let cancel = CancellationToken::new();
    let delivery = spawn_delivery(Arc::clone(&alertmanager), cancel.clone()).await?;

    let stdin = BufReader::new(tokio::io::stdin());
    tokio::select! {
        result = ingest_lines(stdin, alertmanager.as_ref(), &org_id) => match result {
            Ok(report) => info!(
                lines = report.lines,
                accepted = report.accepted,
                malformed = report.malformed,
                "[SHUTDOWN] Input closed"
            ),
            Err(e) => error!("[SHUTDOWN] Intake failed: {}", e),
        },
        _ = tokio::signal::ctrl_c() => info!("[SHUTDOWN] Received Ctrl-C"),
    }

    alertmanager.stop().await;

    // A second Ctrl-C abandons the drain
    tokio::select! {
        joined = delivery => joined.context("Delivery loop task failed")?,
        _ = tokio::signal::ctrl_c() => {
            warn!("[SHUTDOWN] Second Ctrl-C, abandoning in-flight delivery");
            cancel.cancel();
        }
    }

    info!("[SHUTDOWN] Alert Bridge stopped");
    Ok(())
}

/// Open the batcher and run the delivery loop on its own task
async fn spawn_delivery(
    alertmanager: Arc<LegacyAlertmanager>,
    cancel: CancellationToken,
) -> Result<tokio::task::JoinHandle<()>> {
    let batches = alertmanager.open().await?;
    Ok(tokio::spawn(async move {
        alertmanager.deliver_batches(batches, cancel).await;
    }))
}

fn load_config(config_path: Option<&Path>) -> Result<AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load()
}
