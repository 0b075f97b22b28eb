//! Alert Batcher
//!
//! Coalesces alerts submitted by many concurrent producers into batches
//! bounded by size and by linger time.
//!
//! ## Lifecycle
//!
//! | Call | Effect |
//! |------|--------|
//! | [`AlertBatcher::new`] | Allocates the bounded input queue; nothing runs yet |
//! | [`AlertBatcher::take_receiver`] | Hands out the batch stream (once) |
//! | [`AlertBatcher::start`] | Spawns the worker task |
//! | [`AlertBatcher::add`] | Enqueues alerts, waiting while the queue is full |
//! | [`AlertBatcher::stop`] | Flushes everything accepted so far, then closes the batch stream |
//!
//! A batch is emitted when it reaches `max_batch_size` alerts or when its
//! oldest alert has waited `max_linger`, whichever comes first. Every
//! accepted alert is emitted exactly once and the relative order of alerts
//! submitted by one producer is preserved.

use alertbridge_domain::entities::PostableAlert;
use alertbridge_domain::error::{Error, Result};
use std::time::Duration;
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// One emitted batch
pub type AlertBatch = Vec<PostableAlert>;

/// Batcher tuning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatcherConfig {
    /// Input queue capacity, in alerts
    pub capacity: usize,
    /// Maximum alerts per emitted batch
    pub max_batch_size: usize,
    /// Maximum time the oldest pending alert waits before a flush
    pub max_linger: Duration,
}

impl Default for BatcherConfig {
    fn default() -> Self {
        Self {
            capacity: 1000,
            max_batch_size: 64,
            max_linger: Duration::from_millis(1000),
        }
    }
}

impl BatcherConfig {
    /// Reject settings the worker cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::configuration("batcher capacity must be positive"));
        }
        if self.max_batch_size == 0 {
            return Err(Error::configuration("batcher max_batch_size must be positive"));
        }
        if self.max_linger.is_zero() {
            return Err(Error::configuration("batcher max_linger must be positive"));
        }
        Ok(())
    }
}

/// Channel ends and worker handle, owned until `start`/`take_receiver`
struct BatcherState {
    input_rx: Option<mpsc::Receiver<PostableAlert>>,
    output_tx: Option<mpsc::Sender<AlertBatch>>,
    output_rx: Option<mpsc::Receiver<AlertBatch>>,
    worker: Option<JoinHandle<()>>,
}

/// Size and linger bounded alert aggregator
pub struct AlertBatcher {
    config: BatcherConfig,
    input: mpsc::Sender<PostableAlert>,
    state: Mutex<BatcherState>,
    shutdown: CancellationToken,
}

impl AlertBatcher {
    /// Create a batcher; fails on invalid tuning
    pub fn new(config: BatcherConfig) -> Result<Self> {
        config.validate()?;

        let (input_tx, input_rx) = mpsc::channel(config.capacity);
        let (output_tx, output_rx) = mpsc::channel(config.capacity.div_ceil(config.max_batch_size));

        Ok(Self {
            config,
            input: input_tx,
            state: Mutex::new(BatcherState {
                input_rx: Some(input_rx),
                output_tx: Some(output_tx),
                output_rx: Some(output_rx),
                worker: None,
            }),
            shutdown: CancellationToken::new(),
        })
    }

    /// Tuning in effect
    pub fn config(&self) -> &BatcherConfig {
        &self.config
    }

    /// Whether `stop` has been requested
    pub fn is_stopped(&self) -> bool {
        self.shutdown.is_cancelled()
    }

    /// Take the stream of emitted batches
    ///
    /// The stream ends once the batcher has stopped and flushed. It can be
    /// taken only once.
    pub async fn take_receiver(&self) -> Result<mpsc::Receiver<AlertBatch>> {
        self.state
            .lock()
            .await
            .output_rx
            .take()
            .ok_or_else(|| Error::internal("batch receiver already taken"))
    }

    /// Spawn the worker task
    pub async fn start(&self) -> Result<()> {
        if self.shutdown.is_cancelled() {
            return Err(Error::internal("batcher already stopped"));
        }

        let mut state = self.state.lock().await;
        let (Some(input), Some(output)) = (state.input_rx.take(), state.output_tx.take()) else {
            return Err(Error::internal("batcher already started"));
        };

        let worker = tokio::spawn(run_worker(
            self.config.clone(),
            input,
            output,
            self.shutdown.clone(),
        ));
        state.worker = Some(worker);

        info!(
            "[BATCHER] Started (capacity={}, max_batch_size={}, max_linger={:?})",
            self.config.capacity, self.config.max_batch_size, self.config.max_linger
        );
        Ok(())
    }

    /// Enqueue alerts, waiting while the input queue is full
    ///
    /// Alerts offered after `stop` are not accepted; that is logged and the
    /// call returns normally.
    pub async fn add(&self, alerts: Vec<PostableAlert>) {
        let total = alerts.len();
        for (accepted, alert) in alerts.into_iter().enumerate() {
            if self.input.send(alert).await.is_err() {
                warn!(
                    "[BATCHER] Stopped, dropping {} of {} submitted alerts",
                    total - accepted,
                    total
                );
                return;
            }
        }
    }

    /// Stop accepting input, flush what was accepted and wait for the worker
    ///
    /// Calling `stop` before `start` flushes the queued alerts from the
    /// caller's task, then closes the batch stream.
    pub async fn stop(&self) {
        self.shutdown.cancel();

        let (input, output, worker) = {
            let mut state = self.state.lock().await;
            (
                state.input_rx.take(),
                state.output_tx.take(),
                state.worker.take(),
            )
        };

        if let (Some(input), Some(output)) = (input, output) {
            drain(input, &output, Vec::new(), self.config.max_batch_size).await;
            info!("[BATCHER] Stopped before start");
        }

        if let Some(worker) = worker {
            if let Err(e) = worker.await {
                error!("[BATCHER] Worker task failed: {}", e);
            } else {
                info!("[BATCHER] Stopped");
            }
        }
    }
}

async fn run_worker(
    config: BatcherConfig,
    mut input: mpsc::Receiver<PostableAlert>,
    output: mpsc::Sender<AlertBatch>,
    shutdown: CancellationToken,
) {
    let mut pending: AlertBatch = Vec::with_capacity(config.max_batch_size);
    let mut deadline: Option<Instant> = None;

    loop {
        tokio::select! {
            biased;

            _ = shutdown.cancelled() => break,

            _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                deadline = None;
                emit(&output, &mut pending, "linger").await;
            }

            received = input.recv() => match received {
                Some(alert) => {
                    if pending.is_empty() {
                        deadline = Some(Instant::now() + config.max_linger);
                    }
                    pending.push(alert);
                    if pending.len() >= config.max_batch_size {
                        deadline = None;
                        emit(&output, &mut pending, "size").await;
                    }
                }
                None => break,
            },
        }
    }

    drain(input, &output, pending, config.max_batch_size).await;
    debug!("[BATCHER] Worker exited");
}

/// Close the input and flush `pending` plus every alert still queued
async fn drain(
    mut input: mpsc::Receiver<PostableAlert>,
    output: &mpsc::Sender<AlertBatch>,
    mut pending: AlertBatch,
    max_batch_size: usize,
) {
    input.close();
    while let Some(alert) = input.recv().await {
        pending.push(alert);
        if pending.len() >= max_batch_size {
            emit(output, &mut pending, "drain").await;
        }
    }
    emit(output, &mut pending, "drain").await;
}

async fn emit(output: &mpsc::Sender<AlertBatch>, pending: &mut AlertBatch, trigger: &str) {
    if pending.is_empty() {
        return;
    }

    let batch = std::mem::take(pending);
    let size = batch.len();
    debug!("[BATCHER] Emitting batch of {} alerts ({})", size, trigger);
    if output.send(batch).await.is_err() {
        warn!("[BATCHER] Batch consumer gone, discarding {} alerts", size);
    }
}
