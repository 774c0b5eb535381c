//! Dispatcher - fixed fan-out of transport sessions
//!
//! Spawns one task per worker, each owning its own connection and sending
//! the same static quota. The only synchronization point is the final
//! join. The first failure aborts every other worker and is returned as
//! is; there is no partial-run continuation.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::task::JoinSet;
use tracing::{debug, error, info};

use crate::error::{ClientError, Result};
use crate::plan::SendPlan;
use crate::session::{TransportSession, WorkerResult};
use crate::stats::SendCounters;
use crate::transport::{Destination, Transport};

/// Aggregate outcome of a completed dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    /// Per-worker results, ordered by worker id
    pub workers: Vec<WorkerResult>,
    /// Wall-clock time from spawn until the last worker finished
    pub elapsed: Duration,
}

impl DispatchReport {
    /// Records written across all workers
    pub fn total_records(&self) -> u64 {
        self.workers.iter().map(|w| w.records).sum()
    }

    /// Bytes written across all workers
    pub fn total_bytes(&self) -> u64 {
        self.workers.iter().map(|w| w.bytes).sum()
    }

    /// Aggregate records per second
    pub fn records_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.total_records() as f64 / secs
        } else {
            0.0
        }
    }
}

/// Runs a fixed number of sessions against one destination
pub struct Dispatcher {
    destination: Destination,
    transport: Transport,
    plan: Arc<SendPlan>,
    counters: Arc<SendCounters>,
}

impl Dispatcher {
    /// Create a dispatcher for a prepared plan
    pub fn new(destination: Destination, transport: Transport, plan: SendPlan) -> Self {
        Self {
            destination,
            transport,
            plan: Arc::new(plan),
            counters: Arc::new(SendCounters::new()),
        }
    }

    /// Counters updated by the workers while `run` is in flight
    pub fn counters(&self) -> Arc<SendCounters> {
        Arc::clone(&self.counters)
    }

    /// Destination all workers dial
    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Start `workers` sessions of `quota` records each and wait for all
    ///
    /// Worker ids are `1..=workers`.
    ///
    /// # Errors
    ///
    /// `InvalidDispatch` for a zero worker count or quota, or a total that
    /// does not fit in a `u64`, and `UnsupportedTransport` for TLS, all
    /// before any dial. Otherwise the
    /// first worker error; the remaining workers are aborted and their
    /// connections dropped.
    pub async fn run(&self, workers: usize, quota: u64) -> Result<DispatchReport> {
        if workers == 0 {
            return Err(ClientError::InvalidDispatch(
                "worker count must be greater than zero",
            ));
        }
        if quota == 0 {
            return Err(ClientError::InvalidDispatch(
                "records per worker must be greater than zero",
            ));
        }
        let total = quota.checked_mul(workers as u64).ok_or(ClientError::InvalidDispatch(
            "total record count overflows u64",
        ))?;
        let transport = self.transport.ensure_supported()?;

        info!(
            destination = %self.destination,
            transport = %transport,
            workers,
            quota,
            total,
            "dispatch starting"
        );

        let start = Instant::now();
        let mut tasks = JoinSet::new();

        for worker_id in 1..=workers {
            let destination = self.destination.clone();
            let plan = Arc::clone(&self.plan);
            let counters = Arc::clone(&self.counters);

            tasks.spawn(async move {
                let session = TransportSession::connect(worker_id, &destination, transport).await?;
                session.send(&plan, quota, &counters).await
            });
        }

        let mut results = Vec::with_capacity(workers);

        while let Some(joined) = tasks.join_next().await {
            let failure = match joined {
                Ok(Ok(result)) => {
                    debug!(worker_id = result.worker_id, "worker joined");
                    results.push(result);
                    continue;
                }
                Ok(Err(e)) => e,
                Err(e) => ClientError::WorkerAborted(e.to_string()),
            };

            error!(error = %failure, "worker failed, aborting dispatch");
            tasks.shutdown().await;
            return Err(failure);
        }

        results.sort_by_key(|r| r.worker_id);
        let elapsed = start.elapsed();

        info!(
            workers = results.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "dispatch completed"
        );

        Ok(DispatchReport {
            workers: results,
            elapsed,
        })
    }
}
