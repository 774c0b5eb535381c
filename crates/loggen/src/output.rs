//! Console output for the send command
//!
//! Human-readable numbers, the once-per-second progress line and the
//! final summary. Everything here goes to stdout; diagnostics go through
//! tracing.

use std::sync::Arc;
use std::time::{Duration, Instant};

use loggen_client::{DispatchReport, SendCounters, WorkerResult};

// =============================================================================
// Formatting
// =============================================================================

/// Format a number with human-readable suffixes (K, M, B)
pub fn format_number(n: u64) -> String {
    if n >= 1_000_000_000 {
        format!("{:.2}B", n as f64 / 1_000_000_000.0)
    } else if n >= 1_000_000 {
        format!("{:.2}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.2}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Format bytes as human-readable (auto-scale)
pub fn format_bytes(bytes: u64) -> String {
    if bytes >= 1_000_000_000 {
        format!("{:.1} GB", bytes as f64 / 1_000_000_000.0)
    } else if bytes >= 1_000_000 {
        format!("{:.1} MB", bytes as f64 / 1_000_000.0)
    } else if bytes >= 1_000 {
        format!("{:.1} KB", bytes as f64 / 1_000.0)
    } else {
        format!("{} B", bytes)
    }
}

// =============================================================================
// Progress Reporting
// =============================================================================

/// Timed progress reporter
///
/// Prints lines like `[   1.0s]    64.57K records/s |    8.3 MB |   64570 records ( 64.6%)`.
pub struct ProgressReporter {
    handle: tokio::task::JoinHandle<()>,
}

impl ProgressReporter {
    /// Start reporting on the dispatcher's counters
    pub fn start(counters: Arc<SendCounters>, total: u64) -> Self {
        let handle = tokio::spawn(async move {
            let start = Instant::now();
            let mut last_records = 0u64;
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            interval.tick().await; // first tick fires immediately

            loop {
                interval.tick().await;

                let snapshot = counters.snapshot();
                println!(
                    "{}",
                    progress_line(
                        start.elapsed(),
                        snapshot.records_sent - last_records,
                        snapshot.records_sent,
                        snapshot.bytes_sent,
                        total,
                    )
                );
                last_records = snapshot.records_sent;

                if snapshot.records_sent >= total {
                    break;
                }
            }
        });

        Self { handle }
    }

    /// Stop the progress reporter
    pub fn stop(self) {
        self.handle.abort();
    }
}

fn progress_line(elapsed: Duration, rate: u64, sent: u64, bytes: u64, total: u64) -> String {
    let percent = if total > 0 {
        sent as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    format!(
        "[{:6.1}s] {:>10} records/s | {:>10} | {:>12} records ({:5.1}%)",
        elapsed.as_secs_f64(),
        format_number(rate),
        format_bytes(bytes),
        sent,
        percent
    )
}

// =============================================================================
// Summary
// =============================================================================

/// Completion line for one worker
pub fn worker_line(result: &WorkerResult) -> String {
    format!(
        "worker {:>3}: {} records in {:.3}s ({} records/s)",
        result.worker_id,
        result.records,
        result.elapsed.as_secs_f64(),
        format_number(result.records_per_sec() as u64)
    )
}

/// Final overall completion line
pub fn summary_line(report: &DispatchReport) -> String {
    let secs = report.elapsed.as_secs_f64();
    let bytes_per_sec = if secs > 0.0 {
        report.total_bytes() as f64 / secs
    } else {
        0.0
    };
    format!(
        "───────── {} records | {} | {:.2}s | {} records/s | {}/s",
        report.total_records(),
        format_bytes(report.total_bytes()),
        secs,
        format_number(report.records_per_sec() as u64),
        format_bytes(bytes_per_sec as u64)
    )
}

/// Print per-worker completion lines followed by the summary
pub fn print_report(report: &DispatchReport) {
    for worker in &report.workers {
        println!("{}", worker_line(worker));
    }
    println!("{}", summary_line(report));
}
