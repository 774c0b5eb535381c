//! Send counters shared across workers
//!
//! Workers bump these after every write; readers (progress output, tests)
//! take snapshots. Relaxed ordering is enough since nothing synchronizes
//! on the values.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters shared by all workers of a dispatch
#[derive(Debug, Default)]
pub struct SendCounters {
    /// Records written
    pub records_sent: AtomicU64,

    /// Bytes written
    pub bytes_sent: AtomicU64,

    /// Workers with an open connection
    pub workers_active: AtomicU64,

    /// Workers that finished their quota
    pub workers_completed: AtomicU64,
}

impl SendCounters {
    /// Create new counters
    pub const fn new() -> Self {
        Self {
            records_sent: AtomicU64::new(0),
            bytes_sent: AtomicU64::new(0),
            workers_active: AtomicU64::new(0),
            workers_completed: AtomicU64::new(0),
        }
    }

    /// Record one written record
    #[inline]
    pub fn record_sent(&self, bytes: u64) {
        self.records_sent.fetch_add(1, Ordering::Relaxed);
        self.bytes_sent.fetch_add(bytes, Ordering::Relaxed);
    }

    /// Record a worker connecting
    #[inline]
    pub fn worker_connected(&self) {
        self.workers_active.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a worker closing its connection
    #[inline]
    pub fn worker_closed(&self, completed: bool) {
        self.workers_active.fetch_sub(1, Ordering::Relaxed);
        if completed {
            self.workers_completed.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Get snapshot of all counters
    pub fn snapshot(&self) -> SendSnapshot {
        SendSnapshot {
            records_sent: self.records_sent.load(Ordering::Relaxed),
            bytes_sent: self.bytes_sent.load(Ordering::Relaxed),
            workers_active: self.workers_active.load(Ordering::Relaxed),
            workers_completed: self.workers_completed.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time snapshot of send counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SendSnapshot {
    pub records_sent: u64,
    pub bytes_sent: u64,
    pub workers_active: u64,
    pub workers_completed: u64,
}
