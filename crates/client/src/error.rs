//! Error types for the senders
//!
//! Every variant is fatal to the run.

use std::io;

use thiserror::Error;

use crate::transport::Transport;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while dispatching records
#[derive(Debug, Error)]
pub enum ClientError {
    // =========================================================================
    // Configuration errors (raised before any dial)
    // =========================================================================
    /// Transport is recognized but has no implementation
    #[error("transport '{0}' is not supported")]
    UnsupportedTransport(Transport),

    /// Transport name is not recognized at all
    #[error("unknown transport '{0}': expected tcp, udp or tls")]
    UnknownTransport(String),

    /// Worker count or quota is zero
    #[error("invalid dispatch: {0}")]
    InvalidDispatch(&'static str),

    // =========================================================================
    // Transport errors
    // =========================================================================
    /// Dialing the destination failed
    #[error("worker {worker_id}: failed to connect to {address} over {transport}: {source}")]
    Connect {
        /// Worker that dialed
        worker_id: usize,
        /// Destination address
        address: String,
        /// Transport in use
        transport: Transport,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Writing a record failed
    #[error("worker {worker_id}: write failed after {sent} records: {source}")]
    Write {
        /// Worker that wrote
        worker_id: usize,
        /// Records successfully written before the failure
        sent: u64,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// A worker task panicked or was cancelled by the runtime
    #[error("worker task failed: {0}")]
    WorkerAborted(String),
}

impl ClientError {
    /// Create a Connect error
    pub fn connect(
        worker_id: usize,
        address: impl Into<String>,
        transport: Transport,
        source: io::Error,
    ) -> Self {
        Self::Connect {
            worker_id,
            address: address.into(),
            transport,
            source,
        }
    }

    /// Create a Write error
    pub fn write(worker_id: usize, sent: u64, source: io::Error) -> Self {
        Self::Write {
            worker_id,
            sent,
            source,
        }
    }

    /// Check if this error came from the network rather than from setup
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Self::Connect { .. } | Self::Write { .. } | Self::WorkerAborted(_)
        )
    }
}
