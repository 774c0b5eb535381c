//! Transport session - one worker, one connection
//!
//! # Lifecycle
//!
//! The session's states map onto ownership:
//!
//! - **Unconnected**: no `TransportSession` exists yet
//! - **Connected**: [`TransportSession::connect`] returned a session
//! - **Sending**: [`TransportSession::send`] consumed the session and loops
//! - **Closed**: `send` returned; the connection was released on every path
//!   (quota reached, write error, or the task being aborted)
//!
//! # Wire framing
//!
//! - **TCP**: rendered records are written back to back; each already ends
//!   in `\n`
//! - **UDP**: one record per datagram

use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::{Duration, Instant};

use tokio::io::AsyncWriteExt;
use tokio::net::{TcpStream, UdpSocket, lookup_host};
use tracing::{debug, info};

use crate::error::{ClientError, Result};
use crate::plan::SendPlan;
use crate::stats::SendCounters;
use crate::transport::{Destination, Transport};

/// Headroom reserved in the record buffer beyond the payload
const RECORD_OVERHEAD: usize = 256;

// =============================================================================
// Connection
// =============================================================================

/// Socket owned by exactly one session
enum Connection {
    Tcp(TcpStream),
    Udp(UdpSocket),
}

impl Connection {
    async fn open(address: &str, transport: Transport) -> io::Result<Self> {
        match transport {
            Transport::Tcp => {
                let stream = TcpStream::connect(address).await?;
                stream.set_nodelay(true)?;
                Ok(Self::Tcp(stream))
            }
            Transport::Udp => {
                let remote = lookup_host(address).await?.next().ok_or_else(|| {
                    io::Error::new(io::ErrorKind::NotFound, "address resolved to nothing")
                })?;
                let local: SocketAddr = if remote.is_ipv4() {
                    (Ipv4Addr::UNSPECIFIED, 0).into()
                } else {
                    (Ipv6Addr::UNSPECIFIED, 0).into()
                };
                let socket = UdpSocket::bind(local).await?;
                socket.connect(remote).await?;
                Ok(Self::Udp(socket))
            }
            Transport::Tls => Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "tls transport is not implemented",
            )),
        }
    }

    async fn write_record(&mut self, record: &[u8]) -> io::Result<()> {
        match self {
            Self::Tcp(stream) => stream.write_all(record).await,
            Self::Udp(socket) => {
                let sent = socket.send(record).await?;
                if sent != record.len() {
                    return Err(io::Error::new(
                        io::ErrorKind::WriteZero,
                        format!("datagram truncated: sent {} of {} bytes", sent, record.len()),
                    ));
                }
                Ok(())
            }
        }
    }

    async fn close(self) -> io::Result<()> {
        match self {
            Self::Tcp(mut stream) => {
                stream.flush().await?;
                stream.shutdown().await
            }
            Self::Udp(_) => Ok(()),
        }
    }

    fn local_addr(&self) -> io::Result<SocketAddr> {
        match self {
            Self::Tcp(stream) => stream.local_addr(),
            Self::Udp(socket) => socket.local_addr(),
        }
    }
}

/// Keeps `workers_active` balanced however the send loop exits
struct ActiveGuard<'a> {
    counters: &'a SendCounters,
    completed: bool,
}

impl<'a> ActiveGuard<'a> {
    fn new(counters: &'a SendCounters) -> Self {
        counters.worker_connected();
        Self {
            counters,
            completed: false,
        }
    }
}

impl Drop for ActiveGuard<'_> {
    fn drop(&mut self) {
        self.counters.worker_closed(self.completed);
    }
}

// =============================================================================
// Session
// =============================================================================

/// Outcome of one worker's send loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerResult {
    /// 1-based worker identifier
    pub worker_id: usize,
    /// Records written
    pub records: u64,
    /// Bytes written
    pub bytes: u64,
    /// Wall-clock time from the first write until the connection closed
    pub elapsed: Duration,
}

impl WorkerResult {
    /// Records per second over `elapsed`
    pub fn records_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.records as f64 / secs
        } else {
            0.0
        }
    }
}

/// A connected worker
pub struct TransportSession {
    worker_id: usize,
    address: String,
    transport: Transport,
    connection: Connection,
}

impl TransportSession {
    /// Dial the destination
    ///
    /// # Errors
    ///
    /// `UnsupportedTransport` for TLS (no dial is attempted), `Connect` if
    /// the dial fails. Neither is retried.
    pub async fn connect(
        worker_id: usize,
        destination: &Destination,
        transport: Transport,
    ) -> Result<Self> {
        let transport = transport.ensure_supported()?;
        let address = destination.address();

        debug!(worker_id, address = %address, transport = %transport, "dialing");

        let connection = Connection::open(&address, transport)
            .await
            .map_err(|e| ClientError::connect(worker_id, address.as_str(), transport, e))?;

        Ok(Self {
            worker_id,
            address,
            transport,
            connection,
        })
    }

    /// Worker identifier
    pub fn worker_id(&self) -> usize {
        self.worker_id
    }

    /// Transport in use
    pub fn transport(&self) -> Transport {
        self.transport
    }

    /// Dialed address
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Local socket address of the connection
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.connection.local_addr()
    }

    /// Write `quota` records, then close the connection
    ///
    /// Each record is rendered with a fresh timestamp. The completion line
    /// is logged once, after the connection is closed.
    ///
    /// # Errors
    ///
    /// `Write` on the first failed write or close; the remaining quota is
    /// abandoned.
    pub async fn send(
        self,
        plan: &SendPlan,
        quota: u64,
        counters: &SendCounters,
    ) -> Result<WorkerResult> {
        let Self {
            worker_id,
            mut connection,
            ..
        } = self;

        let mut active = ActiveGuard::new(counters);
        let start = Instant::now();

        let bytes = match send_loop(&mut connection, plan, quota, counters).await {
            Ok(bytes) => bytes,
            Err((sent, e)) => {
                drop(connection);
                return Err(ClientError::write(worker_id, sent, e));
            }
        };

        connection
            .close()
            .await
            .map_err(|e| ClientError::write(worker_id, quota, e))?;

        active.completed = true;
        drop(active);

        let elapsed = start.elapsed();
        info!(
            worker_id,
            records = quota,
            bytes,
            elapsed_ms = elapsed.as_millis() as u64,
            "worker completed"
        );

        Ok(WorkerResult {
            worker_id,
            records: quota,
            bytes,
            elapsed,
        })
    }
}

/// Render and write `quota` records
///
/// On failure returns how many records made it out before the error.
async fn send_loop(
    connection: &mut Connection,
    plan: &SendPlan,
    quota: u64,
    counters: &SendCounters,
) -> std::result::Result<u64, (u64, io::Error)> {
    let mut ts = String::with_capacity(32);
    let mut buf = Vec::with_capacity(plan.payload().len() + RECORD_OVERHEAD);
    let mut bytes = 0u64;

    for sent in 0..quota {
        plan.render_now(&mut ts, &mut buf);
        connection
            .write_record(&buf)
            .await
            .map_err(|e| (sent, e))?;

        let len = buf.len() as u64;
        bytes += len;
        counters.record_sent(len);
    }

    Ok(bytes)
}
