//! In-process syslog receivers for tests
//!
//! Bind to an ephemeral loopback port and collect whatever arrives.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::AsyncReadExt;
use tokio::net::{TcpListener, UdpSocket};
use tokio::task::JoinHandle;

use crate::transport::Destination;

/// How long `wait_for` polls before giving up
pub const WAIT_TIMEOUT: Duration = Duration::from_secs(5);

/// State shared between a receiver and its accept/read tasks
#[derive(Default)]
struct Received {
    records: AtomicU64,
    connections: AtomicU64,
    lines: Mutex<Vec<String>>,
}

impl Received {
    fn push(&self, record: &[u8]) {
        self.records.fetch_add(1, Ordering::SeqCst);
        let line = String::from_utf8_lossy(record).into_owned();
        self.lines.lock().unwrap().push(line);
    }
}

/// Common receiver surface
pub struct Receiver {
    addr: SocketAddr,
    received: Arc<Received>,
    handle: JoinHandle<()>,
}

impl Receiver {
    /// Destination pointing at this receiver
    pub fn destination(&self) -> Destination {
        Destination::from(self.addr)
    }

    /// Records received so far
    pub fn count(&self) -> u64 {
        self.received.records.load(Ordering::SeqCst)
    }

    /// Connections accepted so far (TCP only)
    pub fn connections(&self) -> u64 {
        self.received.connections.load(Ordering::SeqCst)
    }

    /// Copy of every record received, without the trailing newline
    pub fn records(&self) -> Vec<String> {
        self.received.lines.lock().unwrap().clone()
    }

    /// Poll until at least `expected` records arrived or the timeout hits
    pub async fn wait_for(&self, expected: u64) -> u64 {
        let deadline = tokio::time::Instant::now() + WAIT_TIMEOUT;
        while self.count() < expected && tokio::time::Instant::now() < deadline {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        // Let any stragglers land so over-delivery is visible too
        tokio::time::sleep(Duration::from_millis(50)).await;
        self.count()
    }
}

impl Drop for Receiver {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// TCP receiver splitting the stream on `\n`
pub async fn tcp_receiver() -> Receiver {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let received = Arc::new(Received::default());

    let shared = Arc::clone(&received);
    let handle = tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            shared.connections.fetch_add(1, Ordering::SeqCst);
            let shared = Arc::clone(&shared);
            tokio::spawn(async move {
                let mut pending = Vec::new();
                let mut chunk = [0u8; 8192];
                loop {
                    let n = match stream.read(&mut chunk).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => n,
                    };
                    pending.extend_from_slice(&chunk[..n]);
                    while let Some(pos) = pending.iter().position(|&b| b == b'\n') {
                        let line: Vec<u8> = pending.drain(..=pos).collect();
                        shared.push(&line[..line.len() - 1]);
                    }
                }
            });
        }
    });

    Receiver {
        addr,
        received,
        handle,
    }
}

/// UDP receiver treating each datagram as one record
pub async fn udp_receiver() -> Receiver {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();
    let received = Arc::new(Received::default());

    let shared = Arc::clone(&received);
    let handle = tokio::spawn(async move {
        let mut buf = vec![0u8; 65536];
        while let Ok((n, _)) = socket.recv_from(&mut buf).await {
            let record = buf[..n].strip_suffix(b"\n").unwrap_or(&buf[..n]);
            shared.push(record);
        }
    });

    Receiver {
        addr,
        received,
        handle,
    }
}

/// Address on loopback with nothing listening
pub async fn closed_port() -> Destination {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Destination::from(addr)
}
