//! Transport selection and destination address

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ClientError;

/// Default syslog port
pub const DEFAULT_PORT: u16 = 514;

/// Socket type used to reach the collector
///
/// Parsed from flags through `FromStr` (case-insensitive) and from config
/// files through serde (lowercase).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// Stream: records are newline-terminated on one connection
    #[default]
    Tcp,
    /// Datagram: one record per packet
    Udp,
    /// Recognized but not implemented; rejected before dialing
    Tls,
}

impl Transport {
    /// Get the string name of this transport
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tcp => "tcp",
            Self::Udp => "udp",
            Self::Tls => "tls",
        }
    }

    /// Check if this transport can be dialed
    #[inline]
    pub const fn is_supported(self) -> bool {
        matches!(self, Self::Tcp | Self::Udp)
    }

    /// Fail with `UnsupportedTransport` unless this transport can be dialed
    pub fn ensure_supported(self) -> crate::Result<Self> {
        if self.is_supported() {
            Ok(self)
        } else {
            Err(ClientError::UnsupportedTransport(self))
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Transport {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tcp" => Ok(Self::Tcp),
            "udp" => Ok(Self::Udp),
            "tls" => Ok(Self::Tls),
            _ => Err(ClientError::UnknownTransport(s.to_string())),
        }
    }
}

/// Collector host and port
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    host: String,
    port: u16,
}

impl Destination {
    /// Create a destination
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Host name or IP literal
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port
    pub fn port(&self) -> u16 {
        self.port
    }

    /// `host:port` suitable for dialing (IPv6 literals are bracketed)
    pub fn address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address())
    }
}

impl From<std::net::SocketAddr> for Destination {
    fn from(addr: std::net::SocketAddr) -> Self {
        Self::new(addr.ip().to_string(), addr.port())
    }
}
