//! Destination configuration

use serde::Deserialize;

use loggen_client::Transport;
pub use loggen_client::transport::DEFAULT_PORT;

/// Where records are sent
///
/// # Example
///
/// ```toml
/// [target]
/// host = "collector.internal"
/// port = 514
/// transport = "udp"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Destination host name or address, no default
    pub host: Option<String>,

    /// Destination port
    /// Default: 514
    pub port: u16,

    /// Socket type (tcp, udp; tls parses but fails validation)
    /// Default: tcp
    pub transport: Transport,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            host: None,
            port: DEFAULT_PORT,
            transport: Transport::Tcp,
        }
    }
}
