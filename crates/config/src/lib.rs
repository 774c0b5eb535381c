//! Loggen Configuration
//!
//! TOML-based configuration loading with sensible defaults.
//! Only the destination host has no default; everything else can be left
//! out, and the CLI can override any single value afterwards.
//!
//! # Parsing
//!
//! Use the `FromStr` trait to parse configuration:
//!
//! ```
//! use loggen_config::Config;
//! use std::str::FromStr;
//!
//! let config = Config::from_str("[target]\nhost = \"127.0.0.1\"").unwrap();
//! assert_eq!(config.target.port, 514);
//! ```
//!
//! Parsing checks every value that is present. The host requirement is
//! checked by [`Config::validate`], once CLI overrides are applied.
//!
//! # Example Full Config
//!
//! ```toml
//! [target]
//! host = "127.0.0.1"
//! port = 514
//! transport = "tcp"
//!
//! [record]
//! format = "bsd"
//! priority = "local0.info"
//! message_length = 128
//!
//! [record.bsd]
//! tag = "TAG"
//! pid = true
//!
//! [load]
//! workers = 4
//! count = 1000
//!
//! [log]
//! level = "info"
//! ```

mod error;
mod load;
mod logging;
mod record;
mod target;
mod validation;

use std::fs;
use std::path::Path;
use std::str::FromStr;

pub use error::{ConfigError, Result};
pub use load::LoadConfig;
pub use logging::{LogConfig, LogFormat, LogLevel, LogOutput};
pub use record::{
    BsdConfig, DEFAULT_APP_NAME, DEFAULT_PRIORITY, DEFAULT_TAG, FormatKind, IetfConfig,
    RecordConfig,
};
pub use target::{DEFAULT_PORT, TargetConfig};

use serde::Deserialize;
use validation::HostRequirement;

/// Main configuration structure
///
/// All sections are optional with sensible defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Destination and transport
    pub target: TargetConfig,

    /// Record layout and fields
    pub record: RecordConfig,

    /// Worker count and per-worker record count
    pub load: LoadConfig,

    /// Logging configuration
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or contains invalid TOML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_str(&contents)
    }

    /// Parse configuration from a TOML string
    ///
    /// Prefer using the `FromStr` trait implementation.
    fn parse(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s).map_err(ConfigError::ParseError)?;
        validation::validate_config(&config, HostRequirement::Optional)?;
        Ok(config)
    }

    /// Validate the final configuration
    ///
    /// Call after CLI overrides are applied. Unlike parsing, a missing
    /// destination host is an error here.
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self, HostRequirement::Required)
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
