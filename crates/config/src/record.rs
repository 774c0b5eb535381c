//! Record configuration
//!
//! Describes the records a run sends. [`RecordConfig::to_spec`] turns it
//! into the immutable [`RecordSpec`] the senders share.

use serde::Deserialize;

use loggen_protocol::{
    BsdFields, DEFAULT_MESSAGE_LENGTH, IETF_VERSION, IetfFields, NIL_VALUE, Priority,
    RecordFormat, RecordSpec,
};

use crate::error::Result;

/// Default priority, `local0.info`
pub const DEFAULT_PRIORITY: &str = "local0.info";

/// Default BSD tag
pub const DEFAULT_TAG: &str = "TAG";

/// Default IETF APP-NAME
pub const DEFAULT_APP_NAME: &str = "loggen";

/// Record layout selected in the config file
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    /// RFC 3164 (default)
    #[default]
    Bsd,
    /// RFC 5424
    Ietf,
}

/// `[record.bsd]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BsdConfig {
    /// Program tag
    pub tag: String,

    /// Append `[pid]` to the tag
    pub pid: bool,

    /// RFC 3339 timestamps instead of `Jan _2 15:04:05`
    pub rfc3339: bool,
}

impl Default for BsdConfig {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG.into(),
            pid: true,
            rfc3339: false,
        }
    }
}

/// `[record.ietf]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IetfConfig {
    /// Protocol version
    pub version: u8,

    /// APP-NAME
    pub app_name: String,

    /// Write the process ID in PROCID
    pub proc_id: bool,

    /// MSGID
    pub msg_id: String,

    /// STRUCTURED-DATA, written verbatim
    pub structured_data: String,
}

impl Default for IetfConfig {
    fn default() -> Self {
        Self {
            version: IETF_VERSION,
            app_name: DEFAULT_APP_NAME.into(),
            proc_id: true,
            msg_id: NIL_VALUE.into(),
            structured_data: NIL_VALUE.into(),
        }
    }
}

/// What every record looks like
///
/// # Example
///
/// ```toml
/// [record]
/// format = "ietf"
/// priority = "daemon.warn"
/// message_length = 256
///
/// [record.ietf]
/// app_name = "billing"
/// msg_id = "ID47"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RecordConfig {
    /// Record layout
    /// Default: bsd
    pub format: FormatKind,

    /// Priority as `facility.severity`
    /// Default: local0.info
    pub priority: String,

    /// Hostname written into records
    /// Default: the system hostname
    pub hostname: Option<String>,

    /// Length of the random message body
    /// Default: 128
    pub message_length: usize,

    /// BSD-only fields
    pub bsd: BsdConfig,

    /// IETF-only fields
    pub ietf: IetfConfig,
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            format: FormatKind::Bsd,
            priority: DEFAULT_PRIORITY.into(),
            hostname: None,
            message_length: DEFAULT_MESSAGE_LENGTH,
            bsd: BsdConfig::default(),
            ietf: IetfConfig::default(),
        }
    }
}

impl RecordConfig {
    /// Parse the configured priority
    pub fn priority(&self) -> Result<Priority> {
        Ok(self.priority.parse()?)
    }

    /// Build the record spec
    ///
    /// `fallback_hostname` is used when no hostname is configured.
    pub fn to_spec(&self, fallback_hostname: &str) -> Result<RecordSpec> {
        let priority = self.priority()?;
        let hostname = self.hostname.as_deref().unwrap_or(fallback_hostname);

        let format = match self.format {
            FormatKind::Bsd => RecordFormat::Bsd(
                BsdFields::new(self.bsd.tag.as_str())
                    .include_pid(self.bsd.pid)
                    .rfc3339(self.bsd.rfc3339),
            ),
            FormatKind::Ietf => RecordFormat::Ietf(
                IetfFields::new(self.ietf.app_name.as_str())
                    .version(self.ietf.version)
                    .include_proc_id(self.ietf.proc_id)
                    .msg_id(self.ietf.msg_id.as_str())
                    .structured_data(self.ietf.structured_data.as_str()),
            ),
        };

        Ok(RecordSpec::new(priority, hostname, format))
    }
}
