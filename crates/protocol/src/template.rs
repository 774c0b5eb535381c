//! Record formatting
//!
//! A `RecordSpec` holds every static field of a record. Turning it into a
//! `RecordTemplate` lays those fields out once, leaving exactly two holes:
//! the timestamp, then the message body.
//!
//! # Layouts
//!
//! ```text
//! BSD  (RFC 3164): <PRI>TIMESTAMP HOSTNAME TAG[PID]: MESSAGE\n
//! IETF (RFC 5424): <PRI>VERSION TIMESTAMP HOSTNAME APPNAME PROCID MSGID SD MESSAGE\n
//! ```

use std::fmt;

use crate::IETF_VERSION;
use crate::priority::Priority;
use crate::timestamp::TimestampStyle;

/// RFC 5424 placeholder for an absent field
pub const NIL_VALUE: &str = "-";

/// Record terminator
const LINE_END: &str = "\n";

// =============================================================================
// Format-specific fields
// =============================================================================

/// Fields used only by BSD (RFC 3164) records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BsdFields {
    /// Program tag
    pub tag: String,
    /// Append `[pid]` to the tag
    pub include_pid: bool,
    /// Stamp records with RFC 3339 instead of the legacy format
    pub rfc3339: bool,
}

impl BsdFields {
    /// Create BSD fields with the given tag, PID included, legacy timestamps
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            include_pid: true,
            rfc3339: false,
        }
    }

    /// Set whether the tag carries the process ID
    #[must_use]
    pub fn include_pid(mut self, include: bool) -> Self {
        self.include_pid = include;
        self
    }

    /// Set whether records use RFC 3339 timestamps
    #[must_use]
    pub fn rfc3339(mut self, enabled: bool) -> Self {
        self.rfc3339 = enabled;
        self
    }
}

/// Fields used only by IETF (RFC 5424) records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IetfFields {
    /// Protocol version
    pub version: u8,
    /// APP-NAME
    pub app_name: String,
    /// Write the process ID in PROCID instead of `-`
    pub include_proc_id: bool,
    /// MSGID
    pub msg_id: String,
    /// STRUCTURED-DATA, written verbatim
    pub structured_data: String,
}

impl IetfFields {
    /// Create IETF fields with the given app name and nil MSGID/SD
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            version: IETF_VERSION,
            app_name: app_name.into(),
            include_proc_id: true,
            msg_id: NIL_VALUE.into(),
            structured_data: NIL_VALUE.into(),
        }
    }

    /// Set the protocol version
    #[must_use]
    pub fn version(mut self, version: u8) -> Self {
        self.version = version;
        self
    }

    /// Set whether PROCID carries the process ID
    #[must_use]
    pub fn include_proc_id(mut self, include: bool) -> Self {
        self.include_proc_id = include;
        self
    }

    /// Set the MSGID
    #[must_use]
    pub fn msg_id(mut self, msg_id: impl Into<String>) -> Self {
        self.msg_id = msg_id.into();
        self
    }

    /// Set the STRUCTURED-DATA element(s)
    #[must_use]
    pub fn structured_data(mut self, sd: impl Into<String>) -> Self {
        self.structured_data = sd.into();
        self
    }
}

/// Record format variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordFormat {
    /// RFC 3164
    Bsd(BsdFields),
    /// RFC 5424
    Ietf(IetfFields),
}

impl RecordFormat {
    /// Get the string name of this format
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bsd(_) => "bsd",
            Self::Ietf(_) => "ietf",
        }
    }
}

// =============================================================================
// RecordSpec
// =============================================================================

/// Immutable description of the records a run sends
///
/// The process ID is captured when the spec is created, so every record
/// of the run carries the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSpec {
    priority: Priority,
    hostname: String,
    pid: u32,
    format: RecordFormat,
}

impl RecordSpec {
    /// Describe BSD records
    pub fn bsd(priority: Priority, hostname: impl Into<String>, fields: BsdFields) -> Self {
        Self::new(priority, hostname, RecordFormat::Bsd(fields))
    }

    /// Describe IETF records
    pub fn ietf(priority: Priority, hostname: impl Into<String>, fields: IetfFields) -> Self {
        Self::new(priority, hostname, RecordFormat::Ietf(fields))
    }

    /// Describe records of any format
    pub fn new(priority: Priority, hostname: impl Into<String>, format: RecordFormat) -> Self {
        Self {
            priority,
            hostname: hostname.into(),
            pid: std::process::id(),
            format,
        }
    }

    /// Replace the captured process ID
    #[must_use]
    pub fn with_pid(mut self, pid: u32) -> Self {
        self.pid = pid;
        self
    }

    /// Packed priority
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Hostname written into every record
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Captured process ID
    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Format variant and its fields
    pub fn format(&self) -> &RecordFormat {
        &self.format
    }

    /// Timestamp style senders must use for this format
    pub fn timestamp_style(&self) -> TimestampStyle {
        match &self.format {
            RecordFormat::Bsd(fields) if fields.rfc3339 => TimestampStyle::Rfc3339,
            RecordFormat::Bsd(_) => TimestampStyle::Legacy,
            RecordFormat::Ietf(_) => TimestampStyle::Rfc3339Micros,
        }
    }

    /// Build the template for this spec
    pub fn template(&self) -> RecordTemplate {
        match &self.format {
            RecordFormat::Bsd(fields) => {
                RecordTemplate::bsd(self.priority, &self.hostname, self.pid, fields)
            }
            RecordFormat::Ietf(fields) => {
                RecordTemplate::ietf(self.priority, &self.hostname, self.pid, fields)
            }
        }
    }
}

// =============================================================================
// RecordTemplate
// =============================================================================

/// Prebuilt record with a timestamp hole and a message hole
///
/// Rendering never mutates the template, so one instance can be shared by
/// any number of senders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordTemplate {
    /// Everything before the timestamp
    head: String,
    /// Everything between the timestamp and the message
    middle: String,
}

impl RecordTemplate {
    /// Lay out a BSD record
    pub fn bsd(priority: Priority, hostname: &str, pid: u32, fields: &BsdFields) -> Self {
        let tag = if fields.include_pid {
            format!("{}[{}]", fields.tag, pid)
        } else {
            fields.tag.clone()
        };

        Self {
            head: format!("<{priority}>"),
            middle: format!(" {hostname} {tag}: "),
        }
    }

    /// Lay out an IETF record
    pub fn ietf(priority: Priority, hostname: &str, pid: u32, fields: &IetfFields) -> Self {
        let proc_id = if fields.include_proc_id {
            pid.to_string()
        } else {
            NIL_VALUE.to_string()
        };

        Self {
            head: format!("<{}>{} ", priority, fields.version),
            middle: format!(
                " {} {} {} {} {} ",
                nil_if_empty(hostname),
                nil_if_empty(&fields.app_name),
                proc_id,
                nil_if_empty(&fields.msg_id),
                nil_if_empty(&fields.structured_data),
            ),
        }
    }

    /// Render a record as a string
    pub fn render(&self, timestamp: &str, message: &str) -> String {
        let mut out = String::with_capacity(self.rendered_len(timestamp, message));
        out.push_str(&self.head);
        out.push_str(timestamp);
        out.push_str(&self.middle);
        out.push_str(message);
        out.push_str(LINE_END);
        out
    }

    /// Render a record into a reusable byte buffer
    ///
    /// The buffer is cleared first.
    pub fn render_into(&self, out: &mut Vec<u8>, timestamp: &str, message: &str) {
        out.clear();
        out.reserve(self.rendered_len(timestamp, message));
        out.extend_from_slice(self.head.as_bytes());
        out.extend_from_slice(timestamp.as_bytes());
        out.extend_from_slice(self.middle.as_bytes());
        out.extend_from_slice(message.as_bytes());
        out.extend_from_slice(LINE_END.as_bytes());
    }

    /// Exact byte length of a rendered record
    #[inline]
    pub fn rendered_len(&self, timestamp: &str, message: &str) -> usize {
        self.head.len() + timestamp.len() + self.middle.len() + message.len() + LINE_END.len()
    }
}

impl fmt::Display for RecordTemplate {
    /// Show the template with named holes, without the line terminator
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{timestamp}}{}{{message}}", self.head, self.middle)
    }
}

fn nil_if_empty(value: &str) -> &str {
    if value.is_empty() { NIL_VALUE } else { value }
}
