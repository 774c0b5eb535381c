//! Loggen Protocol - syslog record encoding
//!
//! This crate provides everything needed to turn a record description into
//! wire bytes, without touching the network:
//! - `Priority` - packed `facility * 8 + severity` value and its name tables
//! - `RecordSpec` - immutable per-run description of the record (BSD or IETF)
//! - `RecordTemplate` - prebuilt record with timestamp and message holes
//! - `TimestampStyle` - the textual timestamp each format expects
//! - `Payload` - random fixed-length message body shared by all senders
//!
//! # Design Principles
//!
//! - **Build once, render many**: templates and payloads are computed before
//!   fan-out and only read afterwards, so senders share them without locks
//! - **Validate at construction**: a `Priority` always decodes to a known
//!   facility/severity pair
//!
//! # Example
//!
//! ```
//! use loggen_protocol::{BsdFields, Payload, Priority, RecordSpec};
//!
//! let priority: Priority = "local0.info".parse().unwrap();
//! let spec = RecordSpec::bsd(priority, "web-01", BsdFields::new("app")).with_pid(4242);
//! let template = spec.template();
//! let payload = Payload::from("hello");
//!
//! let record = template.render("Jan  5 12:00:00", payload.as_str());
//! assert_eq!(record, "<134>Jan  5 12:00:00 web-01 app[4242]: hello\n");
//! ```

mod error;
mod payload;
mod priority;
mod template;
mod timestamp;

pub use error::ProtocolError;
pub use payload::Payload;
pub use priority::{
    FACILITIES, FACILITY_TABLE_VERSION, Priority, SEVERITIES, facility_code, facility_name,
    list_facilities, list_severities, severity_code, severity_name, translate,
};
pub use template::{BsdFields, IetfFields, NIL_VALUE, RecordFormat, RecordSpec, RecordTemplate};
pub use timestamp::TimestampStyle;

/// Result type for protocol operations
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Highest valid packed priority (`local7.debug`)
pub const MAX_PRIORITY: u8 = 191;

/// Default message body length in bytes
pub const DEFAULT_MESSAGE_LENGTH: usize = 128;

/// RFC 5424 protocol version written after the PRI
pub const IETF_VERSION: u8 = 1;

// Test modules - only compiled during testing
#[cfg(test)]
mod error_test;
#[cfg(test)]
mod payload_test;
