//! Record timestamps
//!
//! Templates only reserve a hole for the timestamp; the sender stamps each
//! record as it renders it. The style depends on the record format:
//!
//! - BSD: `Jan  5 12:00:00` (legacy) or `2024-01-05T12:00:00Z` (RFC 3339)
//! - IETF: `2024-01-05T12:00:00.123456Z` (always fractional seconds)
//!
//! All styles render UTC.

use std::fmt::Write;

use chrono::{DateTime, SecondsFormat, Utc};

/// Legacy BSD stamp: abbreviated month, space-padded day, time
const LEGACY_FORMAT: &str = "%b %e %H:%M:%S";

/// Textual timestamp style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimestampStyle {
    /// `Mmm dd hh:mm:ss` as in RFC 3164
    #[default]
    Legacy,
    /// RFC 3339 with whole seconds
    Rfc3339,
    /// RFC 3339 with microseconds, as used by RFC 5424 records
    Rfc3339Micros,
}

impl TimestampStyle {
    /// Format a point in time
    pub fn format(self, at: DateTime<Utc>) -> String {
        let mut out = String::with_capacity(32);
        self.write_into(at, &mut out);
        out
    }

    /// Format the current time
    pub fn now(self) -> String {
        self.format(Utc::now())
    }

    /// Append the current time to `out`
    pub fn write_now(self, out: &mut String) {
        self.write_into(Utc::now(), out);
    }

    /// Append a formatted point in time to `out`
    pub fn write_into(self, at: DateTime<Utc>, out: &mut String) {
        match self {
            Self::Legacy => {
                // Writing to a String cannot fail
                let _ = write!(out, "{}", at.format(LEGACY_FORMAT));
            }
            Self::Rfc3339 => out.push_str(&at.to_rfc3339_opts(SecondsFormat::Secs, true)),
            Self::Rfc3339Micros => {
                out.push_str(&at.to_rfc3339_opts(SecondsFormat::Micros, true))
            }
        }
    }

    /// Get the string name of this style
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Rfc3339 => "rfc3339",
            Self::Rfc3339Micros => "rfc3339-micros",
        }
    }
}

impl std::fmt::Display for TimestampStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
