//! Syslog priority codec
//!
//! A priority (PRI) packs a facility and a severity into one integer:
//! `facility * 8 + severity`. The name tables below are the single source
//! of truth for which codes are assigned.
//!
//! # Facility table
//!
//! Codes 13, 14 and 15 are deliberately left unassigned. Earlier tool
//! revisions disagreed on their names (`log1`/`log2`/`clock` versus
//! `audit`/`alert`/`clock`), so no name resolves to them and decoding a
//! priority in the 104..=127 range fails with `UnknownFacility`.

use std::fmt;
use std::str::FromStr;

use crate::error::ProtocolError;
use crate::Result;

/// Revision of the facility/severity tables
///
/// Bump when a name is added, removed or re-coded.
pub const FACILITY_TABLE_VERSION: u32 = 2;

/// Facility names and codes, ascending by code
pub const FACILITIES: &[(&str, u8)] = &[
    ("kernel", 0),
    ("user", 1),
    ("mail", 2),
    ("daemon", 3),
    ("auth", 4),
    ("syslog", 5),
    ("lpr", 6),
    ("news", 7),
    ("uucp", 8),
    ("cron", 9),
    ("authpriv", 10),
    ("ftp", 11),
    ("ntp", 12),
    // 13..=15 reserved
    ("local0", 16),
    ("local1", 17),
    ("local2", 18),
    ("local3", 19),
    ("local4", 20),
    ("local5", 21),
    ("local6", 22),
    ("local7", 23),
];

/// Severity names and codes, ascending by code
pub const SEVERITIES: &[(&str, u8)] = &[
    ("emerg", 0),
    ("alert", 1),
    ("critical", 2),
    ("error", 3),
    ("warn", 4),
    ("notice", 5),
    ("info", 6),
    ("debug", 7),
];

/// Separator between facility and severity in a priority name
const SEPARATOR: char = '.';

/// Look up a facility code by name
pub fn facility_code(name: &str) -> Option<u8> {
    lookup_code(FACILITIES, name)
}

/// Look up a facility name by code
pub fn facility_name(code: u8) -> Option<&'static str> {
    lookup_name(FACILITIES, code)
}

/// Look up a severity code by name
pub fn severity_code(name: &str) -> Option<u8> {
    lookup_code(SEVERITIES, name)
}

/// Look up a severity name by code
pub fn severity_name(code: u8) -> Option<&'static str> {
    lookup_name(SEVERITIES, code)
}

/// All facilities as `(name, code)` pairs sorted ascending by code
pub fn list_facilities() -> Vec<(&'static str, u8)> {
    sorted(FACILITIES)
}

/// All severities as `(name, code)` pairs sorted ascending by code
pub fn list_severities() -> Vec<(&'static str, u8)> {
    sorted(SEVERITIES)
}

fn lookup_code(table: &[(&'static str, u8)], name: &str) -> Option<u8> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|&(_, code)| code)
}

fn lookup_name(table: &[(&'static str, u8)], code: u8) -> Option<&'static str> {
    table
        .iter()
        .find(|(_, candidate)| *candidate == code)
        .map(|&(name, _)| name)
}

fn sorted(table: &[(&'static str, u8)]) -> Vec<(&'static str, u8)> {
    let mut pairs = table.to_vec();
    pairs.sort_by_key(|&(_, code)| code);
    pairs
}

/// Packed syslog priority
///
/// Always in `0..=191` and always decodes to an assigned facility and
/// severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Priority(u8);

impl Priority {
    /// Encode a facility and severity name pair
    ///
    /// # Errors
    ///
    /// Returns `UnknownFacility` or `UnknownSeverity` when a name is not in
    /// its table.
    pub fn encode(facility: &str, severity: &str) -> Result<Self> {
        let facility =
            facility_code(facility).ok_or_else(|| ProtocolError::unknown_facility(facility))?;
        let severity =
            severity_code(severity).ok_or_else(|| ProtocolError::unknown_severity(severity))?;
        Ok(Self(facility * 8 + severity))
    }

    /// Validate a raw packed value
    ///
    /// # Errors
    ///
    /// Fails if the value does not decode to an assigned pair.
    pub fn new(value: u8) -> Result<Self> {
        Self::decode(i64::from(value))?;
        Ok(Self(value))
    }

    /// Decode a packed integer into `(facility, severity)` names
    ///
    /// Not every value in `0..=191` decodes: the reserved facility block
    /// yields `UnknownFacility`.
    ///
    /// # Errors
    ///
    /// `InvalidPriority` for negative input, `UnknownFacility` or
    /// `UnknownSeverity` for unassigned codes.
    pub fn decode(value: i64) -> Result<(&'static str, &'static str)> {
        if value < 0 {
            return Err(ProtocolError::invalid(value));
        }

        let facility_bits = value >> 3;
        let severity_bits = value & 7;

        let facility = u8::try_from(facility_bits)
            .ok()
            .and_then(facility_name)
            .ok_or_else(|| ProtocolError::unknown_facility(facility_bits.to_string()))?;
        let severity = u8::try_from(severity_bits)
            .ok()
            .and_then(severity_name)
            .ok_or_else(|| ProtocolError::unknown_severity(severity_bits.to_string()))?;

        Ok((facility, severity))
    }

    /// Raw packed value
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Facility code (upper five bits)
    #[inline]
    pub const fn facility(self) -> u8 {
        self.0 >> 3
    }

    /// Severity code (lower three bits)
    #[inline]
    pub const fn severity(self) -> u8 {
        self.0 & 7
    }

    /// `facility.severity` name of this priority
    pub fn name(self) -> String {
        match Self::decode(i64::from(self.0)) {
            Ok((facility, severity)) => format!("{facility}{SEPARATOR}{severity}"),
            Err(_) => self.0.to_string(),
        }
    }
}

impl Default for Priority {
    /// `local0.info`
    fn default() -> Self {
        Self(134)
    }
}

impl FromStr for Priority {
    type Err = ProtocolError;

    /// Parse a `facility.severity` string
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split(SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(facility), Some(severity), None) => Self::encode(facility, severity),
            _ => Err(ProtocolError::malformed(s)),
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Translate between the two priority notations
///
/// All-digit input is decoded to `facility.severity`; anything else is
/// parsed as a name pair and encoded to its integer.
///
/// # Errors
///
/// Propagates the decode or encode failure.
pub fn translate(input: &str) -> Result<String> {
    let input = input.trim();

    if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
        let value: i64 = input.parse().map_err(|_| ProtocolError::invalid(input))?;
        let (facility, severity) = Priority::decode(value)?;
        return Ok(format!("{facility}{SEPARATOR}{severity}"));
    }

    input.parse::<Priority>().map(|priority| priority.to_string())
}
