//! Protocol error types
//!
//! Errors that can occur when encoding or decoding syslog priorities.

use thiserror::Error;

/// Errors that can occur during protocol operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Facility name or code has no entry in the facility table
    #[error("unknown facility '{0}'")]
    UnknownFacility(String),

    /// Severity name or code has no entry in the severity table
    #[error("unknown severity '{0}'")]
    UnknownSeverity(String),

    /// Priority string is not of the form `facility.severity`
    #[error("malformed priority '{0}': expected facility.severity")]
    MalformedPriority(String),

    /// Priority integer is negative or not a number
    #[error("invalid priority {0}")]
    InvalidPriority(String),
}

impl ProtocolError {
    /// Create an unknown facility error
    #[inline]
    pub fn unknown_facility(name: impl Into<String>) -> Self {
        Self::UnknownFacility(name.into())
    }

    /// Create an unknown severity error
    #[inline]
    pub fn unknown_severity(name: impl Into<String>) -> Self {
        Self::UnknownSeverity(name.into())
    }

    /// Create a malformed priority error
    #[inline]
    pub fn malformed(input: impl Into<String>) -> Self {
        Self::MalformedPriority(input.into())
    }

    /// Create an invalid priority error
    #[inline]
    pub fn invalid(value: impl ToString) -> Self {
        Self::InvalidPriority(value.to_string())
    }

    /// Check if this error came from resolving an integer or name against
    /// the facility/severity tables (as opposed to a syntax problem)
    pub fn is_lookup_error(&self) -> bool {
        matches!(self, Self::UnknownFacility(_) | Self::UnknownSeverity(_))
    }
}
