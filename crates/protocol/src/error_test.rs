//! Tests for protocol error types

use crate::error::ProtocolError;

#[test]
fn test_error_creation_unknown_facility() {
    let err = ProtocolError::unknown_facility("local9");
    assert_eq!(err, ProtocolError::UnknownFacility("local9".into()));
}

#[test]
fn test_error_creation_unknown_severity() {
    let err = ProtocolError::unknown_severity("loud");
    assert_eq!(err, ProtocolError::UnknownSeverity("loud".into()));
}

#[test]
fn test_error_creation_invalid_from_integer() {
    let err = ProtocolError::invalid(-1);
    assert_eq!(err, ProtocolError::InvalidPriority("-1".into()));
}

#[test]
fn test_error_display_unknown_facility() {
    let err = ProtocolError::unknown_facility("local9");
    assert_eq!(err.to_string(), "unknown facility 'local9'");
}

#[test]
fn test_error_display_malformed() {
    let err = ProtocolError::malformed("local0");
    assert_eq!(
        err.to_string(),
        "malformed priority 'local0': expected facility.severity"
    );
}

#[test]
fn test_error_display_invalid() {
    let err = ProtocolError::invalid(-8);
    assert_eq!(err.to_string(), "invalid priority -8");
}

#[test]
fn test_is_lookup_error() {
    assert!(ProtocolError::unknown_facility("x").is_lookup_error());
    assert!(ProtocolError::unknown_severity("x").is_lookup_error());
    assert!(!ProtocolError::malformed("x").is_lookup_error());
    assert!(!ProtocolError::invalid(-1).is_lookup_error());
}
