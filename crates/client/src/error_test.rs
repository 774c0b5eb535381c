//! Tests for client error types

use std::io;

use crate::error::ClientError;
use crate::transport::Transport;

#[test]
fn test_unsupported_transport_display() {
    let err = ClientError::UnsupportedTransport(Transport::Tls);
    assert_eq!(err.to_string(), "transport 'tls' is not supported");
    assert!(!err.is_transport_error());
}

#[test]
fn test_unknown_transport_display() {
    let err = ClientError::UnknownTransport("sctp".into());
    assert_eq!(
        err.to_string(),
        "unknown transport 'sctp': expected tcp, udp or tls"
    );
}

#[test]
fn test_connect_display() {
    let err = ClientError::connect(
        3,
        "127.0.0.1:514",
        Transport::Tcp,
        io::Error::new(io::ErrorKind::ConnectionRefused, "refused"),
    );
    let msg = err.to_string();
    assert!(msg.contains("worker 3"));
    assert!(msg.contains("127.0.0.1:514"));
    assert!(msg.contains("tcp"));
    assert!(err.is_transport_error());
}

#[test]
fn test_write_display() {
    let err = ClientError::write(
        1,
        42,
        io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"),
    );
    assert!(err.to_string().contains("after 42 records"));
    assert!(err.is_transport_error());
}

#[test]
fn test_invalid_dispatch_display() {
    let err = ClientError::InvalidDispatch("worker count must be greater than zero");
    assert!(err.to_string().starts_with("invalid dispatch"));
    assert!(!err.is_transport_error());
}
