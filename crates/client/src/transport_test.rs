//! Tests for transport selection

use std::net::SocketAddr;

use crate::error::ClientError;
use crate::transport::{DEFAULT_PORT, Destination, Transport};

#[test]
fn test_transport_from_str() {
    assert_eq!("tcp".parse::<Transport>().unwrap(), Transport::Tcp);
    assert_eq!("UDP".parse::<Transport>().unwrap(), Transport::Udp);
    assert_eq!("tls".parse::<Transport>().unwrap(), Transport::Tls);
}

#[test]
fn test_transport_from_str_unknown() {
    let err = "quic".parse::<Transport>().unwrap_err();
    assert!(matches!(err, ClientError::UnknownTransport(name) if name == "quic"));
}

#[test]
fn test_transport_support() {
    assert!(Transport::Tcp.is_supported());
    assert!(Transport::Udp.is_supported());
    assert!(!Transport::Tls.is_supported());

    assert!(Transport::Udp.ensure_supported().is_ok());
    assert!(matches!(
        Transport::Tls.ensure_supported().unwrap_err(),
        ClientError::UnsupportedTransport(Transport::Tls)
    ));
}

#[test]
fn test_transport_default_and_display() {
    assert_eq!(Transport::default(), Transport::Tcp);
    assert_eq!(Transport::Udp.to_string(), "udp");
}

#[test]
fn test_destination_address() {
    let dest = Destination::new("collector.local", DEFAULT_PORT);
    assert_eq!(dest.address(), "collector.local:514");
    assert_eq!(dest.host(), "collector.local");
    assert_eq!(dest.port(), 514);
}

#[test]
fn test_destination_ipv6_is_bracketed() {
    assert_eq!(Destination::new("::1", 1514).address(), "[::1]:1514");
    assert_eq!(Destination::new("[::1]", 1514).address(), "[::1]:1514");
}

#[test]
fn test_destination_from_socket_addr() {
    let addr: SocketAddr = "127.0.0.1:5140".parse().unwrap();
    let dest = Destination::from(addr);
    assert_eq!(dest.to_string(), "127.0.0.1:5140");
}

#[test]
fn test_transport_deserialize() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        transport: Transport,
    }

    let parsed: Wrapper = toml::from_str(r#"transport = "udp""#).unwrap();
    assert_eq!(parsed.transport, Transport::Udp);
    assert!(toml::from_str::<Wrapper>(r#"transport = "quic""#).is_err());
}
