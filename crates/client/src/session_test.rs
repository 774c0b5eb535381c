//! Tests for transport sessions

use loggen_protocol::{BsdFields, IetfFields, Payload, Priority, RecordSpec};

use crate::error::ClientError;
use crate::plan::SendPlan;
use crate::session::TransportSession;
use crate::stats::SendCounters;
use crate::test_support::{closed_port, tcp_receiver, udp_receiver};
use crate::transport::Transport;

fn bsd_plan() -> SendPlan {
    let spec = RecordSpec::bsd(Priority::default(), "testhost", BsdFields::new("app")).with_pid(4242);
    SendPlan::from_spec(&spec, Payload::from("PAYLOAD"))
}

fn ietf_plan() -> SendPlan {
    let fields = IetfFields::new("myapp")
        .include_proc_id(false)
        .msg_id("ID47")
        .structured_data("[x y=\"z\"]");
    let spec = RecordSpec::ietf(Priority::default(), "udphost", fields);
    SendPlan::from_spec(&spec, Payload::from("BODY"))
}

#[tokio::test]
async fn test_tcp_session_sends_quota() {
    let receiver = tcp_receiver().await;
    let counters = SendCounters::new();

    let session = TransportSession::connect(1, &receiver.destination(), Transport::Tcp)
        .await
        .unwrap();
    assert_eq!(session.worker_id(), 1);
    assert_eq!(session.transport(), Transport::Tcp);

    let result = session.send(&bsd_plan(), 25, &counters).await.unwrap();

    assert_eq!(result.worker_id, 1);
    assert_eq!(result.records, 25);
    assert_eq!(receiver.wait_for(25).await, 25);

    let snapshot = counters.snapshot();
    assert_eq!(snapshot.records_sent, 25);
    assert_eq!(snapshot.bytes_sent, result.bytes);
    assert_eq!(snapshot.workers_active, 0);
    assert_eq!(snapshot.workers_completed, 1);
}

#[tokio::test]
async fn test_tcp_records_match_bsd_layout() {
    let receiver = tcp_receiver().await;
    let session = TransportSession::connect(1, &receiver.destination(), Transport::Tcp)
        .await
        .unwrap();
    session
        .send(&bsd_plan(), 3, &SendCounters::new())
        .await
        .unwrap();

    receiver.wait_for(3).await;
    for record in receiver.records() {
        assert!(record.starts_with("<134>"), "{record}");
        assert!(record.ends_with(" testhost app[4242]: PAYLOAD"), "{record}");
    }
}

#[tokio::test]
async fn test_tcp_bytes_account_for_newlines() {
    let receiver = tcp_receiver().await;
    let session = TransportSession::connect(1, &receiver.destination(), Transport::Tcp)
        .await
        .unwrap();
    let result = session
        .send(&bsd_plan(), 5, &SendCounters::new())
        .await
        .unwrap();

    receiver.wait_for(5).await;
    let payload_bytes: u64 = receiver.records().iter().map(|r| r.len() as u64 + 1).sum();
    assert_eq!(result.bytes, payload_bytes);
}

#[tokio::test]
async fn test_udp_session_one_record_per_datagram() {
    let receiver = udp_receiver().await;
    let counters = SendCounters::new();

    let session = TransportSession::connect(2, &receiver.destination(), Transport::Udp)
        .await
        .unwrap();
    assert!(session.local_addr().unwrap().port() > 0);

    let result = session.send(&ietf_plan(), 10, &counters).await.unwrap();
    assert_eq!(result.records, 10);
    assert_eq!(receiver.wait_for(10).await, 10);

    for record in receiver.records() {
        assert!(record.starts_with("<134>1 "), "{record}");
        assert!(
            record.ends_with(" udphost myapp - ID47 [x y=\"z\"] BODY"),
            "{record}"
        );
    }
}

#[tokio::test]
async fn test_tls_rejected_before_dial() {
    // Nothing listens here; TLS must fail on selection, not on connect
    let destination = closed_port().await;
    let err = TransportSession::connect(1, &destination, Transport::Tls)
        .await
        .err()
        .unwrap();
    assert!(matches!(err, ClientError::UnsupportedTransport(Transport::Tls)));
}

#[tokio::test]
async fn test_tcp_connect_refused() {
    let destination = closed_port().await;
    let err = TransportSession::connect(7, &destination, Transport::Tcp)
        .await
        .err()
        .unwrap();

    match err {
        ClientError::Connect {
            worker_id,
            transport,
            ..
        } => {
            assert_eq!(worker_id, 7);
            assert_eq!(transport, Transport::Tcp);
        }
        other => panic!("expected Connect error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_udp_write_error_abandons_quota() {
    let destination = closed_port().await;
    let counters = SendCounters::new();

    let session = TransportSession::connect(3, &destination, Transport::Udp)
        .await
        .unwrap();
    let err = session
        .send(&ietf_plan(), 100_000, &counters)
        .await
        .unwrap_err();

    match err {
        ClientError::Write { worker_id, sent, .. } => {
            assert_eq!(worker_id, 3);
            assert!(sent < 100_000);
            assert_eq!(counters.snapshot().records_sent, sent);
        }
        other => panic!("expected Write error, got {other:?}"),
    }

    let snapshot = counters.snapshot();
    assert_eq!(snapshot.workers_active, 0);
    assert_eq!(snapshot.workers_completed, 0);
}
