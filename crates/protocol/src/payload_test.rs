//! Tests for payload generation

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::payload::Payload;

#[test]
fn test_random_length() {
    for len in [1, 16, 128, 4096] {
        assert_eq!(Payload::random(len).len(), len);
    }
}

#[test]
fn test_random_alphabet() {
    let payload = Payload::random(2048);
    assert!(payload.as_str().bytes().all(|b| (b'A'..=b'Y').contains(&b)));
}

#[test]
fn test_random_with_seed_is_deterministic() {
    let a = Payload::random_with(&mut StdRng::seed_from_u64(7), 64);
    let b = Payload::random_with(&mut StdRng::seed_from_u64(7), 64);
    assert_eq!(a, b);
}

#[test]
fn test_zero_length() {
    let payload = Payload::random(0);
    assert!(payload.is_empty());
}

#[test]
fn test_clone_shares_text() {
    let payload = Payload::from("shared");
    let copy = payload.clone();
    assert_eq!(copy.as_str(), "shared");
    assert!(std::ptr::eq(payload.as_str(), copy.as_str()));
}
