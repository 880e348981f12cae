// crates/shared-kernel/tests/serde_roundtrip.rs
use zipf_shared_kernel::{Occurrences, Percentage};

#[test]
fn occurrences_serialize_transparent() {
    let json = serde_json::to_string(&Occurrences::new(42)).unwrap();
    assert_eq!(json, "42");

    let back: Occurrences = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Occurrences::new(42));
}

#[test]
fn percentage_serialize_transparent() {
    let json = serde_json::to_string(&Percentage::new(33.25)).unwrap();
    assert_eq!(json, "33.25");

    let back: Percentage = serde_json::from_str(&json).unwrap();
    assert_eq!(back.value(), 33.25);
}
