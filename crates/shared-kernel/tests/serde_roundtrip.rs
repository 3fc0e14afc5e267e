// crates/shared-kernel/tests/serde_roundtrip.rs
use dirsizer_shared_kernel::{FileCount, FileSize};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Wrapper {
    count: FileCount,
    size: FileSize,
}

#[test]
fn json_is_transparent() {
    let original = Wrapper { count: FileCount::from(42), size: FileSize::from(2048) };
    let json = serde_json::to_string(&original).expect("serializes");
    assert_eq!(json, r#"{"count":42,"size":2048}"#);
    let decoded: Wrapper = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, original);
}
