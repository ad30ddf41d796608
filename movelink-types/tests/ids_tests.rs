use movelink_types::SnapshotId;
use pretty_assertions::assert_eq;
use std::time::{SystemTime, UNIX_EPOCH};

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis() as u64
}

#[test]
fn later_copy_orders_after_earlier() {
    let first = SnapshotId::generate();
    let second = SnapshotId::generate();
    assert_ne!(first, second);
    assert!(second > first);
}

#[test]
fn copy_time_is_recoverable() {
    let before = now_millis();
    let id = SnapshotId::generate();
    let after = now_millis();

    let taken = id.taken_at_millis().unwrap();
    assert!(taken >= before && taken <= after, "{before} <= {taken} <= {after}");
}

#[test]
fn foreign_uuid_has_no_copy_time() {
    let json = format!("\"{}\"", uuid::Uuid::new_v4());
    let id: SnapshotId = serde_json::from_str(&json).unwrap();
    assert_eq!(id.taken_at_millis(), None);
}

#[test]
fn serializes_as_display_string() {
    let id = SnapshotId::generate();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{id}\""));
    let back: SnapshotId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn malformed_id_is_rejected() {
    assert!(serde_json::from_str::<SnapshotId>("\"not-a-snapshot\"").is_err());
}
