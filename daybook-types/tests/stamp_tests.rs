use chrono::{TimeZone, Utc};
use daybook_types::AuditStamp;

// ── Construction ─────────────────────────────────────────────────

#[test]
fn new_stamp_has_no_modification() {
    let stamp = AuditStamp::new();
    assert!(stamp.modified_at().is_none());
}

#[test]
fn default_is_new() {
    let stamp = AuditStamp::default();
    assert!(stamp.modified_at().is_none());
}

#[test]
fn restored_keeps_timestamps_verbatim() {
    let created = Utc.with_ymd_and_hms(2021, 3, 14, 9, 26, 53).unwrap();
    let modified = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
    let stamp = AuditStamp::restored(created, Some(modified));
    assert_eq!(stamp.created_at(), created);
    assert_eq!(stamp.modified_at(), Some(modified));
}

#[test]
fn restored_modification_may_be_absent() {
    let created = Utc.with_ymd_and_hms(2021, 3, 14, 9, 26, 53).unwrap();
    let stamp = AuditStamp::restored(created, None);
    assert!(stamp.modified_at().is_none());
}

// ── touch ────────────────────────────────────────────────────────

#[test]
fn touch_sets_modification_from_none() {
    let mut stamp = AuditStamp::new();
    stamp.touch();
    assert!(stamp.modified_at().is_some());
}

#[test]
fn touch_never_moves_creation() {
    let mut stamp = AuditStamp::new();
    let created = stamp.created_at();
    for _ in 0..10 {
        stamp.touch();
    }
    assert_eq!(stamp.created_at(), created);
}

#[test]
fn repeated_touches_strictly_increase() {
    let mut stamp = AuditStamp::new();
    stamp.touch();
    let first = stamp.modified_at().unwrap();
    stamp.touch();
    let second = stamp.modified_at().unwrap();
    assert!(second > first);
}

#[test]
fn touch_is_monotonic_past_a_future_modification_time() {
    // Restored with a far-future modification time: the wall clock cannot
    // catch up, so touch must bump instead of going backwards.
    let created = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    let future = Utc.with_ymd_and_hms(2120, 1, 1, 0, 0, 0).unwrap();
    let mut stamp = AuditStamp::restored(created, Some(future));
    stamp.touch();
    assert!(stamp.modified_at().unwrap() > future);
}

#[test]
fn created_not_after_modified() {
    let mut stamp = AuditStamp::new();
    stamp.touch();
    assert!(stamp.created_at() <= stamp.modified_at().unwrap());
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn serialization_roundtrip() {
    let mut stamp = AuditStamp::new();
    stamp.touch();
    let json = serde_json::to_string(&stamp).unwrap();
    let parsed: AuditStamp = serde_json::from_str(&json).unwrap();
    assert_eq!(stamp, parsed);
}
