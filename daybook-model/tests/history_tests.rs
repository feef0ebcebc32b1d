use daybook_model::PreviousValues;
use pretty_assertions::assert_eq;

// ── Recording ────────────────────────────────────────────────────

#[test]
fn new_values_are_appended_in_order() {
    let mut log = PreviousValues::new("password");
    log.record(Some("P1")).unwrap();
    log.record(Some("P2")).unwrap();
    assert_eq!(
        log.values(),
        &[Some("P1".to_owned()), Some("P2".to_owned())]
    );
}

#[test]
fn each_accepted_value_grows_the_log_by_one() {
    let mut log = PreviousValues::new("password");
    for (i, value) in ["a", "b", "c"].iter().enumerate() {
        log.record(Some(value)).unwrap();
        assert_eq!(log.len(), i + 1);
    }
}

#[test]
fn reusing_an_earlier_value_fails() {
    // P1, P2, then P1 again.
    let mut log = PreviousValues::new("password");
    log.record(Some("P1")).unwrap();
    log.record(Some("P2")).unwrap();

    let err = log.record(Some("P1")).unwrap_err();
    assert_eq!(err.role, "password");
    // The rejected write left the log untouched.
    assert_eq!(
        log.values(),
        &[Some("P1".to_owned()), Some("P2".to_owned())]
    );
}

#[test]
fn two_empty_strings_collide() {
    let mut log = PreviousValues::new("password");
    log.record(Some("")).unwrap();
    assert!(log.record(Some("")).is_err());
}

#[test]
fn case_differences_are_distinct_values() {
    let mut log = PreviousValues::new("password");
    log.record(Some("Pw")).unwrap();
    assert!(log.record(Some("pw")).is_ok());
}

#[test]
fn null_markers_are_recorded_and_collide() {
    let mut log = PreviousValues::new("password");
    log.record(None).unwrap();
    assert_eq!(log.values(), &[None]);
    assert!(log.record(None).is_err());
}

#[test]
fn contains_checks_by_content() {
    let mut log = PreviousValues::new("password");
    log.record(Some("hunter2")).unwrap();
    assert!(log.contains(Some("hunter2")));
    assert!(!log.contains(Some("Hunter2")));
    assert!(!log.contains(None));
}

// ── Identity stability ───────────────────────────────────────────

#[test]
fn values_slice_is_identity_stable_across_reads() {
    let mut log = PreviousValues::new("password");
    log.record(Some("a")).unwrap();
    let first = log.values().as_ptr();
    let second = log.values().as_ptr();
    assert_eq!(first, second);
}

// ── Reconstruction ───────────────────────────────────────────────

#[test]
fn from_recorded_replays_stored_values() {
    let log = PreviousValues::from_recorded(
        "password",
        vec![Some("P1".to_owned()), None, Some("P2".to_owned())],
    )
    .unwrap();
    assert_eq!(log.len(), 3);
    assert_eq!(log.role(), "password");
}

#[test]
fn from_recorded_rejects_corrupt_duplicates() {
    let result = PreviousValues::from_recorded(
        "password",
        vec![Some("P1".to_owned()), Some("P1".to_owned())],
    );
    assert!(result.is_err());
}

// ── Error message ────────────────────────────────────────────────

#[test]
fn duplicate_error_names_the_role() {
    let mut log = PreviousValues::new("passphrase");
    log.record(Some("x")).unwrap();
    let err = log.record(Some("x")).unwrap_err();
    assert_eq!(err.to_string(), "the passphrase value has already been used");
}
