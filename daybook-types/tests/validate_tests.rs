use daybook_types::{ValidationError, validate};

// ── non_negative ─────────────────────────────────────────────────

#[test]
fn zero_is_allowed() {
    assert!(validate::non_negative("id", 0).is_ok());
}

#[test]
fn positive_is_allowed() {
    assert!(validate::non_negative("id", i64::MAX).is_ok());
}

#[test]
fn negative_is_a_range_error() {
    let err = validate::non_negative("id", -1).unwrap_err();
    assert_eq!(err, ValidationError::Range { field: "id", value: -1 });
}

// ── max_len ──────────────────────────────────────────────────────

#[test]
fn name_of_exactly_max_length_passes() {
    let name = "a".repeat(validate::NAME_MAX);
    assert!(validate::max_len("name", &name, validate::NAME_MAX).is_ok());
}

#[test]
fn name_one_over_max_fails() {
    let name = "a".repeat(validate::NAME_MAX + 1);
    let err = validate::max_len("name", &name, validate::NAME_MAX).unwrap_err();
    assert_eq!(
        err,
        ValidationError::Length {
            field: "name",
            max: 100,
            len: 101
        }
    );
}

#[test]
fn length_counts_characters_not_bytes() {
    // 100 multi-byte characters are within a 100-character bound
    let name = "ü".repeat(validate::NAME_MAX);
    assert!(validate::max_len("name", &name, validate::NAME_MAX).is_ok());
}

#[test]
fn optional_none_passes_max_len() {
    assert!(validate::max_len_opt("notes", None, validate::DESCRIPTION_MAX).is_ok());
}

#[test]
fn optional_too_long_fails_max_len() {
    let notes = "x".repeat(validate::DESCRIPTION_MAX + 1);
    assert!(validate::max_len_opt("notes", Some(&notes), validate::DESCRIPTION_MAX).is_err());
}

// ── required ─────────────────────────────────────────────────────

#[test]
fn non_blank_is_allowed() {
    assert!(validate::required("name", "Ada").is_ok());
}

#[test]
fn empty_is_rejected() {
    let err = validate::required("name", "").unwrap_err();
    assert_eq!(err, ValidationError::Required { field: "name" });
}

#[test]
fn whitespace_only_is_rejected() {
    assert!(validate::required("name", " \t\n ").is_err());
}

// ── Error accessors & messages ───────────────────────────────────

#[test]
fn field_accessor_names_the_offender() {
    let err = validate::non_negative("projectId", -5).unwrap_err();
    assert_eq!(err.field(), "projectId");
}

#[test]
fn messages_are_stable() {
    let err = validate::non_negative("id", -1).unwrap_err();
    assert_eq!(err.to_string(), "id must not be negative (got -1)");

    let err = validate::required("name", "").unwrap_err();
    assert_eq!(err.to_string(), "name is required and must not be blank");
}

// ── Properties ───────────────────────────────────────────────────

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn strings_within_the_bound_always_pass(s in "[a-zA-Z0-9 ]{0,100}") {
            prop_assert!(validate::max_len("name", &s, validate::NAME_MAX).is_ok());
        }

        #[test]
        fn strings_past_the_bound_always_fail(s in "[a-zA-Z0-9]{101,160}") {
            prop_assert!(validate::max_len("name", &s, validate::NAME_MAX).is_err());
        }

        #[test]
        fn all_non_negative_values_pass(v in 0i64..) {
            prop_assert!(validate::non_negative("id", v).is_ok());
        }

        #[test]
        fn all_negative_values_fail(v in i64::MIN..0) {
            let err = validate::non_negative("id", v).unwrap_err();
            prop_assert_eq!(err, ValidationError::Range { field: "id", value: v });
        }
    }
}
