use chrono::{TimeZone, Utc};
use daybook_model::{Assignment, Contact, Organization, Password, Project};
use daybook_types::ValidationError;
use pretty_assertions::assert_eq;

// ── Mutation tracking ────────────────────────────────────────────

#[test]
fn fresh_entity_is_unmodified() {
    let contact = Contact::new();
    assert!(contact.modified_at().is_none());
}

#[test]
fn every_accepted_setter_stamps_modification() {
    let mut contact = Contact::new();
    contact.set_name("Ada").unwrap();
    let after_name = contact.modified_at().unwrap();

    contact.set_email(Some("ada@example.com".to_owned()));
    let after_email = contact.modified_at().unwrap();

    assert!(after_email > after_name);
}

#[test]
fn writing_the_same_value_still_stamps() {
    // No dirty-check short-circuit: downstream behavior depends on
    // "a setter ran", not on the value changing.
    let mut contact = Contact::new();
    contact.set_name("Ada").unwrap();
    let first = contact.modified_at().unwrap();

    contact.set_name("Ada").unwrap();
    let second = contact.modified_at().unwrap();
    assert!(second > first);
}

#[test]
fn creation_time_survives_any_number_of_setters() {
    let mut contact = Contact::new();
    let created = contact.created_at();
    for i in 0..20 {
        contact.set_name(format!("name-{i}")).unwrap();
        contact.set_phone(Some(format!("555-{i:04}")));
    }
    assert_eq!(contact.created_at(), created);
}

// ── Atomic rejection ─────────────────────────────────────────────

#[test]
fn negative_id_is_rejected_before_any_change() {
    let mut contact = Contact::new();
    let err = contact.set_id(-1).unwrap_err();

    assert_eq!(err, ValidationError::Range { field: "id", value: -1 });
    assert_eq!(contact.id(), 0); // prior value intact
    assert!(contact.modified_at().is_none()); // no stamp either
}

#[test]
fn name_over_100_chars_is_rejected_and_state_unchanged() {
    let mut contact = Contact::new();
    contact.set_name("Ada").unwrap();
    let stamped = contact.modified_at();

    let long = "x".repeat(101);
    let err = contact.set_name(long).unwrap_err();
    assert!(matches!(err, ValidationError::Length { max: 100, len: 101, .. }));
    assert_eq!(contact.name(), "Ada");
    assert_eq!(contact.modified_at(), stamped);
}

#[test]
fn name_of_exactly_100_chars_is_accepted() {
    let mut contact = Contact::new();
    contact.set_name("y".repeat(100)).unwrap();
    assert_eq!(contact.name().len(), 100);
}

#[test]
fn blank_name_is_rejected() {
    let mut organization = Organization::new();
    let err = organization.set_name("   ").unwrap_err();
    assert_eq!(err, ValidationError::Required { field: "name" });
}

#[test]
fn description_over_1000_chars_is_rejected() {
    let mut project = Project::new();
    let err = project.set_description(Some("d".repeat(1001))).unwrap_err();
    assert!(matches!(err, ValidationError::Length { max: 1000, .. }));
}

// ── Completion clearing ──────────────────────────────────────────

#[test]
fn uncompleting_clears_the_completion_date_in_the_same_call() {
    let done_at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

    let mut assignment = Assignment::new();
    assignment.set_title("Ship it").unwrap();
    assignment.set_completed(true);
    assignment.set_completed_at(Some(done_at));
    assert_eq!(assignment.completed_at(), Some(done_at));

    assignment.set_completed(false);
    assert!(!assignment.completed());
    assert!(assignment.completed_at().is_none());
}

#[test]
fn recompleting_does_not_resurrect_the_old_date() {
    let done_at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

    let mut project = Project::new();
    project.set_name("Engine").unwrap();
    project.set_completed(true);
    project.set_completed_at(Some(done_at));
    project.set_completed(false);
    project.set_completed(true);

    assert!(project.completed());
    assert!(project.completed_at().is_none());
}

#[test]
fn setting_completed_true_twice_keeps_the_date() {
    let done_at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

    let mut project = Project::new();
    project.set_completed(true);
    project.set_completed_at(Some(done_at));
    project.set_completed(true);
    assert_eq!(project.completed_at(), Some(done_at));
}

// ── Password history through the setter ──────────────────────────

#[test]
fn password_scenario_p1_p2_then_p1_again() {
    let mut password = Password::new();
    password.set_name("mail").unwrap();

    password.set_secret(Some("P1".to_owned())).unwrap();
    password.set_secret(Some("P2".to_owned())).unwrap();
    assert_eq!(
        password.previous().values(),
        &[Some("P1".to_owned()), Some("P2".to_owned())]
    );

    let err = password.set_secret(Some("P1".to_owned())).unwrap_err();
    assert_eq!(err.role, "password");
    // Rejected atomically: current secret and history both unchanged.
    assert_eq!(password.secret(), Some("P2"));
    assert_eq!(password.previous().len(), 2);
}

#[test]
fn rejected_secret_does_not_stamp_modification() {
    let mut password = Password::new();
    password.set_secret(Some("P1".to_owned())).unwrap();
    let stamped = password.modified_at();

    assert!(password.set_secret(Some("P1".to_owned())).is_err());
    assert_eq!(password.modified_at(), stamped);
}

// ── Null-collection setter policies ──────────────────────────────

#[test]
fn organization_preserves_a_null_contact_list() {
    let mut organization = Organization::new();
    organization.set_contacts(Some(vec![Contact::new()]));
    organization.set_contacts(None);
    assert!(organization.contacts().is_none());
}

#[test]
fn account_normalizes_a_null_sub_account_list() {
    use daybook_model::{Account, SubAccount};

    let mut account = Account::new();
    account.set_sub_accounts(Some(vec![SubAccount::new()]));
    account.set_sub_accounts(None);
    assert_eq!(account.sub_accounts().map(<[_]>::len), Some(0));
}

// ── Region display ───────────────────────────────────────────────

#[test]
fn region_display_goes_through_the_lookup() {
    use daybook_model::Address;
    use daybook_types::{Region, RegionLookup};

    struct OneState;
    impl RegionLookup for OneState {
        fn region(&self, code: &str) -> Option<Region> {
            (code == "WA").then(|| Region::new("Washington", "WA"))
        }
    }

    let mut address = Address::new();
    assert_eq!(address.region_display(&OneState), None);

    address.set_region_code(Some("WA".to_owned()));
    assert_eq!(
        address.region_display(&OneState).as_deref(),
        Some("Washington (WA)")
    );

    address.set_region_code(Some("ZZ".to_owned()));
    // Unknown codes fall back to the raw code.
    assert_eq!(address.region_display(&OneState).as_deref(), Some("ZZ"));
}
