use daybook_model::{
    Account, Contact, GenericEntity, LinkedEntity, LinkedSlot, Organization, SubAccount, User,
};
use pretty_assertions::assert_eq;

fn user_with_id(id: i64) -> User {
    let mut user = User::new();
    user.set_id(id).unwrap();
    user.set_username("ada").unwrap();
    user
}

fn contact_with_id(id: i64) -> Contact {
    let mut contact = Contact::new();
    contact.set_id(id).unwrap();
    contact.set_name("Ada Lovelace").unwrap();
    contact
}

// ── Exactly one active variant ───────────────────────────────────

#[test]
fn setting_a_user_populates_only_the_user_kind() {
    let mut slot = LinkedSlot::empty();
    let user = user_with_id(7);
    slot.set(Some(LinkedEntity::User(user.clone())));

    assert_eq!(slot.user(), Some(&user));
    assert!(slot.contact().is_none());
    assert!(slot.organization().is_none());
    assert!(slot.sub_account().is_none());
    assert!(slot.generic().is_none());
}

#[test]
fn switching_kinds_clears_the_previous_one() {
    let mut slot = LinkedSlot::empty();
    slot.set(Some(LinkedEntity::User(user_with_id(7))));
    slot.set(Some(LinkedEntity::Contact(contact_with_id(9))));

    assert!(slot.user().is_none());
    assert_eq!(slot.contact().map(Contact::id), Some(9));
    assert_eq!(slot.ref_id(), 9);
    assert_eq!(slot.ref_type(), Some("Contact"));
}

#[test]
fn setting_none_clears_everything() {
    let mut slot = LinkedSlot::empty();
    slot.set(Some(LinkedEntity::User(user_with_id(7))));
    slot.set(None);

    assert!(slot.is_empty());
    assert!(slot.get().is_none());
    assert_eq!(slot.ref_id(), 0);
    assert_eq!(slot.ref_type(), None);
}

// ── Derived projections ──────────────────────────────────────────

#[test]
fn ref_id_and_ref_type_follow_the_payload() {
    let mut slot = LinkedSlot::empty();

    slot.set(Some(LinkedEntity::User(user_with_id(3))));
    assert_eq!((slot.ref_id(), slot.ref_type()), (3, Some("User")));

    let mut org = Organization::new();
    org.set_id(12).unwrap();
    org.set_name("Acme").unwrap();
    slot.set(Some(LinkedEntity::Organization(org)));
    assert_eq!((slot.ref_id(), slot.ref_type()), (12, Some("Organization")));

    let mut sub = SubAccount::new();
    sub.set_id(44).unwrap();
    sub.set_name("backup").unwrap();
    slot.set(Some(LinkedEntity::SubAccount(sub)));
    assert_eq!((slot.ref_id(), slot.ref_type()), (44, Some("SubAccount")));
}

#[test]
fn generic_payload_uses_its_own_kind() {
    let mut slot = LinkedSlot::empty();
    slot.set(Some(LinkedEntity::Generic(GenericEntity::new(21, "Device"))));
    assert_eq!(slot.ref_id(), 21);
    assert_eq!(slot.ref_type(), Some("Device"));
}

#[test]
fn prebuilt_payload_is_consistent_immediately() {
    // The full-construction path never calls the setter; derived
    // projections must still agree with the payload.
    let slot = LinkedSlot::with(LinkedEntity::Contact(contact_with_id(5)));
    assert_eq!(slot.ref_id(), 5);
    assert_eq!(slot.ref_type(), Some("Contact"));
    assert!(slot.contact().is_some());
}

// ── Through the owning account ───────────────────────────────────

#[test]
fn account_setter_replaces_the_slot_and_stamps_modification() {
    let mut account = Account::new();
    assert!(account.modified_at().is_none());

    account.set_linked(Some(LinkedEntity::User(user_with_id(7))));
    assert!(account.modified_at().is_some());
    assert_eq!(account.linked().ref_id(), 7);
    assert_eq!(account.linked().ref_type(), Some("User"));

    account.set_linked(None);
    assert!(account.linked().is_empty());
    assert_eq!(account.linked().ref_id(), 0);
}
