use rolodex_model::{Account, Address, Organization};
use rolodex_registry::{EntityTypeRegistry, RegistryError};
use rolodex_types::{EntityShape, Linked, LinkedReference, Registrable, TypeDescriptor};
use std::sync::Arc;

fn account(id: i64) -> Arc<Account> {
    Arc::new(Account {
        id,
        name: "Northwind".into(),
        emails: vec![],
        phones: vec![],
        created_at: 1_754_000_000,
    })
}

fn address_owned_by(id: i64) -> Address {
    Address {
        id: 100,
        street: "1 Main St".into(),
        city: "Springfield".into(),
        region: None,
        postal_code: None,
        country: "US".into(),
        owner: LinkedReference::new(id),
    }
}

// A type that is deliberately never in the registry.
#[derive(Debug)]
struct Unregistered;

impl Registrable for Unregistered {
    const NAME: &'static str = "Unregistered";
    const SHAPE: EntityShape = EntityShape::Domain;
}

// ── Successful resolution ────────────────────────────────────────

#[test]
fn resolve_attaches_and_derives_the_type_name() {
    let registry = EntityTypeRegistry::new();
    let mut link = LinkedReference::new(17);
    registry.resolve_link(&mut link, account(17)).unwrap();
    assert!(link.is_resolved());
    assert_eq!(link.linked_entity_type(), Some("Account"));
}

#[test]
fn resolve_accepts_a_matching_wire_supplied_type() {
    let registry = EntityTypeRegistry::new();
    let mut link = LinkedReference::with_type(17, "Account");
    registry.resolve_link(&mut link, account(17)).unwrap();
    assert!(link.is_resolved());
}

#[test]
fn resolve_works_through_the_linked_contract() {
    let registry = EntityTypeRegistry::new();
    let mut record = address_owned_by(17);
    registry.resolve(&mut record, account(17)).unwrap();
    assert_eq!(record.link().linked_entity_type(), Some("Account"));
    assert!(record.link().is_resolved());
}

#[test]
fn resolved_entity_downcasts_to_the_concrete_owner() {
    let registry = EntityTypeRegistry::new();
    let mut link = LinkedReference::new(17);
    registry.resolve_link(&mut link, account(17)).unwrap();
    let owner = link.linked_entity().unwrap();
    let concrete = owner.as_any().downcast_ref::<Account>().unwrap();
    assert_eq!(concrete.id, 17);
}

// ── Rejection paths ──────────────────────────────────────────────

#[test]
fn unregistered_candidate_is_rejected_and_link_stays_unresolved() {
    let registry = EntityTypeRegistry::new();
    let mut link = LinkedReference::new(1);
    let err = registry
        .resolve_link(&mut link, Arc::new(Unregistered))
        .unwrap_err();
    assert!(matches!(err, RegistryError::UnregisteredType(name) if name == "Unregistered"));
    assert!(!link.is_resolved());
    assert_eq!(link.linked_entity_type(), None);
}

#[test]
fn alias_bound_to_another_type_is_a_descriptor_mismatch() {
    let registry = EntityTypeRegistry::new();
    // "Unregistered" gets bound to a different concrete type first.
    registry.register_as("Unregistered", TypeDescriptor::of::<Organization>());
    let mut link = LinkedReference::new(1);
    let err = registry
        .resolve_link(&mut link, Arc::new(Unregistered))
        .unwrap_err();
    assert!(matches!(err, RegistryError::DescriptorMismatch { name } if name == "Unregistered"));
    assert!(!link.is_resolved());
}

#[test]
fn divergent_wire_type_is_rejected() {
    let registry = EntityTypeRegistry::new();
    let mut link = LinkedReference::with_type(17, "Organization");
    let err = registry.resolve_link(&mut link, account(17)).unwrap_err();
    assert!(matches!(err, RegistryError::Link(_)));
    // The wire-supplied type survives; nothing was attached.
    assert_eq!(link.linked_entity_type(), Some("Organization"));
    assert!(!link.is_resolved());
}

// ── Re-resolution ────────────────────────────────────────────────

#[test]
fn clear_entity_then_resolve_against_a_different_owner_type() {
    let registry = EntityTypeRegistry::new();
    let mut record = address_owned_by(17);
    registry.resolve(&mut record, account(17)).unwrap();

    record.link_mut().clear_entity();
    record.link_mut().set_linked_entity_id(3);
    let org = Arc::new(Organization {
        id: 3,
        name: "Acme Corp".into(),
        website: None,
    });
    registry.resolve(&mut record, org).unwrap();
    assert_eq!(record.link().linked_entity_type(), Some("Organization"));
}
