//! Polymorphic links to owning entities.
//!
//! A [`LinkedReference`] is the (id, type-name) pair plus a lazily attached
//! entity reference that lets one record point at an owner whose concrete
//! type is chosen at runtime. The reference has two states:
//!
//! - **Unresolved** — `linked_entity_type` may be set (wire shapes supply it
//!   directly), no entity attached
//! - **Resolved** — an entity is attached and `linked_entity_type` is its
//!   registered name
//!
//! The type name and the attached entity are never allowed to diverge:
//! [`LinkedReference::attach`] derives the name from the entity and rejects
//! a conflicting pre-set name, and [`LinkedReference::clear_entity`] clears
//! both fields together. Resolution against the registry (which also rejects
//! unregistered candidates) lives in `rolodex-registry`.
//!
//! A single reference is not thread-safe as a unit; callers serialize writes
//! to one record. Distinct records are fully independent.

use crate::{EntityObject, Error, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A polymorphic foreign key: integer id, runtime-resolved type name, and
/// the (non-owning) attached entity reference.
///
/// On the wire only `linkedEntityId` and `linkedEntityType` travel; the
/// attached entity is a process-local association supplied by a repository
/// collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedReference {
    #[serde(default)]
    linked_entity_id: i64,
    #[serde(default)]
    linked_entity_type: Option<String>,
    #[serde(skip)]
    linked_entity: Option<Arc<dyn EntityObject>>,
}

impl LinkedReference {
    /// Creates an unresolved reference to owner `linked_entity_id` with no
    /// type recorded yet.
    #[must_use]
    pub fn new(linked_entity_id: i64) -> Self {
        Self {
            linked_entity_id,
            linked_entity_type: None,
            linked_entity: None,
        }
    }

    /// Creates an unresolved reference with a wire-supplied type name.
    #[must_use]
    pub fn with_type(linked_entity_id: i64, linked_entity_type: impl Into<String>) -> Self {
        Self {
            linked_entity_id,
            linked_entity_type: Some(linked_entity_type.into()),
            linked_entity: None,
        }
    }

    /// The owner's identifier. Its meaning is defined by the owner type.
    #[must_use]
    pub const fn linked_entity_id(&self) -> i64 {
        self.linked_entity_id
    }

    /// Re-points the reference at a different owner id. Does not touch the
    /// type name or the attached entity.
    pub fn set_linked_entity_id(&mut self, linked_entity_id: i64) {
        self.linked_entity_id = linked_entity_id;
    }

    /// The recorded owner type name, if any.
    #[must_use]
    pub fn linked_entity_type(&self) -> Option<&str> {
        self.linked_entity_type.as_deref()
    }

    /// The attached owning entity, if resolved.
    #[must_use]
    pub fn linked_entity(&self) -> Option<&Arc<dyn EntityObject>> {
        self.linked_entity.as_ref()
    }

    /// True when an owning entity is attached.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.linked_entity.is_some()
    }

    /// Attaches the owning entity, deriving `linked_entity_type` from the
    /// entity's registered name.
    ///
    /// Fails with [`Error::TypeMismatch`] if a different type name is
    /// already recorded, leaving the reference untouched. Callers normally
    /// go through `EntityTypeRegistry::resolve_link`, which additionally
    /// rejects candidates whose type is not registered at all.
    pub fn attach(&mut self, entity: Arc<dyn EntityObject>) -> Result<()> {
        let name = entity.entity_type_name();
        if let Some(existing) = self.linked_entity_type.as_deref()
            && existing != name
        {
            return Err(Error::TypeMismatch {
                expected: existing.to_owned(),
                actual: name,
            });
        }
        self.linked_entity_type = Some(name.to_owned());
        self.linked_entity = Some(entity);
        Ok(())
    }

    /// Detaches the owning entity and clears the recorded type name with it.
    /// This is the only Resolved → Unresolved transition.
    pub fn clear_entity(&mut self) {
        self.linked_entity = None;
        self.linked_entity_type = None;
    }
}

/// Equality covers the wire-visible fields only; the attached entity is a
/// process-local association.
impl PartialEq for LinkedReference {
    fn eq(&self, other: &Self) -> bool {
        self.linked_entity_id == other.linked_entity_id
            && self.linked_entity_type == other.linked_entity_type
    }
}

impl Eq for LinkedReference {}

/// Contract implemented by record shapes that carry a polymorphic link to
/// an owning entity (addresses, sub-accounts, and their wire DTOs).
pub trait Linked {
    /// The embedded linked reference.
    fn link(&self) -> &LinkedReference;

    /// Mutable access to the embedded linked reference.
    fn link_mut(&mut self) -> &mut LinkedReference;
}
