//! Runtime type descriptors for entity types.
//!
//! The registry maps string names to [`TypeDescriptor`] values instead of
//! compile-time type references. Descriptors can only be built from types
//! carrying the [`Registrable`] capability, so "registering something that
//! is not an entity type" is rejected by the compiler rather than at
//! runtime.

use std::any::{Any, TypeId};
use std::fmt;

/// Whether a registered type is a domain record or a wire-format record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityShape {
    /// A domain record owned by the core model.
    Domain,
    /// A wire-format (transfer) record, structurally similar to but
    /// distinct from the corresponding domain record.
    Wire,
}

/// Capability marker for types that may appear in the entity type registry.
///
/// Every concrete domain record and wire DTO implements this with its
/// canonical catalog name. The name is the wire contract: serializers and
/// repositories encode entity kind as exactly this string.
pub trait Registrable: Any + Send + Sync + fmt::Debug {
    /// Canonical, case-sensitive registry name for this concrete type.
    const NAME: &'static str;
    /// Whether this is a domain record or a wire-format record.
    const SHAPE: EntityShape;
}

/// Object-safe view over a registrable entity.
///
/// Linked references store owning entities as `Arc<dyn EntityObject>`; the
/// registry uses [`EntityObject::as_any`] to check that a candidate's
/// concrete type matches the descriptor registered under its name.
pub trait EntityObject: Any + Send + Sync + fmt::Debug {
    /// The canonical registry name of the concrete type.
    fn entity_type_name(&self) -> &'static str;
    /// Upcast for concrete-type identity checks and downcasts.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Registrable> EntityObject for T {
    fn entity_type_name(&self) -> &'static str {
        T::NAME
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// An opaque runtime handle identifying a concrete entity type.
///
/// Used in place of compile-time type references wherever entity kind is
/// chosen at runtime (registry lookups, polymorphic link resolution).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDescriptor {
    name: &'static str,
    shape: EntityShape,
    type_id: TypeId,
}

impl TypeDescriptor {
    /// Builds the descriptor for a registrable type.
    #[must_use]
    pub fn of<T: Registrable>() -> Self {
        Self {
            name: T::NAME,
            shape: T::SHAPE,
            type_id: TypeId::of::<T>(),
        }
    }

    /// The canonical registry name this descriptor was built from.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the described type is a domain or wire-format record.
    #[must_use]
    pub const fn shape(&self) -> EntityShape {
        self.shape
    }

    /// True when `entity`'s concrete runtime type is the type this
    /// descriptor describes.
    #[must_use]
    pub fn matches(&self, entity: &dyn EntityObject) -> bool {
        self.type_id == entity.as_any().type_id()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
