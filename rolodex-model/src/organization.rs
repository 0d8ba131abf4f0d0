//! Organization and address records.

use rolodex_types::{EntityShape, Linked, LinkedReference, Registrable};
use serde::{Deserialize, Serialize};

/// A company or other organization a contact belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub website: Option<String>,
}

impl Registrable for Organization {
    const NAME: &'static str = "Organization";
    const SHAPE: EntityShape = EntityShape::Domain;
}

/// A postal address owned by some entity (account, user, organization)
/// referenced through a polymorphic link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: i64,
    pub street: String,
    pub city: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    pub country: String,
    /// Polymorphic link to the owning entity.
    pub owner: LinkedReference,
}

impl Registrable for Address {
    const NAME: &'static str = "Address";
    const SHAPE: EntityShape = EntityShape::Domain;
}

impl Linked for Address {
    fn link(&self) -> &LinkedReference {
        &self.owner
    }

    fn link_mut(&mut self) -> &mut LinkedReference {
        &mut self.owner
    }
}
