//! Account records.

use crate::{EmailAddress, PhoneNumber};
use rolodex_types::{EntityShape, Linked, LinkedReference, Registrable};
use serde::{Deserialize, Serialize};

/// A billing/ownership account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub emails: Vec<EmailAddress>,
    #[serde(default)]
    pub phones: Vec<PhoneNumber>,
    /// Unix seconds.
    pub created_at: i64,
}

impl Registrable for Account {
    const NAME: &'static str = "Account";
    const SHAPE: EntityShape = EntityShape::Domain;
}

/// A subdivision of an owning entity, usually an [`Account`]; the owner's
/// concrete type is only known at link-resolution time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubAccount {
    pub id: i64,
    pub label: String,
    /// Polymorphic link to the owning entity.
    pub owner: LinkedReference,
}

impl Registrable for SubAccount {
    const NAME: &'static str = "SubAccount";
    const SHAPE: EntityShape = EntityShape::Domain;
}

impl Linked for SubAccount {
    fn link(&self) -> &LinkedReference {
        &self.owner
    }

    fn link_mut(&mut self) -> &mut LinkedReference {
        &mut self.owner
    }
}
