//! Wire-format (transfer) records.
//!
//! Structurally similar to the domain records but tolerant on read: string
//! fields are optional and collections default to empty, so partially
//! populated documents from the external SDK still parse. Keys are
//! camelCase, matching the SDK's JSON contract. The linking DTOs flatten
//! their `LinkedReference` so `linkedEntityId`/`linkedEntityType` appear as
//! sibling keys.

use rolodex_types::{EntityShape, Linked, LinkedReference, Registrable};
use serde::{Deserialize, Serialize};

/// Transfer shape of an e-mail address of record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailAddressDto {
    pub address: Option<String>,
    pub label: Option<String>,
}

/// Transfer shape of a phone number of record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhoneNumberDto {
    pub number: Option<String>,
    pub label: Option<String>,
}

/// Transfer shape of [`crate::Account`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountDto {
    pub id: i64,
    pub name: Option<String>,
    pub emails: Vec<EmailAddressDto>,
    pub phones: Vec<PhoneNumberDto>,
    pub created_at: i64,
}

impl Registrable for AccountDto {
    const NAME: &'static str = "AccountDTO";
    const SHAPE: EntityShape = EntityShape::Wire;
}

/// Transfer shape of [`crate::SubAccount`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubAccountDto {
    pub id: i64,
    pub label: Option<String>,
    #[serde(flatten)]
    pub owner: LinkedReference,
}

impl Registrable for SubAccountDto {
    const NAME: &'static str = "SubAccountDTO";
    const SHAPE: EntityShape = EntityShape::Wire;
}

impl Linked for SubAccountDto {
    fn link(&self) -> &LinkedReference {
        &self.owner
    }

    fn link_mut(&mut self) -> &mut LinkedReference {
        &mut self.owner
    }
}

/// Transfer shape of [`crate::User`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDto {
    pub id: i64,
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub emails: Vec<EmailAddressDto>,
    pub phones: Vec<PhoneNumberDto>,
}

impl Registrable for UserDto {
    const NAME: &'static str = "UserDTO";
    const SHAPE: EntityShape = EntityShape::Wire;
}

/// Transfer shape of [`crate::Organization`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizationDto {
    pub id: i64,
    pub name: Option<String>,
    pub website: Option<String>,
}

impl Registrable for OrganizationDto {
    const NAME: &'static str = "OrganizationDTO";
    const SHAPE: EntityShape = EntityShape::Wire;
}

/// Transfer shape of [`crate::Address`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressDto {
    pub id: i64,
    pub street: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    #[serde(flatten)]
    pub owner: LinkedReference,
}

impl Registrable for AddressDto {
    const NAME: &'static str = "AddressDTO";
    const SHAPE: EntityShape = EntityShape::Wire;
}

impl Linked for AddressDto {
    fn link(&self) -> &LinkedReference {
        &self.owner
    }

    fn link_mut(&mut self) -> &mut LinkedReference {
        &mut self.owner
    }
}
