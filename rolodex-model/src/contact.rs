//! User records and the contact value shapes.

use rolodex_types::{EntityShape, Registrable};
use serde::{Deserialize, Serialize};

/// An e-mail address of record attached to a user or account.
///
/// The `address` field is the string the validators check; any other
/// structure is carried along untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress {
    pub address: String,
    /// Free-form label ("work", "personal", …).
    #[serde(default)]
    pub label: Option<String>,
}

impl EmailAddress {
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            label: None,
        }
    }
}

/// A phone number of record attached to a user or account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub number: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl PhoneNumber {
    #[must_use]
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            label: None,
        }
    }
}

/// A person with login credentials and contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    #[serde(default)]
    pub emails: Vec<EmailAddress>,
    #[serde(default)]
    pub phones: Vec<PhoneNumber>,
}

impl Registrable for User {
    const NAME: &'static str = "User";
    const SHAPE: EntityShape = EntityShape::Domain;
}
