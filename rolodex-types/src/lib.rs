//! Fundamental type definitions for the Rolodex core.
//!
//! This crate defines the shared, behavior-light types every other core
//! crate depends on:
//! - [`TypeDescriptor`] and the [`Registrable`] capability — runtime handles
//!   for concrete entity types, keyed by case-sensitive name
//! - [`LinkedReference`] and the [`Linked`] contract — the polymorphic
//!   foreign key (`linkedEntityId` + `linkedEntityType` + attached entity)
//!   carried by records that point at an owner of runtime-chosen type
//! - [`ConnectionDescriptor`] and [`DatabaseEngine`] — the two-key database
//!   connection value object and its wire contract
//!
//! Registry behavior lives in `rolodex-registry`; validation lives in
//! `rolodex-validation`. This crate stays free of both so the model crate
//! can depend on it without cycles.

mod connection;
mod descriptor;
mod link;

pub use connection::{ConnectionDescriptor, DatabaseEngine};
pub use descriptor::{EntityObject, EntityShape, Registrable, TypeDescriptor};
pub use link::{Linked, LinkedReference};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("linked entity of type '{actual}' does not match recorded type '{expected}'")]
    TypeMismatch {
        /// The type name already recorded on the link.
        expected: String,
        /// The registered name of the entity being attached.
        actual: &'static str,
    },
}
