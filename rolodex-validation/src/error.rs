//! Error types for validation checks.

use crate::format::FieldFormat;
use rolodex_types::DatabaseEngine;
use thiserror::Error;

/// Result of a validation check. `Ok(())` means the value (or every
/// element of the sequence) satisfies its format constraint.
pub type ValidationResult = Result<(), ValidationError>;

/// A format violation, carrying enough context for a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The value, or its extracted field, is missing, empty, or
    /// whitespace-only. Absent is never "skip"; it is invalid.
    #[error("{format} is missing or empty")]
    Missing { format: FieldFormat },

    /// The extracted string does not match the format's pattern.
    #[error("'{value}' is not a valid {format}")]
    Mismatch { format: FieldFormat, value: String },

    /// A connection descriptor carries no engine kind, so no pattern can
    /// be chosen.
    #[error("connection descriptor does not declare a database engine kind")]
    MissingEngineKind,

    /// The connection string itself is missing or empty.
    #[error("connection string is missing or empty")]
    MissingConnectionString,

    /// The connection string does not match its declared engine's format.
    #[error("'{value}' is not a valid {kind} connection string")]
    EngineMismatch {
        kind: DatabaseEngine,
        value: String,
    },

    /// A bare connection string matches none of the supported engine
    /// formats.
    #[error("'{value}' does not match any supported connection string format")]
    UnknownFormat { value: String },
}
