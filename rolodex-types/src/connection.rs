//! Database connection descriptor and its wire contract.
//!
//! The descriptor is exchanged with external tooling as a two-key JSON
//! document using exactly the field names `connectionString` and
//! `databaseType`. Unknown extra keys are ignored on read, missing keys
//! read as `None`, and malformed text is a hard parse failure, never
//! coerced into a default value.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The database engines a connection descriptor may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatabaseEngine {
    SqlServer,
    MySql,
    PostgreSql,
    #[serde(rename = "SQLite")]
    Sqlite,
}

impl fmt::Display for DatabaseEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SqlServer => "SqlServer",
            Self::MySql => "MySql",
            Self::PostgreSql => "PostgreSql",
            Self::Sqlite => "SQLite",
        };
        write!(f, "{name}")
    }
}

/// Connection settings for an external database.
///
/// Both fields are optional: a descriptor may arrive with no connection
/// string configured yet, or with a string whose engine kind is unknown.
/// Validation of the string against its engine's format lives in
/// `rolodex-validation`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDescriptor {
    /// Raw connection string, or `None` when not configured.
    #[serde(rename = "connectionString", default)]
    pub connection_string: Option<String>,

    /// Target engine kind, or `None` when unknown.
    #[serde(rename = "databaseType", default)]
    pub database_kind: Option<DatabaseEngine>,
}

impl ConnectionDescriptor {
    /// Creates a fully specified descriptor.
    #[must_use]
    pub fn new(connection_string: impl Into<String>, database_kind: DatabaseEngine) -> Self {
        Self {
            connection_string: Some(connection_string.into()),
            database_kind: Some(database_kind),
        }
    }

    /// Serializes to the two-key wire document. Both keys are always
    /// emitted (`null` when absent) so the document round-trips bit-exact.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses the wire document. Malformed input propagates as
    /// [`crate::Error::Serialization`].
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
