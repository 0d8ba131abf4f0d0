//! Database connection string validation.

use crate::error::{ValidationError, ValidationResult};
use regex_lite::Regex;
use rolodex_types::{ConnectionDescriptor, DatabaseEngine};
use std::sync::LazyLock;

static SQL_SERVER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:server|data source)\s*=[^;]+;.*\b(?:database|initial catalog)\s*=[^;]+;?.*$",
    )
    .expect("SqlServer pattern")
});

static MYSQL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*server\s*=[^;]+;.*\buid\s*=[^;]+;?.*$").expect("MySql pattern")
});

static POSTGRESQL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*host\s*=[^;]+;.*\b(?:username|user id)\s*=[^;]+;?.*$")
        .expect("PostgreSql pattern")
});

static SQLITE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*data source\s*=\s*(?::memory:|[^;]*\.(?:db|db3|sqlite|sqlite3))\s*(?:;.*)?$")
        .expect("SQLite pattern")
});

const ALL_KINDS: [DatabaseEngine; 4] = [
    DatabaseEngine::SqlServer,
    DatabaseEngine::MySql,
    DatabaseEngine::PostgreSql,
    DatabaseEngine::Sqlite,
];

/// Validates database connection strings.
///
/// A [`ConnectionDescriptor`] must declare its engine kind and match that
/// kind's format. A bare string carries no type information, so it is
/// accepted when it matches *any* supported engine's format, a
/// deliberately looser check.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectionStringValidator;

impl ConnectionStringValidator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn engine_regex(kind: DatabaseEngine) -> &'static Regex {
        match kind {
            DatabaseEngine::SqlServer => &SQL_SERVER,
            DatabaseEngine::MySql => &MYSQL,
            DatabaseEngine::PostgreSql => &POSTGRESQL,
            DatabaseEngine::Sqlite => &SQLITE,
        }
    }

    /// Validates a descriptor against its declared engine kind.
    ///
    /// The kind must be present: a descriptor with a string but no kind
    /// is invalid, not "unknown, so accept".
    pub fn validate(&self, descriptor: &ConnectionDescriptor) -> ValidationResult {
        let Some(kind) = descriptor.database_kind else {
            return Err(ValidationError::MissingEngineKind);
        };
        let Some(text) = descriptor.connection_string.as_deref() else {
            return Err(ValidationError::MissingConnectionString);
        };
        if text.trim().is_empty() {
            return Err(ValidationError::MissingConnectionString);
        }
        if Self::engine_regex(kind).is_match(text) {
            Ok(())
        } else {
            Err(ValidationError::EngineMismatch {
                kind,
                value: text.to_owned(),
            })
        }
    }

    /// Validates a bare string with no declared kind: any engine's format
    /// will do.
    pub fn validate_text(&self, text: &str) -> ValidationResult {
        if text.trim().is_empty() {
            return Err(ValidationError::MissingConnectionString);
        }
        if ALL_KINDS
            .iter()
            .any(|kind| Self::engine_regex(*kind).is_match(text))
        {
            Ok(())
        } else {
            Err(ValidationError::UnknownFormat {
                value: text.to_owned(),
            })
        }
    }

    /// Validates every descriptor, failing fast on the first invalid one.
    /// An empty sequence is vacuously valid.
    pub fn validate_all<'a, I>(&self, descriptors: I) -> ValidationResult
    where
        I: IntoIterator<Item = &'a ConnectionDescriptor>,
    {
        for descriptor in descriptors {
            self.validate(descriptor)?;
        }
        Ok(())
    }

    /// Boolean form of [`Self::validate`].
    #[must_use]
    pub fn is_valid(&self, descriptor: &ConnectionDescriptor) -> bool {
        self.validate(descriptor).is_ok()
    }

    /// Boolean form of [`Self::validate_text`].
    #[must_use]
    pub fn is_valid_text(&self, text: &str) -> bool {
        self.validate_text(text).is_ok()
    }

    /// Boolean form of [`Self::validate_all`].
    #[must_use]
    pub fn is_valid_all<'a, I>(&self, descriptors: I) -> bool
    where
        I: IntoIterator<Item = &'a ConnectionDescriptor>,
    {
        self.validate_all(descriptors).is_ok()
    }
}
