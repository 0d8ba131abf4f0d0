//! Fixed-pattern field validators.

use crate::error::{ValidationError, ValidationResult};
use crate::field::FieldText;
use regex_lite::Regex;
use std::fmt;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._%+-]*@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("e-mail pattern")
});

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\+?1[-. ]?)?(?:\(\d{3}\)|\d{3})[-. ]?\d{3}[-. ]?\d{4}$")
        .expect("phone pattern")
});

static GUID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\{?[0-9a-f]{8}-(?:[0-9a-f]{4}-){3}[0-9a-f]{12}\}?$").expect("GUID pattern")
});

static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://[a-z0-9.-]+(?::\d{1,5})?(?:/\S*)?$").expect("URL pattern")
});

static USERNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z0-9][a-z0-9._-]{2,31}$").expect("username pattern"));

/// The field formats the core validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldFormat {
    /// E-mail address of record.
    Email,
    /// NANP-style phone number, optional `+1`/`1` prefix.
    Phone,
    /// 8-4-4-4-12 hex GUID, optionally braced; case-insensitive.
    Guid,
    /// `http`/`https` URL.
    Url,
    /// 3–32 character login name; case-insensitive.
    Username,
}

impl FieldFormat {
    fn regex(self) -> &'static Regex {
        match self {
            Self::Email => &EMAIL,
            Self::Phone => &PHONE,
            Self::Guid => &GUID,
            Self::Url => &URL,
            Self::Username => &USERNAME,
        }
    }
}

impl fmt::Display for FieldFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Email => "e-mail address",
            Self::Phone => "phone number",
            Self::Guid => "GUID",
            Self::Url => "URL",
            Self::Username => "username",
        };
        write!(f, "{name}")
    }
}

/// Checks one fixed format across every representation shape.
///
/// A value is valid when it projects (via [`FieldText`]) to a non-empty,
/// non-whitespace string matching the format's pattern. Sequence forms
/// validate every element, fail fast on the first invalid one, and accept
/// the empty sequence vacuously.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldValidator {
    format: FieldFormat,
}

impl FieldValidator {
    #[must_use]
    pub const fn new(format: FieldFormat) -> Self {
        Self { format }
    }

    #[must_use]
    pub const fn email() -> Self {
        Self::new(FieldFormat::Email)
    }

    #[must_use]
    pub const fn phone() -> Self {
        Self::new(FieldFormat::Phone)
    }

    #[must_use]
    pub const fn guid() -> Self {
        Self::new(FieldFormat::Guid)
    }

    #[must_use]
    pub const fn url() -> Self {
        Self::new(FieldFormat::Url)
    }

    #[must_use]
    pub const fn username() -> Self {
        Self::new(FieldFormat::Username)
    }

    /// The format this validator checks.
    #[must_use]
    pub const fn format(&self) -> FieldFormat {
        self.format
    }

    /// Validates one value. Missing, empty, and whitespace-only
    /// projections are invalid without consulting the pattern.
    pub fn validate<T>(&self, value: &T) -> ValidationResult
    where
        T: FieldText + ?Sized,
    {
        let Some(text) = value.field_text() else {
            return Err(ValidationError::Missing {
                format: self.format,
            });
        };
        if text.trim().is_empty() {
            return Err(ValidationError::Missing {
                format: self.format,
            });
        }
        if self.format.regex().is_match(text) {
            Ok(())
        } else {
            Err(ValidationError::Mismatch {
                format: self.format,
                value: text.to_owned(),
            })
        }
    }

    /// Validates every element, failing fast on the first invalid one.
    /// An empty sequence has no elements to violate the constraint and is
    /// valid.
    pub fn validate_all<'a, T, I>(&self, values: I) -> ValidationResult
    where
        T: FieldText + ?Sized + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        for value in values {
            self.validate(value)?;
        }
        Ok(())
    }

    /// Boolean form of [`Self::validate`].
    #[must_use]
    pub fn is_valid<T>(&self, value: &T) -> bool
    where
        T: FieldText + ?Sized,
    {
        self.validate(value).is_ok()
    }

    /// Boolean form of [`Self::validate_all`].
    #[must_use]
    pub fn is_valid_all<'a, T, I>(&self, values: I) -> bool
    where
        T: FieldText + ?Sized + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        self.validate_all(values).is_ok()
    }
}
