//! Error types for registry operations.

use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors raised by link resolution.
///
/// Lookups never error: unknown and empty names are reported as
/// `None`/`false` sentinels, not failures.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The candidate's entity type has no registry entry. The link is left
    /// unresolved.
    #[error("entity type '{0}' is not registered")]
    UnregisteredType(String),

    /// The candidate's name is bound to a different concrete type; an
    /// earlier registration won that name.
    #[error("entity type '{name}' is bound to a different concrete type")]
    DescriptorMismatch { name: String },

    /// The link already records a different type name than the candidate's.
    #[error(transparent)]
    Link(#[from] rolodex_types::Error),
}
