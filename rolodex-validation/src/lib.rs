//! Shape-polymorphic field validation for the Rolodex core.
//!
//! One logical constraint ("is this a valid e-mail address") applies
//! uniformly whether the value arrives as a bare string, a wire-format
//! record, or a domain record:
//! - [`FieldText`] — the extraction capability each representation shape
//!   implements; validators depend only on it
//! - [`FieldValidator`] / [`FieldFormat`] — the fixed-pattern checkers for
//!   e-mail, NANP phone, GUID, URL, and username fields
//! - [`ConnectionStringValidator`] — database connection strings, matched
//!   per declared engine kind or loosely against all kinds for bare text
//!
//! Validators are stateless and pure: no I/O, no shared mutable state,
//! safe under unlimited concurrency. Sequence forms are single-pass and
//! fail fast on the first invalid element; an empty sequence is vacuously
//! valid.

mod connection;
mod error;
mod field;
mod format;

pub use connection::ConnectionStringValidator;
pub use error::{ValidationError, ValidationResult};
pub use field::FieldText;
pub use format::{FieldFormat, FieldValidator};
