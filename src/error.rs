//! Error types for the fallible conveniences.
//!
//! An empty [`WeakRef`][crate::WeakRef] is an ordinary state, observed
//! through [`WeakRef::object`][crate::WeakRef::object] returning `None`.
//! `Error` exists only for the `try_*` methods that turn that state into
//! something `?` can propagate.

use thiserror::Error;

/// Main error type for weakref operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The object behind a weak reference was destroyed, or never set
    #[error("weak reference is empty")]
    Expired,
}

/// Result type alias for weakref operations
pub type Result<T> = core::result::Result<T, Error>;
