//! Errors raised by the builders and by [`TypedCollection`] validation.
//!
//! Every error is raised synchronously by the call that detects it and
//! before any element is admitted into a backing store.
//!
//! [`TypedCollection`]: crate::TypedCollection

use thiserror::Error;

/// The error type of this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A builder received a value that is neither a native sequence,
    /// an iterator, nor an iterable aggregate.
    /// Also raised when a typed builder cannot infer its item type.
    #[error("argument must be an iterable or a sequence, {kind} given")]
    InvalidInputKind {
        /// Runtime type name of the rejected value, or a short description.
        kind: String,
    },

    /// A typed collection rejected an element.
    #[error("invalid type [{actual}], expected [{expected}]")]
    TypeMismatch {
        /// Name of the enforced item type.
        expected: &'static str,
        /// Name of the offending element's type.
        actual: &'static str,
    },

    /// A grouping function produced a key that is neither an integer nor a string.
    #[error("invalid group key of type [{kind}], expected an integer or a string")]
    InvalidGroupKey {
        /// Runtime type name of the rejected key.
        kind: &'static str,
    },
}

/// A specialized [`Result`](std::result::Result) for this crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_input(kind: impl Into<String>) -> Self {
        Self::InvalidInputKind { kind: kind.into() }
    }
}
