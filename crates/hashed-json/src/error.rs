//! Error types for classification and copying.

use thiserror::Error;

/// Errors raised when a value falls outside the closed JSON value model.
///
/// Both variants abort the whole operation at the first offending node.
/// They signal a caller handing in unsupported data, not a transient
/// condition, so there is nothing to retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonError {
    /// Raised by [`classify`](crate::classify) and propagated unchanged by
    /// [`validate`](crate::validate).
    #[error("Invalid json type {type_name}; value: {value}")]
    TypeClassification {
        /// Runtime type name of the offending node.
        type_name: String,
        /// Diagnostic rendering of the offending node.
        value: String,
    },

    /// Raised by [`copy`](crate::copy) and [`copy_list`](crate::copy_list).
    #[error("Unsupported type: {type_name}")]
    UnsupportedType {
        /// Runtime type name of the offending node.
        type_name: String,
    },

    /// A type tag name that is not part of the vocabulary.
    #[error("Unknown json type: {0}")]
    UnknownType(String),
}

/// Result alias used throughout the crate.
pub type Result<T, E = JsonError> = std::result::Result<T, E>;
