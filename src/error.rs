//! Error types for pencilsim.
//!
//! The pencil engine itself never fails: a dull point, a worn eraser or a
//! missing substring all degrade to no-op results. Errors only arise at the
//! layers around it, when operation payloads are validated, when the
//! operation journal is (de)serialized, or when a shared engine's lock is
//! poisoned.

use thiserror::Error;

/// Validation errors raised before an operation reaches the engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A text field was empty or only whitespace.
    #[error("Field '{field}' cannot be blank")]
    BlankField {
        /// Name of the offending field.
        field: String,
    },

    /// A text field was longer than allowed.
    #[error("Field '{field}' exceeds maximum length of {max_length}")]
    FieldTooLong {
        /// Name of the offending field.
        field: String,
        /// Maximum length in bytes.
        max_length: usize,
    },

    /// An edit started past the end of the paper.
    #[error("Edit position {position} is past the end of the paper (length {length})")]
    PositionOutOfBounds {
        /// Requested char position.
        position: usize,
        /// Paper length in chars.
        length: usize,
    },

    /// The IR envelope carried a version this crate does not understand.
    #[error("Unsupported IR version '{version}' (expected {expected})")]
    UnsupportedVersion {
        /// Version found in the IR.
        version: String,
        /// Version this crate writes.
        expected: String,
    },
}

/// Top-level error type for pencilsim.
#[derive(Debug, Error)]
pub enum PencilError {
    /// Input rejected before reaching the engine.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// JSON encoding or decoding failed.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Underlying serde message.
        message: String,
    },

    /// Unexpected internal failure, such as a poisoned lock.
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the failure.
        message: String,
    },
}

impl PencilError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a serialization error.
    #[must_use]
    pub const fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Returns true if this is an internal error.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }
}

/// Result type alias for pencilsim operations.
pub type PencilResult<T> = Result<T, PencilError>;
