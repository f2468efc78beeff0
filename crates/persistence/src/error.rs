//! Error types for the persistence layer.
//!
//! Errors are split by origin: validation failures are raised before any
//! store access, mapping failures come from documents that do not match the
//! coworker shape, and backend failures come from the document store itself.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Input rejected before reaching the store
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A stored document could not be mapped to a coworker
    #[error(transparent)]
    Mapping(#[from] MappingError),

    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Errors raised while validating client input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required field was absent from the payload.
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// A field that must carry text was empty.
    #[error("field '{field}' must not be empty")]
    EmptyField { field: String },

    /// Salary was zero, negative or not a finite number.
    #[error("salary must be greater than 0, got {salary}")]
    NonPositiveSalary { salary: f64 },

    /// The requested result limit is outside the accepted range.
    #[error("limit must be between {min} and {max}, got {limit}")]
    LimitOutOfRange { limit: i64, min: u32, max: u32 },

    /// A query parameter could not be parsed.
    #[error("invalid value for '{parameter}': {message}")]
    InvalidParameter { parameter: String, message: String },

    /// The identifier is not a valid store identifier.
    #[error("invalid coworker id: {id}")]
    InvalidId { id: String },
}

/// Errors raised while converting a stored document to its wire form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// The document is missing a field the coworker shape requires.
    #[error("document is missing field '{field}'")]
    MissingField { field: String },

    /// The document carries a field with an unexpected BSON type.
    #[error("document field '{field}' has type {actual}, expected {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
        actual: String,
    },
}

/// Errors originating from the document store.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend cannot currently be reached.
    #[error("backend unavailable: {backend_name}: {message}")]
    Unavailable {
        backend_name: String,
        message: String,
    },

    /// Establishing the connection failed.
    #[error("connection failed to {backend_name}: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// Internal backend error.
    #[error("internal error in {backend_name}: {message}")]
    Internal {
        backend_name: String,
        message: String,
    },
}

impl BackendError {
    /// Returns true when the error means the store could not be reached.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            BackendError::Unavailable { .. } | BackendError::ConnectionFailed { .. }
        )
    }
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
