//! Error handling for LabelKit
//!
//! The designer core has no error taxonomy of its own: invalid or no-op
//! editing operations leave the model unchanged instead of failing. The only
//! failures that surface are reported by the layout persistence collaborator,
//! and they are passed through to the caller untouched.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Layout store error type
///
/// Represents failures reported by a layout persistence backend
/// (`load`, `save`, `create`, `list`, `set_default`, `delete`).
#[derive(Error, Debug)]
pub enum StoreError {
    /// No layout with the requested id exists in the store
    #[error("Layout not found: {id}")]
    NotFound {
        /// The id that was looked up.
        id: String,
    },

    /// Underlying I/O failure (file-backed stores)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A layout record could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backend rejected or failed the request
    #[error("Store backend error: {message}")]
    Backend {
        /// The backend's description of the failure.
        message: String,
    },
}

impl StoreError {
    /// Create a backend error from a message
    pub fn backend(message: impl Into<String>) -> Self {
        StoreError::Backend {
            message: message.into(),
        }
    }

    /// Create a not-found error for a layout id
    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound { id: id.into() }
    }
}

/// Main error type for LabelKit
///
/// A unified error type used in public APIs that touch persistence.
#[derive(Error, Debug)]
pub enum Error {
    /// Layout store error
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl Error {
    /// Check if this error means the requested layout does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Store(StoreError::NotFound { .. }))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
