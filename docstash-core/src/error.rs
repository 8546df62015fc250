//! Error types and result types for repository operations.
//!
//! Use [`DocumentStoreResult<T>`] as the return type for fallible operations.

use serde_json::Error as SerdeJsonError;
use thiserror::Error;

/// Represents all possible errors that can occur when interacting with a document repository.
///
/// Only [`DocumentStoreError::InvalidArgument`] is part of the repository's own contract.
/// The remaining variants belong to the JSON helpers and to backends that can actually fail.
#[derive(Error, Debug)]
pub enum DocumentStoreError {
    /// The caller supplied a malformed argument, such as a missing or blank document id.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// Serialization/deserialization error when converting documents to or from JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// An error occurred in the underlying storage backend.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// A specialized `Result` type for repository operations.
pub type DocumentStoreResult<T> = Result<T, DocumentStoreError>;

impl From<SerdeJsonError> for DocumentStoreError {
    fn from(err: SerdeJsonError) -> Self {
        DocumentStoreError::Serialization(err.to_string())
    }
}
