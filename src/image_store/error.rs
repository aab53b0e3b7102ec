//! Error types for the image store

use thiserror::Error;

/// Result type for image store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur when reading or writing image records
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    /// A record with this name already exists
    #[error("Image '{0}' already exists")]
    DuplicateKey(String),

    /// No record matches the requested name
    #[error("Image '{0}' not found")]
    NotFound(String),

    /// Insert failed for a reason other than a duplicate name
    #[error("Failed to save image: {0}")]
    WriteFailure(String),

    /// Select failed for a reason other than a missing row
    #[error("Failed to retrieve image: {0}")]
    ReadFailure(String),

    /// Pool construction or configuration problem
    #[error("Connection error: {0}")]
    Connection(String),
}

impl StoreError {
    /// Wrap an insert-side failure using its display form
    pub fn write(err: impl std::fmt::Display) -> Self {
        StoreError::WriteFailure(err.to_string())
    }

    /// Wrap a select-side failure using its display form
    pub fn read(err: impl std::fmt::Display) -> Self {
        StoreError::ReadFailure(err.to_string())
    }
}

impl From<deadpool_postgres::BuildError> for StoreError {
    fn from(err: deadpool_postgres::BuildError) -> Self {
        StoreError::Connection(err.to_string())
    }
}

impl From<tokio_postgres::Error> for StoreError {
    fn from(err: tokio_postgres::Error) -> Self {
        match err.as_db_error() {
            Some(db_error) => StoreError::Connection(format!(
                "{}: {}",
                db_error.code().code(),
                db_error.message()
            )),
            None => StoreError::Connection(err.to_string()),
        }
    }
}
