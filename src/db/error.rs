//! Storage error types
//!
//! # Error Types
//!
//! - **`SledError`**: Errors from the underlying sled embedded database
//! - **`CorruptStore`**: The persisted favorites payload could not be decoded
//! - **`SerializeError`**: The favorites collection could not be encoded
//! - **`Unavailable`**: The backing store refused the operation

use thiserror::Error;

/// Storage-specific errors
#[derive(Debug, Error)]
pub enum DbError {
    /// Represents a sled database error
    #[error("Database error: {0}")]
    SledError(#[from] sled::Error),

    /// Stored payload is not a valid favorites document
    #[error("Stored favorites are corrupt: {0}")]
    CorruptStore(String),

    /// Favorites could not be encoded for storage
    #[error("Error during serialization: {0}")]
    SerializeError(String),

    /// The store rejected the operation
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
