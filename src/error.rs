//! Error types for parlor-admin.
//!
//! Two request-level failures never appear here because they are recovered
//! locally in the handlers: a signup password mismatch re-renders the signup
//! form, and a failed login (unknown username or wrong password) re-renders
//! the login form with one shared generic message. The enums below are the
//! failures that surface as HTTP errors.

use thiserror::Error;

/// Errors from the backing database store.
///
/// Variants carry plain strings rather than driver errors so that test
/// doubles can construct them without a live database.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Query execution failed (includes constraint violations such as a
    /// duplicate username; callers must not distinguish them)
    #[error("Database error: {0}")]
    Database(String),

    /// Could not reach the database or acquire a pooled connection
    #[error("Connection error: {0}")]
    Connection(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(e) => StoreError::Connection(e.to_string()),
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                StoreError::Connection(err.to_string())
            }
            other => StoreError::Database(other.to_string()),
        }
    }
}

/// Errors from password hashing and verification.
#[derive(Debug, Clone, Error)]
pub enum HashError {
    /// Digest computation failed
    #[error("Failed to hash password: {0}")]
    Hash(String),

    /// A stored digest could not be parsed during verification
    #[error("Malformed password digest: {0}")]
    MalformedDigest(String),
}

/// Errors from the item upload flow.
#[derive(Debug, Clone, Error)]
pub enum UploadError {
    /// The multipart body could not be read
    #[error("Malformed multipart request: {0}")]
    Multipart(String),

    /// A required form field was absent
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A price field did not parse as a number
    #[error("Invalid price for {field}: {value:?}")]
    InvalidPrice {
        field: &'static str,
        value: String,
    },

    /// Writing the uploaded file to disk failed
    #[error("Failed to store uploaded file: {0}")]
    Io(String),
}
