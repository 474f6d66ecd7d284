//! Error types shared across showbill crates

use thiserror::Error;

/// Common result type for showbill operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failure taxonomy for the booking directory.
///
/// Mutation paths report `InvalidInput` before touching storage and map
/// storage faults to `Database`; read paths use `NotFound` where a page
/// 404s. `Internal` is the catch-all for faults with no better home.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or rejected form submission
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}
