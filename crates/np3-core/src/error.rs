//! Error types for np3

use thiserror::Error;

/// Result type for np3 operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in np3 operations
///
/// Numeric input is never rejected; it saturates to the field's range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Input that cannot be stored without silently changing it
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Buffer too short for the field being written
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}
