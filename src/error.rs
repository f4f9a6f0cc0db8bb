//! Crate-wide error types.

use thiserror::Error;

/// Errors produced by the SEC-DED layout computation and its callers.
#[derive(Debug, Error)]
pub enum Error {
    /// The caller supplied a width or message that violates an input
    /// invariant (non-positive width, wrong message length, unparsable text).
    /// Recoverable: the caller should re-solicit input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The layout walk and the check-bit count disagree about how many
    /// data positions exist. Indicates an internal logic inconsistency;
    /// not recoverable and never retried.
    #[error("Computation out of bounds: {0}")]
    ComputationBounds(String),
}

/// Result type for SEC-DED operations
pub type Result<T> = std::result::Result<T, Error>;
