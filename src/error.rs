//! Error types for the reformulation layer.

use thiserror::Error;

/// Errors that can occur while building or consuming a linearized model.
#[derive(Error, Debug)]
pub enum ReformError {
    /// Input validation failed (non-square matrix, asymmetry, length mismatch)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A downstream solver backend failed
    #[error("Backend failed: {0}")]
    Backend(String),
}

/// Result type for reformulation operations.
pub type ReformResult<T> = Result<T, ReformError>;
