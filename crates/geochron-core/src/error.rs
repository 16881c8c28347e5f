//! Error types for geochronological data reduction
//!
//! Provides a unified error type for all geochron-stats crates.
//!
//! Numerical precondition violations (a zero sigma, a zero width) are not
//! errors: they surface as NaN or infinity in the returned values. This type
//! only covers structural misuse such as mismatched input lengths.

use thiserror::Error;

/// Core error type for geochron-stats operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// A bounded rejection sampler ran out of trials before accepting a draw
    #[error("Trial limit exceeded: no sample accepted after {trials} trials")]
    TrialLimitExceeded { trials: u64 },

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input(operation: &str) -> Self {
        tracing::trace!(operation, "empty input");
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for size mismatch between parallel inputs
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }
}
