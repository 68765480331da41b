//! Core error types

use thiserror::Error;

/// Errors raised by the segmentation engine
#[derive(Error, Debug)]
pub enum CoreError {
    /// A length limit was configured as zero
    #[error("invalid configuration: {field} must be greater than zero")]
    ZeroLength {
        /// Name of the offending configuration field
        field: &'static str,
    },

    /// The minimum length exceeds the maximum length
    #[error("invalid configuration: min_length ({min_length}) exceeds max_length ({max_length})")]
    InvertedLengths {
        /// Configured minimum unit length
        min_length: usize,
        /// Configured maximum unit length
        max_length: usize,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
