//! # Error Types
//!
//! This module defines error types used throughout the maskgen library.

use thiserror::Error;

/// Main error type for maskgen operations
#[derive(Debug, Error)]
pub enum MaskgenError {
    /// A chained transform left the forward matrix non-invertible
    #[error("Singular transform: {0}")]
    SingularTransform(String),

    /// Canvas dimensions that cannot be allocated or encoded
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// The encoder could not write the output image
    #[error("Encoder error: {0}")]
    Encoder(String),
}

/// Convenience result type used across maskgen.
pub type Result<T> = std::result::Result<T, MaskgenError>;
