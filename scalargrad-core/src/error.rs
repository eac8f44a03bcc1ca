use thiserror::Error;

/// Custom error type for the ScalarGrad framework.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Invalid exponent {exponent}: `pow` requires a finite real constant")]
    InvalidExponent { exponent: f64 },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Cannot build a network with no layers")]
    EmptyNetwork,

    #[error("Cannot reduce a loss over an empty batch")]
    EmptyBatch,
}
