//! Error types for stickerseg-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error (malformed input buffers, bad dimensions)
    #[error("core error: {0}")]
    Core(#[from] stickerseg_core::Error),

    /// Filter error (blur scoring)
    #[error("filter error: {0}")]
    Filter(#[from] stickerseg_filter::FilterError),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// A region mask does not cover the expected canvas
    #[error("mask size mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    MaskSizeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Statistics requested over no regions
    #[error("empty region set: no regions to aggregate")]
    EmptyRegionSet,
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
