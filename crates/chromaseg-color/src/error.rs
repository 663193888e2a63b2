//! Error types for chromaseg-color

use chromaseg_core::Box;
use thiserror::Error;

/// Errors that can occur while building or normalizing color histograms
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] chromaseg_core::Error),

    /// Unsupported pixel depth for this operation
    #[error("unsupported depth: expected {expected}, got {actual}")]
    UnsupportedDepth { expected: &'static str, actual: u32 },

    /// Extraction rectangle covers no pixels
    #[error("empty region: {0:?} contains no pixels")]
    EmptyRegion(Box),

    /// Extraction rectangle reaches outside the image
    #[error("region {region:?} exceeds {width}x{height} image")]
    OutOfBounds { region: Box, width: u32, height: u32 },

    /// Histogram is in the wrong lifecycle state for the operation
    #[error("invalid histogram state: {0}")]
    InvalidState(&'static str),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
