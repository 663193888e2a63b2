//! Error types for chromaseg-segment

use crate::Label;
use thiserror::Error;

/// Errors that can occur while building reference sets or classifying
#[derive(Debug, Error)]
pub enum SegmentError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] chromaseg_core::Error),

    /// Histogram construction error
    #[error("color error: {0}")]
    Color(#[from] chromaseg_color::ColorError),

    /// A nearest-distance query was made against a set with no members
    #[error("{0} reference set is empty")]
    EmptyReferenceSet(Label),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for segmentation operations
pub type SegmentResult<T> = Result<T, SegmentError>;
