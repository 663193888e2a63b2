//! Error type shared by the core image and rectangle code

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// An image side is zero or the pixel count does not fit in memory
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// The operation is not defined for this depth
    #[error("operation not available at {0} bpp")]
    UnsupportedDepth(u32),

    #[error("pixel ({x}, {y}) is outside the {width}x{height} image")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
