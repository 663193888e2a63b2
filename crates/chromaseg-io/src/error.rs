//! Errors raised while reading or writing image files

use thiserror::Error;

/// Failure of a read or write, whatever the format
#[derive(Error, Debug)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Header not recognized, or its codec disabled at build time
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Header fields or sample counts that do not describe an image
    #[error("invalid image data: {0}")]
    InvalidData(String),

    #[error("decode error: {0}")]
    DecodeError(String),

    #[error("encode error: {0}")]
    EncodeError(String),

    /// Decoded dimensions rejected when allocating the `Pix`
    #[error("core error: {0}")]
    Core(#[from] chromaseg_core::Error),
}

pub type IoResult<T> = Result<T, IoError>;
