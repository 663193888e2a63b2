//! Sniffing the container from its first bytes

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const PNG_SIGNATURE: [u8; 8] = *b"\x89PNG\r\n\x1a\n";

/// Containers the crate can tell apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    #[default]
    Unknown,
    Png,
    /// Binary PGM (`P5`) or PPM (`P6`)
    Pnm,
}

impl ImageFormat {
    /// File name suffix written for this format
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => "dat",
            Self::Png => "png",
            Self::Pnm => "pnm",
        }
    }

    /// Guess from a file name suffix, ignoring case.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Self::Png,
            "pnm" | "pgm" | "ppm" => Self::Pnm,
            _ => Self::Unknown,
        }
    }
}

/// Read the head of the file at `path` and sniff it.
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let mut head = Vec::with_capacity(PNG_SIGNATURE.len());
    File::open(path)?
        .take(PNG_SIGNATURE.len() as u64)
        .read_to_end(&mut head)?;
    detect_format_from_bytes(&head)
}

/// Sniff an in-memory image.
///
/// # Errors
///
/// [`IoError::InvalidData`] for fewer than two bytes and
/// [`IoError::UnsupportedFormat`] when no signature matches.
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    match data {
        [] | [_] => Err(IoError::InvalidData(format!(
            "{} byte(s) are too few to identify an image",
            data.len()
        ))),
        _ if data.starts_with(&PNG_SIGNATURE) => Ok(ImageFormat::Png),
        [b'P', b'5' | b'6', ..] => Ok(ImageFormat::Pnm),
        [a, b, ..] => Err(IoError::UnsupportedFormat(format!(
            "no codec for header {:02x} {:02x}",
            a, b
        ))),
    }
}
