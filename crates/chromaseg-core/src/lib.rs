//! Chromaseg Core - Basic data structures for color segmentation
//!
//! This crate provides the fundamental data structures used throughout
//! the chromaseg workspace:
//!
//! - [`Pix`] / [`PixMut`] - The image container (immutable / mutable)
//! - [`Box`] - Rectangle regions with half-open extents
//! - [`Color`] - RGB triple used for painting labels
//! - [`logger`] - Minimal stderr logger for the `log` facade

pub mod box_;
pub mod error;
pub mod logger;
pub mod pix;

pub use box_::Box;
pub use error::{Error, Result};
pub use pix::{Color, Pix, PixMut, PixelDepth};

/// Packing of 32 bpp pixels as `0xRRGGBBAA`
pub mod color {
    /// Pack an opaque color (alpha 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_rgba(r, g, b, 0xff)
    }

    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        u32::from_be_bytes([r, g, b, a])
    }

    /// Red, green and blue of a packed pixel; alpha is dropped.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        let [r, g, b, _] = pixel.to_be_bytes();
        (r, g, b)
    }

    #[inline]
    pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        let [r, g, b, a] = pixel.to_be_bytes();
        (r, g, b, a)
    }

}
