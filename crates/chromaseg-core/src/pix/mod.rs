//! Image container
//!
//! `Pix` holds the frames and sample images fed to the segmentation
//! pipeline. Two depths exist: 8 bpp gray and 32 bpp color.
//!
//! Each pixel takes one `u32`, rows top to bottom. Color pixels are
//! packed `0xRRGGBBAA` (see [`crate::color`]); gray pixels keep their
//! value in the low byte.
//!
//! A `Pix` is immutable and cheap to clone: clones share one buffer.
//! Editing goes through [`PixMut`], obtained with [`Pix::try_into_mut`]
//! when the buffer is not shared, or [`Pix::to_mut`] which always copies.

mod access;
mod convert;
pub mod graphics;

pub use graphics::Color;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Bits per pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PixelDepth {
    /// Gray
    Bit8 = 8,
    /// Packed RGBA
    Bit32 = 32,
}

impl PixelDepth {
    /// Bit count of this depth
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Mask of the bits a pixel may use
    pub fn max_value(self) -> u32 {
        match self {
            PixelDepth::Bit8 => 0xff,
            PixelDepth::Bit32 => u32::MAX,
        }
    }
}

#[derive(Debug, Clone)]
struct Raster {
    width: u32,
    height: u32,
    depth: PixelDepth,
    /// Channels carried by the source (1 gray, 3 RGB, 4 RGBA)
    spp: u32,
    words: Vec<u32>,
}

impl Raster {
    fn row_span(&self, y: u32) -> std::ops::Range<usize> {
        let start = y as usize * self.width as usize;
        start..start + self.width as usize
    }
}

/// Immutable, shareable image
///
/// ```
/// use chromaseg_core::{Pix, PixelDepth};
///
/// let frame = Pix::new(640, 480, PixelDepth::Bit32).unwrap();
/// assert_eq!((frame.width(), frame.height()), (640, 480));
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    raster: Arc<Raster>,
}

impl Pix {
    /// Allocate a zeroed image.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimension`] for a zero side or a pixel count that
    /// overflows `usize`.
    pub fn new(width: u32, height: u32, depth: PixelDepth) -> Result<Self> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .filter(|&n| n > 0)
            .ok_or(Error::InvalidDimension { width, height })?;
        let spp = Self::default_spp(depth);
        Ok(Pix {
            raster: Arc::new(Raster {
                width,
                height,
                depth,
                spp,
                words: vec![0; len],
            }),
        })
    }

    /// Wrap row-major pixel words.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimension`] for a zero side, and
    /// [`Error::InvalidParameter`] when `words` does not hold exactly
    /// `width * height` pixels.
    pub fn from_data(width: u32, height: u32, depth: PixelDepth, words: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if (width as usize).checked_mul(height as usize) != Some(words.len()) {
            return Err(Error::InvalidParameter(format!(
                "{} pixel words for a {}x{} image",
                words.len(),
                width,
                height
            )));
        }
        Ok(Pix {
            raster: Arc::new(Raster {
                width,
                height,
                depth,
                spp: Self::default_spp(depth),
                words,
            }),
        })
    }

    fn default_spp(depth: PixelDepth) -> u32 {
        match depth {
            PixelDepth::Bit8 => 1,
            PixelDepth::Bit32 => 3,
        }
    }

    /// Allocate a 32 bpp image painted with `color`.
    pub fn new_filled(width: u32, height: u32, color: Color) -> Result<Self> {
        let mut pm = Self::new(width, height, PixelDepth::Bit32)?.to_mut();
        pm.data_mut().fill(color.to_pixel32());
        Ok(pm.into())
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.raster.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.raster.height
    }

    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.raster.depth
    }

    /// Channels carried by the source image
    #[inline]
    pub fn spp(&self) -> u32 {
        self.raster.spp
    }

    /// All pixels, row-major
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.raster.words
    }

    /// Pixels of row `y`; panics when `y` is past the last row.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        &self.raster.words[self.raster.row_span(y)]
    }

    /// Take the buffer for editing if no clone shares it.
    ///
    /// Gives `self` back unchanged when the buffer is shared.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        Arc::try_unwrap(self.raster)
            .map(|raster| PixMut { raster })
            .map_err(|raster| Pix { raster })
    }

    /// Copy the buffer into a new editable image.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            raster: Raster::clone(&self.raster),
        }
    }
}

/// Editable image, turned back into a [`Pix`] with `into()`
#[derive(Debug)]
pub struct PixMut {
    raster: Raster,
}

impl PixMut {
    #[inline]
    pub fn width(&self) -> u32 {
        self.raster.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.raster.height
    }

    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.raster.depth
    }

    #[inline]
    pub fn spp(&self) -> u32 {
        self.raster.spp
    }

    /// Record how many channels the pixels carry (3 or 4 for color).
    pub fn set_spp(&mut self, spp: u32) {
        self.raster.spp = spp;
    }

    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.raster.words
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.raster.words
    }

    /// Mutable pixels of row `y`; panics when `y` is past the last row.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let span = self.raster.row_span(y);
        &mut self.raster.words[span]
    }
}

impl From<PixMut> for Pix {
    fn from(pm: PixMut) -> Self {
        Pix {
            raster: Arc::new(pm.raster),
        }
    }
}
