//! Flat painting of rectangular regions
//!
//! Segmentation results are drawn as solid per-tile fills; these helpers
//! paint a [`Box`] clipped to the image.

use super::{PixMut, PixelDepth};
use crate::box_::Box;
use crate::error::{Error, Result};

/// Opaque fill color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packed 32 bpp word with alpha 255
    pub fn to_pixel32(&self) -> u32 {
        crate::color::compose_rgb(self.r, self.g, self.b)
    }

    /// Color of a packed pixel, alpha dropped
    pub fn from_pixel32(pixel: u32) -> Self {
        let (r, g, b) = crate::color::extract_rgb(pixel);
        Self::new(r, g, b)
    }
}

impl PixMut {
    /// Fill the part of `rect` that lies inside the image with `val`.
    ///
    /// Returns the number of pixels written; a box entirely outside the
    /// image writes nothing.
    pub fn fill_rect(&mut self, rect: &Box, val: u32) -> usize {
        let Some(clipped) = rect.clip(self.width(), self.height()) else {
            return 0;
        };
        let val = val & self.depth().max_value();
        let x0 = clipped.x as usize;
        let x1 = clipped.right() as usize;
        for y in clipped.y..clipped.bottom() {
            self.row_data_mut(y as u32)[x0..x1].fill(val);
        }
        clipped.area() as usize
    }

    /// Fill the part of `rect` inside a 32 bpp image with `color`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] unless the image is 32 bpp.
    pub fn fill_rect_color(&mut self, rect: &Box, color: Color) -> Result<usize> {
        if self.depth() != PixelDepth::Bit32 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }
        Ok(self.fill_rect(rect, color.to_pixel32()))
    }
}
