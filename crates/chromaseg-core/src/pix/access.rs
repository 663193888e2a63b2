//! Single-pixel reads and writes

use super::{Pix, PixMut, PixelDepth};
use crate::color;
use crate::error::{Error, Result};

impl Pix {
    /// Pixel word at `(x, y)`, `None` outside the image.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if y >= self.height() {
            return None;
        }
        self.row_data(y).get(x as usize).copied()
    }

    /// Channels at `(x, y)` of a 32 bpp image.
    ///
    /// `None` outside the image or when the image is gray.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if self.depth() != PixelDepth::Bit32 {
            return None;
        }
        self.get_pixel(x, y).map(color::extract_rgb)
    }
}

impl PixMut {
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.data()[y as usize * self.width() as usize + x as usize])
    }

    /// Store `val` at `(x, y)`, masked to the image depth.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] outside the image.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Store `val` at `(x, y)`; panics outside the image.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let val = val & self.depth().max_value();
        self.row_data_mut(y)[x as usize] = val;
    }

    /// Store an opaque color at `(x, y)` of a 32 bpp image.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        if self.depth() != PixelDepth::Bit32 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }
        self.set_pixel(x, y, color::compose_rgb(r, g, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_back() {
        let mut pm = Pix::new(5, 4, PixelDepth::Bit8).unwrap().to_mut();
        pm.set_pixel(4, 3, 200).unwrap();
        assert_eq!(pm.get_pixel(4, 3), Some(200));
        let pix: Pix = pm.into();
        assert_eq!(pix.get_pixel(4, 3), Some(200));
        assert_eq!(pix.get_pixel(5, 3), None);
        assert_eq!(pix.get_pixel(0, 4), None);
    }

    #[test]
    fn test_write_outside() {
        let mut pm = Pix::new(5, 4, PixelDepth::Bit8).unwrap().to_mut();
        assert!(matches!(
            pm.set_pixel(5, 0, 1),
            Err(Error::IndexOutOfBounds { x: 5, y: 0, .. })
        ));
    }

    #[test]
    fn test_gray_masked() {
        let mut pm = Pix::new(2, 2, PixelDepth::Bit8).unwrap().to_mut();
        pm.set_pixel_unchecked(0, 0, 0x1ff);
        assert_eq!(pm.get_pixel(0, 0), Some(0xff));
    }

    #[test]
    fn test_rgb() {
        let mut pm = Pix::new(3, 3, PixelDepth::Bit32).unwrap().to_mut();
        pm.set_rgb(1, 2, 10, 20, 30).unwrap();
        let pix: Pix = pm.into();
        assert_eq!(pix.get_rgb(1, 2), Some((10, 20, 30)));

        let gray = Pix::new(3, 3, PixelDepth::Bit8).unwrap();
        assert_eq!(gray.get_rgb(0, 0), None);
        assert!(matches!(
            gray.to_mut().set_rgb(0, 0, 1, 2, 3),
            Err(Error::UnsupportedDepth(8))
        ));
    }
}
