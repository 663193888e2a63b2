//! Depth conversion

use super::{Pix, PixelDepth};
use crate::color;
use crate::error::Result;

impl Pix {
    /// Promote to 32 bpp color, copying each gray value into all channels.
    ///
    /// Color images come back as a clone sharing the same buffer.
    pub fn convert_to_32(&self) -> Result<Pix> {
        if self.depth() == PixelDepth::Bit32 {
            return Ok(self.clone());
        }
        let mut rgb = Pix::new(self.width(), self.height(), PixelDepth::Bit32)?.to_mut();
        rgb.data_mut()
            .iter_mut()
            .zip(self.data().iter().map(|&v| v as u8))
            .for_each(|(dst, v)| *dst = color::compose_rgb(v, v, v));
        Ok(rgb.into())
    }
}
