//! Standard sample rectangles for an operator-driven capture session
//!
//! A frame is sampled in three places: a small square at its centre for
//! spot background samples, the left half as the object sample, and the
//! right half as the region it is compared against.

use crate::{SegmentError, SegmentResult};
use chromaseg_core::Box;

/// Default edge length of the centre sampling square
pub const DEFAULT_SQUARE: u32 = 50;

/// Sample rectangles of one frame size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleLayout {
    /// Square of the requested size centred in the frame
    pub center: Box,
    /// Columns `0..width/2`, full height
    pub left_half: Box,
    /// Columns `width/2..width`, full height
    pub right_half: Box,
}

impl SampleLayout {
    /// Derive the sample rectangles for a `width` x `height` frame.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::InvalidParameters`] if `square` is 0 or does
    /// not fit in the frame, or if the frame is less than 2 pixels wide.
    pub fn for_frame(width: u32, height: u32, square: u32) -> SegmentResult<Self> {
        if square == 0 || square > width || square > height {
            return Err(SegmentError::InvalidParameters(format!(
                "sample square {} does not fit in {}x{}",
                square, width, height
            )));
        }
        if width < 2 {
            return Err(SegmentError::InvalidParameters(format!(
                "frame width {} cannot be split in halves",
                width
            )));
        }

        let (w, h, s) = (width as i32, height as i32, square as i32);
        let cx = (w / 2 - s / 2).clamp(0, w - s);
        let cy = (h / 2 - s / 2).clamp(0, h - s);
        let mid = w / 2;
        Ok(Self {
            center: Box::new_unchecked(cx, cy, s, s),
            left_half: Box::new_unchecked(0, 0, mid, h),
            right_half: Box::new_unchecked(mid, 0, w - mid, h),
        })
    }
}
