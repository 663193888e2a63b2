//! Rectangles
//!
//! A [`Box`] covers columns `x..x + w` and rows `y..y + h`. The right and
//! bottom edges are exclusive, so the rectangle between the corners
//! `(x1, y1)` and `(x2, y2)` is `Box { x: x1, y: y1, w: x2 - x1, h: y2 - y1 }`.

use crate::error::{Error, Result};

/// Axis-aligned rectangle in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Box {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Box {
    /// Build a rectangle, refusing negative sizes.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Result<Self> {
        if w < 0 || h < 0 {
            return Err(Error::InvalidParameter(format!(
                "negative box size {}x{}",
                w, h
            )));
        }
        Ok(Self { x, y, w, h })
    }

    /// Build a rectangle as given; a negative size yields an empty box.
    pub const fn new_unchecked(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Exclusive right edge, saturating at `i32::MAX`
    #[inline]
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    /// Exclusive bottom edge, saturating at `i32::MAX`
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    /// Pixel count, zero for empty boxes
    #[inline]
    pub fn area(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            self.w as i64 * self.h as i64
        }
    }

    /// True when the box covers no pixel
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        (self.x..self.right()).contains(&x) && (self.y..self.bottom()).contains(&y)
    }

    /// True when `other` lies inside `self` (edges may coincide)
    pub fn contains_box(&self, other: &Box) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// True when every pixel of the box exists in a `width` x `height` image.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        x >= 0
            && y >= 0
            && x + i64::from(self.w) <= i64::from(width)
            && y + i64::from(self.h) <= i64::from(height)
    }

    /// Overlap of two boxes, `None` if they share no pixel.
    pub fn intersect(&self, other: &Box) -> Option<Box> {
        let (x0, y0) = (self.x.max(other.x), self.y.max(other.y));
        let (x1, y1) = (
            self.right().min(other.right()),
            self.bottom().min(other.bottom()),
        );
        (x0 < x1 && y0 < y1).then(|| Box::new_unchecked(x0, y0, x1 - x0, y1 - y0))
    }

    /// Part of the box inside a `width` x `height` image.
    pub fn clip(&self, width: u32, height: u32) -> Option<Box> {
        let frame = Box::new_unchecked(
            0,
            0,
            width.min(i32::MAX as u32) as i32,
            height.min(i32::MAX as u32) as i32,
        );
        self.intersect(&frame)
    }
}
