//! Regular tiling of an image into square blocks
//!
//! Tiles start at the origin and step by `tile_size` in both directions.
//! When the image size is not a multiple of the tile size, the
//! [`EdgePolicy`] decides what happens to the remainder.

use crate::{SegmentError, SegmentResult};
use chromaseg_core::Box;

/// Treatment of tiles that would extend past the image boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Keep partial tiles, cut down to the part inside the image
    #[default]
    Clip,
    /// Drop partial tiles; the remainder strip is not covered
    Skip,
}

/// Grid of tiles over a `width` x `height` image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    width: u32,
    height: u32,
    tile_size: u32,
    policy: EdgePolicy,
    cols: u32,
    rows: u32,
}

impl TileGrid {
    /// Lay out tiles of `tile_size` over an image.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::InvalidParameters`] if `tile_size` is 0.
    pub fn new(width: u32, height: u32, tile_size: u32, policy: EdgePolicy) -> SegmentResult<Self> {
        if tile_size == 0 {
            return Err(SegmentError::InvalidParameters(
                "tile size must be > 0".into(),
            ));
        }
        let (cols, rows) = match policy {
            EdgePolicy::Clip => (width.div_ceil(tile_size), height.div_ceil(tile_size)),
            EdgePolicy::Skip => (width / tile_size, height / tile_size),
        };
        Ok(Self {
            width,
            height,
            tile_size,
            policy,
            cols,
            rows,
        })
    }

    /// Width of the tiled image
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the tiled image
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of tile columns
    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Number of tile rows
    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of tiles
    #[inline]
    pub fn len(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Check whether no tile fits
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Edge policy in effect
    #[inline]
    pub fn policy(&self) -> EdgePolicy {
        self.policy
    }

    /// Nominal tile edge length
    #[inline]
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Rectangle of tile `(col, row)`, always inside the image.
    ///
    /// Returns `None` if the tile index is outside the grid.
    pub fn tile(&self, col: u32, row: u32) -> Option<Box> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        let x = col * self.tile_size;
        let y = row * self.tile_size;
        let w = self.tile_size.min(self.width - x);
        let h = self.tile_size.min(self.height - y);
        Some(Box::new_unchecked(x as i32, y as i32, w as i32, h as i32))
    }

    /// Iterate `(col, row, rect)` in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = (u32, u32, Box)> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.cols).filter_map(move |col| self.tile(col, row).map(|b| (col, row, b)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_multiple() {
        let grid = TileGrid::new(16, 8, 4, EdgePolicy::Clip).unwrap();
        assert_eq!((grid.cols(), grid.rows()), (4, 2));
        assert!(grid.tiles().all(|(_, _, b)| b.w == 4 && b.h == 4));
        let skip = TileGrid::new(16, 8, 4, EdgePolicy::Skip).unwrap();
        assert_eq!(skip.len(), grid.len());
    }

    #[test]
    fn test_clip_remainder() {
        let grid = TileGrid::new(10, 7, 4, EdgePolicy::Clip).unwrap();
        assert_eq!((grid.cols(), grid.rows()), (3, 2));
        assert_eq!(grid.tile(2, 1), Some(Box::new_unchecked(8, 4, 2, 3)));
        let covered: i64 = grid.tiles().map(|(_, _, b)| b.area()).sum();
        assert_eq!(covered, 70);
        assert!(grid.tiles().all(|(_, _, b)| b.fits_within(10, 7)));
    }

    #[test]
    fn test_skip_remainder() {
        let grid = TileGrid::new(10, 7, 4, EdgePolicy::Skip).unwrap();
        assert_eq!((grid.cols(), grid.rows()), (2, 1));
        assert!(grid.tiles().all(|(_, _, b)| b.w == 4 && b.h == 4));
        assert_eq!(grid.tile(2, 0), None);
    }

    #[test]
    fn test_tile_larger_than_image() {
        let clip = TileGrid::new(3, 3, 8, EdgePolicy::Clip).unwrap();
        assert_eq!(clip.tile(0, 0), Some(Box::new_unchecked(0, 0, 3, 3)));
        let skip = TileGrid::new(3, 3, 8, EdgePolicy::Skip).unwrap();
        assert!(skip.is_empty());
        assert_eq!(skip.tiles().count(), 0);
    }

    #[test]
    fn test_zero_tile_size() {
        assert!(matches!(
            TileGrid::new(10, 10, 0, EdgePolicy::Clip),
            Err(SegmentError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_row_major_order() {
        let grid = TileGrid::new(4, 4, 2, EdgePolicy::Clip).unwrap();
        let order: Vec<(u32, u32)> = grid.tiles().map(|(c, r, _)| (c, r)).collect();
        assert_eq!(order, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }
}
