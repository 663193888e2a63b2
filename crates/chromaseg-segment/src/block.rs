//! Block-wise background/object classification
//!
//! The image is cut into square blocks. Each block's color distribution
//! is compared with both reference sets, and the block is labeled by
//! whichever set holds the nearer sample. The decisions are kept in a
//! [`BlockLabels`] grid; [`paint_labels`] turns them into a flat-filled
//! copy of the image, one solid color per block.
//!
//! # Algorithm
//!
//! For each block:
//! 1. Build the normalized histogram of the block
//! 2. `db` = nearest distance to the background set
//! 3. `do` = nearest distance to the object set
//! 4. Background if `db < do`, object otherwise (ties go to object)

use crate::nearest::min_distance;
use crate::tiling::{EdgePolicy, TileGrid};
use crate::{Label, ReferenceSet, SegmentError, SegmentResult};
use chromaseg_color::{ColorDistribution, ColorError, color_distribution};
use chromaseg_core::{Box, Color, Pix, PixelDepth};

/// Options for the block classifier
#[derive(Debug, Clone)]
pub struct SegmentOptions {
    /// Block edge length in pixels (default: 8)
    pub block_size: u32,
    /// Treatment of partial blocks at the right and bottom edges
    /// (default: [`EdgePolicy::Clip`])
    pub edge_policy: EdgePolicy,
    /// Fill color for background blocks (default: white)
    pub background_color: Color,
    /// Fill color for object blocks (default: red)
    pub object_color: Color,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            block_size: 8,
            edge_policy: EdgePolicy::Clip,
            background_color: Color::WHITE,
            object_color: Color::RED,
        }
    }
}

impl SegmentOptions {
    /// Create options with a given block size and default colors.
    pub fn with_block_size(block_size: u32) -> Self {
        Self {
            block_size,
            ..Default::default()
        }
    }

    /// Fill color for `label`.
    pub fn color_for(&self, label: Label) -> Color {
        match label {
            Label::Background => self.background_color,
            Label::Object => self.object_color,
        }
    }

    fn validate(&self) -> SegmentResult<()> {
        if self.block_size == 0 {
            return Err(SegmentError::InvalidParameters(
                "block_size must be > 0".into(),
            ));
        }
        Ok(())
    }
}

/// Outcome for one block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockDecision {
    pub label: Label,
    /// Distance to the nearest background sample
    pub dist_background: f32,
    /// Distance to the nearest object sample
    pub dist_object: f32,
}

/// Classify a single finished histogram against both reference sets.
pub fn classify_distribution(
    hist: &ColorDistribution,
    refs: &ReferenceSet,
) -> SegmentResult<BlockDecision> {
    let dist_background = min_distance(hist, refs.background(), Label::Background)?;
    let dist_object = min_distance(hist, refs.object(), Label::Object)?;
    let label = if dist_background < dist_object {
        Label::Background
    } else {
        Label::Object
    };
    Ok(BlockDecision {
        label,
        dist_background,
        dist_object,
    })
}

/// Per-block decisions over one image, in row-major order
#[derive(Debug, Clone)]
pub struct BlockLabels {
    grid: TileGrid,
    decisions: Vec<BlockDecision>,
}

impl BlockLabels {
    /// Width of the classified image
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    /// Height of the classified image
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// Number of block columns
    pub fn cols(&self) -> u32 {
        self.grid.cols()
    }

    /// Number of block rows
    pub fn rows(&self) -> u32 {
        self.grid.rows()
    }

    /// Number of classified blocks
    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    /// Check whether no block was classified
    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }

    /// Decision for block `(col, row)`
    pub fn get(&self, col: u32, row: u32) -> Option<&BlockDecision> {
        if col >= self.grid.cols() || row >= self.grid.rows() {
            return None;
        }
        self.decisions
            .get(row as usize * self.grid.cols() as usize + col as usize)
    }

    /// Label of block `(col, row)`
    pub fn label(&self, col: u32, row: u32) -> Option<Label> {
        self.get(col, row).map(|d| d.label)
    }

    /// Image rectangle covered by block `(col, row)`
    pub fn block_rect(&self, col: u32, row: u32) -> Option<Box> {
        self.grid.tile(col, row)
    }

    /// Number of blocks carrying `label`
    pub fn count(&self, label: Label) -> usize {
        self.decisions.iter().filter(|d| d.label == label).count()
    }

    /// Iterate `(rect, decision)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Box, &BlockDecision)> + '_ {
        self.grid
            .tiles()
            .zip(self.decisions.iter())
            .map(|((_, _, rect), d)| (rect, d))
    }
}

/// Classify every block of `pix` against `refs`.
///
/// Both reference sets are checked before the first block is visited.
///
/// # Errors
///
/// - [`SegmentError::InvalidParameters`] if `block_size` is 0
/// - [`SegmentError::EmptyReferenceSet`] if either set has no samples
/// - [`SegmentError::Color`] if `pix` is not 32 bpp
pub fn classify_blocks(
    pix: &Pix,
    refs: &ReferenceSet,
    options: &SegmentOptions,
) -> SegmentResult<BlockLabels> {
    options.validate()?;
    refs.ensure_ready()?;
    if pix.depth() != PixelDepth::Bit32 {
        return Err(ColorError::UnsupportedDepth {
            expected: "32 bpp",
            actual: pix.depth().bits(),
        }
        .into());
    }

    let grid = TileGrid::new(
        pix.width(),
        pix.height(),
        options.block_size,
        options.edge_policy,
    )?;
    let mut decisions = Vec::with_capacity(grid.len());
    for (col, row, rect) in grid.tiles() {
        let hist = color_distribution(pix, &rect)?;
        let decision = classify_distribution(&hist, refs)?;
        log::trace!(
            "block ({}, {}): {} (bg {:.4}, obj {:.4})",
            col,
            row,
            decision.label,
            decision.dist_background,
            decision.dist_object
        );
        decisions.push(decision);
    }

    let labels = BlockLabels { grid, decisions };
    log::debug!(
        "classified {}x{} blocks of {}px: {} background, {} object",
        labels.cols(),
        labels.rows(),
        options.block_size,
        labels.count(Label::Background),
        labels.count(Label::Object)
    );
    Ok(labels)
}

/// Paint each labeled block of a copy of `pix` with its label color.
///
/// Pixels outside every block (the remainder strip under
/// [`EdgePolicy::Skip`]) keep their original value. `pix` itself is
/// not modified.
pub fn paint_labels(
    pix: &Pix,
    labels: &BlockLabels,
    options: &SegmentOptions,
) -> SegmentResult<Pix> {
    if pix.width() != labels.width() || pix.height() != labels.height() {
        return Err(SegmentError::InvalidParameters(format!(
            "labels cover {}x{}, image is {}x{}",
            labels.width(),
            labels.height(),
            pix.width(),
            pix.height()
        )));
    }
    let mut out = pix.to_mut();
    for (rect, decision) in labels.iter() {
        out.fill_rect_color(&rect, options.color_for(decision.label))?;
    }
    Ok(out.into())
}

/// Classify the blocks of `pix` and return the painted copy.
///
/// On error nothing is painted and no image is returned.
///
/// # Example
///
/// ```
/// use chromaseg_color::color_distribution;
/// use chromaseg_core::{Box, Color, Pix};
/// use chromaseg_segment::{ReferenceSet, SegmentOptions, segment_image};
///
/// let whole = Box::new_unchecked(0, 0, 8, 8);
/// let mut refs = ReferenceSet::new();
/// let bg = Pix::new_filled(8, 8, Color::BLUE).unwrap();
/// refs.add_background(color_distribution(&bg, &whole).unwrap()).unwrap();
/// let obj = Pix::new_filled(8, 8, Color::RED).unwrap();
/// refs.add_object(color_distribution(&obj, &whole).unwrap()).unwrap();
///
/// let out = segment_image(&bg, &refs, &SegmentOptions::default()).unwrap();
/// assert_eq!(out.get_rgb(3, 3), Some((255, 255, 255)));
/// ```
pub fn segment_image(pix: &Pix, refs: &ReferenceSet, options: &SegmentOptions) -> SegmentResult<Pix> {
    let labels = classify_blocks(pix, refs, options)?;
    paint_labels(pix, &labels, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hist(colors: &[(u8, u8, u8)]) -> ColorDistribution {
        let mut cd = ColorDistribution::new();
        for &(r, g, b) in colors {
            cd.add(r, g, b);
        }
        cd.finished().unwrap();
        cd
    }

    fn blue_red_refs() -> ReferenceSet {
        let mut refs = ReferenceSet::new();
        refs.add_background(hist(&[(0, 0, 255)])).unwrap();
        refs.add_object(hist(&[(255, 0, 0)])).unwrap();
        refs
    }

    /// Blue image with a red square covering blocks (1, 1) at block size 4
    fn blue_with_red_block() -> Pix {
        let pix = Pix::new_filled(12, 12, Color::BLUE).unwrap();
        let mut pm = pix.try_into_mut().unwrap();
        pm.fill_rect_color(&Box::new_unchecked(4, 4, 4, 4), Color::RED)
            .unwrap();
        pm.into()
    }

    #[test]
    fn test_default_options() {
        let opts = SegmentOptions::default();
        assert_eq!(opts.block_size, 8);
        assert_eq!(opts.edge_policy, EdgePolicy::Clip);
        assert_eq!(opts.color_for(Label::Background), Color::WHITE);
        assert_eq!(opts.color_for(Label::Object), Color::RED);
    }

    #[test]
    fn test_classify_distribution() {
        let refs = blue_red_refs();
        let d = classify_distribution(&hist(&[(0, 0, 250)]), &refs).unwrap();
        assert_eq!(d.label, Label::Background);
        assert_eq!(d.dist_background, 0.0);
        let d = classify_distribution(&hist(&[(250, 5, 5)]), &refs).unwrap();
        assert_eq!(d.label, Label::Object);
    }

    #[test]
    fn test_tie_goes_to_object() {
        let refs = blue_red_refs();
        // Green is equally far (2.0) from both references
        let d = classify_distribution(&hist(&[(0, 255, 0)]), &refs).unwrap();
        assert_eq!(d.dist_background, d.dist_object);
        assert_eq!(d.label, Label::Object);
    }

    #[test]
    fn test_classify_blocks() {
        let pix = blue_with_red_block();
        let labels =
            classify_blocks(&pix, &blue_red_refs(), &SegmentOptions::with_block_size(4)).unwrap();
        assert_eq!((labels.cols(), labels.rows()), (3, 3));
        assert_eq!(labels.label(1, 1), Some(Label::Object));
        assert_eq!(labels.count(Label::Object), 1);
        assert_eq!(labels.count(Label::Background), 8);
        assert_eq!(labels.block_rect(1, 1), Some(Box::new_unchecked(4, 4, 4, 4)));
        assert_eq!(labels.get(3, 0), None);
    }

    #[test]
    fn test_segment_paints_flat_blocks() {
        let pix = blue_with_red_block();
        let out =
            segment_image(&pix, &blue_red_refs(), &SegmentOptions::with_block_size(4)).unwrap();
        assert_eq!(out.get_rgb(0, 0), Some((255, 255, 255)));
        assert_eq!(out.get_rgb(11, 11), Some((255, 255, 255)));
        assert_eq!(out.get_rgb(5, 6), Some((255, 0, 0)));
        // Input untouched
        assert_eq!(pix.get_rgb(0, 0), Some((0, 0, 255)));
    }

    #[test]
    fn test_empty_object_set_paints_nothing() {
        let pix = blue_with_red_block();
        let mut refs = ReferenceSet::new();
        refs.add_background(hist(&[(0, 0, 255)])).unwrap();
        let r = segment_image(&pix, &refs, &SegmentOptions::default());
        assert!(matches!(
            r,
            Err(SegmentError::EmptyReferenceSet(Label::Object))
        ));
    }

    #[test]
    fn test_zero_block_size() {
        let pix = blue_with_red_block();
        let r = classify_blocks(&pix, &blue_red_refs(), &SegmentOptions::with_block_size(0));
        assert!(matches!(r, Err(SegmentError::InvalidParameters(_))));
    }

    #[test]
    fn test_gray_rejected() {
        let pix = Pix::new(8, 8, PixelDepth::Bit8).unwrap();
        let r = classify_blocks(&pix, &blue_red_refs(), &SegmentOptions::default());
        assert!(matches!(
            r,
            Err(SegmentError::Color(ColorError::UnsupportedDepth { actual: 8, .. }))
        ));
    }

    #[test]
    fn test_skip_leaves_remainder() {
        let pix = Pix::new_filled(10, 6, Color::BLUE).unwrap();
        let opts = SegmentOptions {
            block_size: 4,
            edge_policy: EdgePolicy::Skip,
            ..Default::default()
        };
        let labels = classify_blocks(&pix, &blue_red_refs(), &opts).unwrap();
        assert_eq!(labels.len(), 2);
        let out = paint_labels(&pix, &labels, &opts).unwrap();
        assert_eq!(out.get_rgb(7, 3), Some((255, 255, 255)));
        assert_eq!(out.get_rgb(9, 0), Some((0, 0, 255)));
        assert_eq!(out.get_rgb(0, 5), Some((0, 0, 255)));
    }

    #[test]
    fn test_paint_size_mismatch() {
        let pix = blue_with_red_block();
        let refs = blue_red_refs();
        let labels = classify_blocks(&pix, &refs, &SegmentOptions::with_block_size(4)).unwrap();
        let other = Pix::new_filled(8, 8, Color::BLUE).unwrap();
        let r = paint_labels(&other, &labels, &SegmentOptions::default());
        assert!(matches!(r, Err(SegmentError::InvalidParameters(_))));
    }
}
