//! Reference histogram sets
//!
//! A [`ReferenceSet`] holds the learned samples for both classes: a list
//! of background histograms and a list of object histograms. Samples are
//! only ever appended; classification reads the set through a shared
//! reference, so a set that is no longer being extended can be used from
//! several threads at once.

use crate::tiling::{EdgePolicy, TileGrid};
use crate::{SegmentError, SegmentResult};
use chromaseg_color::{ColorDistribution, ColorError, color_distribution};
use chromaseg_core::{Box, Pix};
use std::fmt;

/// Class of a reference sample or of a classified tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Part of the scene without the object
    Background,
    /// Part of the object to detect
    Object,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Background => write!(f, "background"),
            Label::Object => write!(f, "object"),
        }
    }
}

/// Options for capturing background samples over a tile grid
#[derive(Debug, Clone)]
pub struct GridCaptureOptions {
    /// Edge length of each captured tile (default: 128)
    pub tile_size: u32,
}

impl Default for GridCaptureOptions {
    fn default() -> Self {
        Self { tile_size: 128 }
    }
}

/// Learned background and object samples
#[derive(Debug, Clone, Default)]
pub struct ReferenceSet {
    background: Vec<ColorDistribution>,
    object: Vec<ColorDistribution>,
}

impl ReferenceSet {
    /// Create a set with no samples in either class.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished histogram to the background set.
    pub fn add_background(&mut self, hist: ColorDistribution) -> SegmentResult<()> {
        self.push(Label::Background, hist)
    }

    /// Append a finished histogram to the object set.
    pub fn add_object(&mut self, hist: ColorDistribution) -> SegmentResult<()> {
        self.push(Label::Object, hist)
    }

    /// Append a histogram to the set for `label`.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidState`] when `hist` still holds raw counts.
    /// The set is left unchanged.
    pub fn push(&mut self, label: Label, hist: ColorDistribution) -> SegmentResult<()> {
        if !hist.is_finished() {
            let err = ColorError::InvalidState("reference samples must be normalized");
            return Err(err.into());
        }
        let set = match label {
            Label::Background => &mut self.background,
            Label::Object => &mut self.object,
        };
        set.push(hist);
        log::debug!("{} reference set now holds {} samples", label, set.len());
        Ok(())
    }

    /// Capture the histogram of `region` as a background sample.
    pub fn add_background_sample(&mut self, pix: &Pix, region: &Box) -> SegmentResult<()> {
        self.add_background(color_distribution(pix, region)?)
    }

    /// Capture the histogram of `region` as an object sample.
    pub fn add_object_sample(&mut self, pix: &Pix, region: &Box) -> SegmentResult<()> {
        self.add_object(color_distribution(pix, region)?)
    }

    /// Add one background sample per full tile of `pix`.
    ///
    /// Partial tiles at the right and bottom edges are skipped. Returns
    /// the number of samples added, which is zero when the image is
    /// smaller than one tile.
    pub fn add_background_grid(
        &mut self,
        pix: &Pix,
        options: &GridCaptureOptions,
    ) -> SegmentResult<usize> {
        let grid = TileGrid::new(pix.width(), pix.height(), options.tile_size, EdgePolicy::Skip)?;
        if grid.is_empty() {
            log::warn!(
                "{}x{} image holds no full {}px tile, no background captured",
                pix.width(),
                pix.height(),
                options.tile_size
            );
            return Ok(0);
        }

        // Build every histogram before touching the set
        let hists = grid
            .tiles()
            .map(|(_, _, rect)| color_distribution(pix, &rect))
            .collect::<Result<Vec<_>, _>>()?;
        let added = hists.len();
        self.background.extend(hists);
        log::debug!(
            "captured {} background tiles of {}px, background set now holds {} samples",
            added,
            options.tile_size,
            self.background.len()
        );
        Ok(added)
    }

    /// Background samples in insertion order
    pub fn background(&self) -> &[ColorDistribution] {
        &self.background
    }

    /// Object samples in insertion order
    pub fn object(&self) -> &[ColorDistribution] {
        &self.object
    }

    /// Samples of one class
    pub fn samples(&self, label: Label) -> &[ColorDistribution] {
        match label {
            Label::Background => &self.background,
            Label::Object => &self.object,
        }
    }

    /// Number of samples of one class
    pub fn len(&self, label: Label) -> usize {
        self.samples(label).len()
    }

    /// Check whether both classes hold no samples
    pub fn is_empty(&self) -> bool {
        self.background.is_empty() && self.object.is_empty()
    }

    /// Check whether both classes hold at least one sample
    pub fn is_ready(&self) -> bool {
        !self.background.is_empty() && !self.object.is_empty()
    }

    /// Fail with [`SegmentError::EmptyReferenceSet`] naming the first
    /// empty class, background checked first.
    pub fn ensure_ready(&self) -> SegmentResult<()> {
        for label in [Label::Background, Label::Object] {
            if self.samples(label).is_empty() {
                return Err(SegmentError::EmptyReferenceSet(label));
            }
        }
        Ok(())
    }
}
