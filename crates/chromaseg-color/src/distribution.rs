//! Quantized RGB color distributions
//!
//! A [`ColorDistribution`] is a coarse 3-D histogram over the colors of a
//! pixel region: each 8-bit channel is quantized into [`BINS_PER_CHANNEL`]
//! bins, giving [`NUM_BINS`] cells in total.
//!
//! # Lifecycle
//!
//! 1. Created empty (all cells zero, no samples)
//! 2. Colors accumulated with [`ColorDistribution::add`]
//! 3. Normalized exactly once with [`ColorDistribution::finished`], after
//!    which every cell is the proportion of samples that fell into it
//! 4. Compared with [`ColorDistribution::distance`]
//!
//! [`ColorDistribution::reset`] returns a histogram to step 1 from any state.

use crate::{ColorError, ColorResult};
use chromaseg_core::color;
use std::io::Write;

/// Number of quantization bins per color channel
pub const BINS_PER_CHANNEL: usize = 8;

/// Width of one bin in channel units (256 / 8)
pub const BIN_WIDTH: u8 = 32;

/// Total number of histogram cells
pub const NUM_BINS: usize = BINS_PER_CHANNEL * BINS_PER_CHANNEL * BINS_PER_CHANNEL;

/// Map an 8-bit channel value to its bin index in `0..BINS_PER_CHANNEL`.
///
/// Values past the last bin are clamped into it.
#[inline]
pub fn quantize(value: u8) -> usize {
    ((value / BIN_WIDTH) as usize).min(BINS_PER_CHANNEL - 1)
}

/// Flat cell index of the bin triple `(rb, gb, bb)`.
#[inline]
fn cell_index(rb: usize, gb: usize, bb: usize) -> usize {
    (rb * BINS_PER_CHANNEL + gb) * BINS_PER_CHANNEL + bb
}

/// Quantized color histogram of a pixel region
#[derive(Debug, Clone, PartialEq)]
pub struct ColorDistribution {
    /// Exact sample count of each cell
    counts: [u32; NUM_BINS],
    /// Cell values: `counts` as floats before normalization, proportions after
    data: [f32; NUM_BINS],
    /// Number of samples accumulated
    count: u32,
    /// Whether `finished()` has normalized the cells
    finished: bool,
}

impl Default for ColorDistribution {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorDistribution {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self {
            counts: [0; NUM_BINS],
            data: [0.0; NUM_BINS],
            count: 0,
            finished: false,
        }
    }

    /// Clear every cell and the sample counter.
    pub fn reset(&mut self) {
        self.counts.fill(0);
        self.data.fill(0.0);
        self.count = 0;
        self.finished = false;
    }

    /// Accumulate one color sample.
    ///
    /// Adding to a finished histogram mixes counts with proportions;
    /// call [`reset`](Self::reset) before reusing one.
    pub fn add(&mut self, r: u8, g: u8, b: u8) {
        let idx = cell_index(quantize(r), quantize(g), quantize(b));
        self.counts[idx] += 1;
        self.data[idx] = self.counts[idx] as f32;
        self.count += 1;
    }

    /// Accumulate one packed 32-bit RGBA pixel (alpha is ignored).
    #[inline]
    pub fn add_pixel(&mut self, pixel: u32) {
        let (r, g, b) = color::extract_rgb(pixel);
        self.add(r, g, b);
    }

    /// Normalize the cells into proportions of the sample count.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidState`] when no samples were added,
    /// or when the histogram is already normalized. The cells are left
    /// untouched in both cases.
    pub fn finished(&mut self) -> ColorResult<()> {
        if self.finished {
            return Err(ColorError::InvalidState("histogram already normalized"));
        }
        if self.count == 0 {
            return Err(ColorError::InvalidState("cannot normalize an empty histogram"));
        }
        let n = f64::from(self.count);
        for (cell, &c) in self.data.iter_mut().zip(&self.counts) {
            *cell = (f64::from(c) / n) as f32;
        }
        self.finished = true;
        Ok(())
    }

    /// Chi-square-like distance to another histogram.
    ///
    /// Sums `(a - b)^2 / (a + b)` over all cell pairs, skipping cells that
    /// are empty in both. The result is non-negative, symmetric, and zero
    /// for identical histograms. Both sides are expected to be finished;
    /// raw counts give a distance that scales with the sample count.
    pub fn distance(&self, other: &ColorDistribution) -> f32 {
        self.data
            .iter()
            .zip(other.data.iter())
            .filter(|&(&a, &b)| a + b != 0.0)
            .map(|(&a, &b)| {
                let d = a - b;
                d * d / (a + b)
            })
            .sum()
    }

    /// Number of samples accumulated since the last reset.
    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Whether the histogram has been normalized.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Value of the cell for bin indices `(rb, gb, bb)`.
    ///
    /// Returns `None` if any index is `>= BINS_PER_CHANNEL`.
    pub fn get(&self, rb: usize, gb: usize, bb: usize) -> Option<f32> {
        if rb >= BINS_PER_CHANNEL || gb >= BINS_PER_CHANNEL || bb >= BINS_PER_CHANNEL {
            return None;
        }
        Some(self.data[cell_index(rb, gb, bb)])
    }

    /// Exact number of samples in the cell `(rb, gb, bb)`.
    ///
    /// Unlike [`get`](Self::get) this stays exact past 2^24 samples per
    /// cell and is unaffected by normalization.
    pub fn bin_count(&self, rb: usize, gb: usize, bb: usize) -> Option<u32> {
        if rb >= BINS_PER_CHANNEL || gb >= BINS_PER_CHANNEL || bb >= BINS_PER_CHANNEL {
            return None;
        }
        Some(self.counts[cell_index(rb, gb, bb)])
    }

    /// Value of the cell that the color `(r, g, b)` falls into.
    pub fn value_for(&self, r: u8, g: u8, b: u8) -> f32 {
        self.data[cell_index(quantize(r), quantize(g), quantize(b))]
    }

    /// All cells, red-major then green then blue.
    #[inline]
    pub fn bins(&self) -> &[f32; NUM_BINS] {
        &self.data
    }

    /// Sum of all cells (1.0 for a finished, non-empty histogram).
    pub fn total(&self) -> f32 {
        self.data.iter().sum()
    }

    /// Number of cells holding a non-zero value.
    pub fn occupied_bins(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0.0).count()
    }

    /// Print every non-empty cell as `R=r, G=g, B=b: value`.
    pub fn write_bins(&self, writer: &mut impl Write) -> std::io::Result<()> {
        writeln!(
            writer,
            "ColorDistribution: {} samples, {} bins occupied{}",
            self.count,
            self.occupied_bins(),
            if self.finished { ", normalized" } else { "" }
        )?;
        for rb in 0..BINS_PER_CHANNEL {
            for gb in 0..BINS_PER_CHANNEL {
                for bb in 0..BINS_PER_CHANNEL {
                    let v = self.data[cell_index(rb, gb, bb)];
                    if v != 0.0 {
                        writeln!(writer, "R={}, G={}, B={}: {}", rb, gb, bb, v)?;
                    }
                }
            }
        }
        Ok(())
    }
}
