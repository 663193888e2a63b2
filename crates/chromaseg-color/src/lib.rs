//! Chromaseg Color - Quantized color histograms
//!
//! This crate provides the color model used to tell background from
//! object:
//!
//! - **Color distributions** ([`distribution`]): 8x8x8-bin RGB histograms
//!   with normalization and a chi-square-like distance
//! - **Region extraction** ([`extract`]): histogram of a rectangle of an
//!   image, and a region-vs-region comparison helper

pub mod distribution;
pub mod error;
pub mod extract;

// Re-export core types
pub use chromaseg_core;

pub use distribution::{BIN_WIDTH, BINS_PER_CHANNEL, ColorDistribution, NUM_BINS, quantize};
pub use error::{ColorError, ColorResult};
pub use extract::{color_distribution, color_distribution_between, compare_regions};
