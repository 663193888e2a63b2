//! Chromaseg - Color-histogram segmentation for Rust
//!
//! Separates an object from its background by comparing coarse RGB
//! histograms. An operator samples regions of a frame as background or
//! object; each block of a later frame is then labeled by whichever set
//! holds the nearest sample, and painted with that label's color.
//!
//! # Overview
//!
//! - Image I/O (PNG, binary PNM) in [`io`]
//! - Quantized color distributions and region extraction in [`color`]
//! - Reference sets and block classification in [`segment`]
//!
//! # Example
//!
//! ```
//! use chromaseg::segment::{ReferenceSet, SampleLayout, SegmentOptions, segment_image};
//! use chromaseg::{Box, Color, Pix};
//!
//! // Red object on the left half of a white frame
//! let frame = Pix::new_filled(64, 32, Color::WHITE).unwrap();
//! let mut pm = frame.try_into_mut().unwrap();
//! pm.fill_rect_color(&Box::new_unchecked(0, 0, 32, 32), Color::RED).unwrap();
//! let frame: Pix = pm.into();
//!
//! let layout = SampleLayout::for_frame(64, 32, 8).unwrap();
//! let mut refs = ReferenceSet::new();
//! refs.add_background_sample(&frame, &layout.right_half).unwrap();
//! refs.add_object_sample(&frame, &layout.left_half).unwrap();
//!
//! let out = segment_image(&frame, &refs, &SegmentOptions::default()).unwrap();
//! assert_eq!(out.get_rgb(4, 4), Some((255, 0, 0)));
//! assert_eq!(out.get_rgb(60, 4), Some((255, 255, 255)));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use chromaseg_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use chromaseg_color as color;
pub use chromaseg_io as io;
pub use chromaseg_segment as segment;
