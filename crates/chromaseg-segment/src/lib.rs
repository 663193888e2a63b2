//! Chromaseg Segment - Background/object segmentation by color statistics
//!
//! This crate turns learned color samples into a block-wise segmentation:
//!
//! - **Reference sets** ([`reference`]): append-only background and object
//!   histogram lists, with helpers that capture samples from images
//! - **Nearest distance** ([`nearest`]): closest reference to a query
//!   histogram
//! - **Block classification** ([`block`]): per-block labels and the
//!   flat-filled result image
//! - **Tiling** ([`tiling`]) and **sample layouts** ([`layout`])
//!
//! # Example
//!
//! ```
//! use chromaseg_core::{Box, Color, Pix};
//! use chromaseg_segment::{Label, ReferenceSet, SegmentOptions, classify_blocks};
//!
//! let scene = Pix::new_filled(16, 16, Color::BLUE).unwrap();
//! let object = Pix::new_filled(16, 16, Color::RED).unwrap();
//! let whole = Box::new_unchecked(0, 0, 16, 16);
//!
//! let mut refs = ReferenceSet::new();
//! refs.add_background_sample(&scene, &whole).unwrap();
//! refs.add_object_sample(&object, &whole).unwrap();
//!
//! let labels = classify_blocks(&object, &refs, &SegmentOptions::default()).unwrap();
//! assert_eq!(labels.count(Label::Object), 4);
//! ```

pub mod block;
pub mod error;
pub mod layout;
pub mod nearest;
pub mod reference;
pub mod tiling;

// Re-export dependent crates
pub use chromaseg_color;
pub use chromaseg_core;

pub use block::{
    BlockDecision, BlockLabels, SegmentOptions, classify_blocks, classify_distribution,
    paint_labels, segment_image,
};
pub use error::{SegmentError, SegmentResult};
pub use layout::{DEFAULT_SQUARE, SampleLayout};
pub use nearest::{min_distance, nearest_sample};
pub use reference::{GridCaptureOptions, Label, ReferenceSet};
pub use tiling::{EdgePolicy, TileGrid};
