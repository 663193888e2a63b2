//! Nearest-sample queries against a list of reference histograms

use crate::{Label, SegmentError, SegmentResult};
use chromaseg_color::ColorDistribution;

/// Index and distance of the reference closest to `query`.
///
/// On equal distances the earliest sample wins. `label` names the set in
/// the error returned when `samples` is empty.
pub fn nearest_sample(
    query: &ColorDistribution,
    samples: &[ColorDistribution],
    label: Label,
) -> SegmentResult<(usize, f32)> {
    samples
        .iter()
        .enumerate()
        .map(|(i, s)| (i, query.distance(s)))
        .fold(None, |best: Option<(usize, f32)>, (i, d)| match best {
            Some((_, bd)) if bd <= d => best,
            _ => Some((i, d)),
        })
        .ok_or(SegmentError::EmptyReferenceSet(label))
}

/// Smallest distance from `query` to any sample in `samples`.
pub fn min_distance(
    query: &ColorDistribution,
    samples: &[ColorDistribution],
    label: Label,
) -> SegmentResult<f32> {
    nearest_sample(query, samples, label).map(|(_, d)| d)
}
