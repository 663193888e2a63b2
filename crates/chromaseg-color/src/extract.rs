//! Region histogram extraction
//!
//! Builds a finished [`ColorDistribution`] from a rectangular region of a
//! 32 bpp image. Regions are half-open and must lie inside the image;
//! nothing is clipped here.

use crate::distribution::ColorDistribution;
use crate::{ColorError, ColorResult};
use chromaseg_core::{Box, Pix, PixelDepth};

/// Build the normalized color distribution of `region` in `pix`.
///
/// # Errors
///
/// - [`ColorError::UnsupportedDepth`] if `pix` is not 32 bpp
/// - [`ColorError::EmptyRegion`] if `region` covers no pixels
/// - [`ColorError::OutOfBounds`] if `region` reaches outside the image
///
/// # Example
///
/// ```
/// use chromaseg_color::color_distribution;
/// use chromaseg_core::{Box, Color, Pix};
///
/// let pix = Pix::new_filled(4, 4, Color::RED).unwrap();
/// let hist = color_distribution(&pix, &Box::new_unchecked(0, 0, 2, 2)).unwrap();
/// assert_eq!(hist.count(), 4);
/// assert_eq!(hist.value_for(255, 0, 0), 1.0);
/// ```
pub fn color_distribution(pix: &Pix, region: &Box) -> ColorResult<ColorDistribution> {
    check_region(pix, region)?;

    let mut cd = ColorDistribution::new();
    let x0 = region.x as usize;
    let x1 = region.right() as usize;
    for y in region.y..region.bottom() {
        for &pixel in &pix.row_data(y as u32)[x0..x1] {
            cd.add_pixel(pixel);
        }
    }
    cd.finished()?;
    Ok(cd)
}

/// Build the normalized color distribution between two corners.
///
/// Covers columns `top_left.0..bottom_right.0` and rows
/// `top_left.1..bottom_right.1`. Corners in the wrong order describe an
/// empty region and are rejected, never swapped. Corners too far apart
/// for an `i32` size are [`ColorError::OutOfBounds`].
pub fn color_distribution_between(
    pix: &Pix,
    top_left: (i32, i32),
    bottom_right: (i32, i32),
) -> ColorResult<ColorDistribution> {
    let w = bottom_right.0.checked_sub(top_left.0);
    let h = bottom_right.1.checked_sub(top_left.1);
    match (w, h) {
        (Some(w), Some(h)) => {
            color_distribution(pix, &Box::new_unchecked(top_left.0, top_left.1, w, h))
        }
        _ => Err(ColorError::OutOfBounds {
            region: Box::new_unchecked(
                top_left.0,
                top_left.1,
                bottom_right.0.saturating_sub(top_left.0),
                bottom_right.1.saturating_sub(top_left.1),
            ),
            width: pix.width(),
            height: pix.height(),
        }),
    }
}

/// Distance between the color distributions of two regions of one image.
///
/// Diagnostic helper for checking how distinguishable two areas of a
/// frame are before using them as samples.
pub fn compare_regions(pix: &Pix, a: &Box, b: &Box) -> ColorResult<f32> {
    let ha = color_distribution(pix, a)?;
    let hb = color_distribution(pix, b)?;
    let dist = ha.distance(&hb);
    log::debug!("region {:?} vs {:?}: distance {:.4}", a, b, dist);
    Ok(dist)
}

fn check_region(pix: &Pix, region: &Box) -> ColorResult<()> {
    if pix.depth() != PixelDepth::Bit32 {
        return Err(ColorError::UnsupportedDepth {
            expected: "32 bpp",
            actual: pix.depth().bits(),
        });
    }
    if region.is_empty() {
        return Err(ColorError::EmptyRegion(*region));
    }
    if !region.fits_within(pix.width(), pix.height()) {
        return Err(ColorError::OutOfBounds {
            region: *region,
            width: pix.width(),
            height: pix.height(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromaseg_core::Color;

    fn two_tone(w: u32, h: u32) -> Pix {
        // Left half red, right half blue
        let pix = Pix::new_filled(w, h, Color::RED).unwrap();
        let mut pm = pix.try_into_mut().unwrap();
        pm.fill_rect(
            &Box::new_unchecked((w / 2) as i32, 0, (w - w / 2) as i32, h as i32),
            Color::BLUE.to_pixel32(),
        );
        pm.into()
    }

    #[test]
    fn test_full_region() {
        let pix = two_tone(8, 4);
        let cd = color_distribution(&pix, &Box::new_unchecked(0, 0, 8, 4)).unwrap();
        assert_eq!(cd.count(), 32);
        assert_eq!(cd.value_for(255, 0, 0), 0.5);
        assert_eq!(cd.value_for(0, 0, 255), 0.5);
    }

    #[test]
    fn test_sub_region() {
        let pix = two_tone(8, 4);
        let cd = color_distribution(&pix, &Box::new_unchecked(1, 1, 2, 2)).unwrap();
        assert_eq!(cd.count(), 4);
        assert_eq!(cd.occupied_bins(), 1);
        assert_eq!(cd.value_for(255, 0, 0), 1.0);
    }

    #[test]
    fn test_empty_region() {
        let pix = two_tone(8, 4);
        let r = color_distribution(&pix, &Box::new_unchecked(2, 2, 0, 3));
        assert!(matches!(r, Err(ColorError::EmptyRegion(_))));
        let r = color_distribution_between(&pix, (4, 2), (2, 3));
        assert!(matches!(r, Err(ColorError::EmptyRegion(_))));
    }

    #[test]
    fn test_out_of_bounds() {
        let pix = two_tone(8, 4);
        let r = color_distribution(&pix, &Box::new_unchecked(6, 0, 4, 4));
        assert!(matches!(
            r,
            Err(ColorError::OutOfBounds {
                width: 8,
                height: 4,
                ..
            })
        ));
        let r = color_distribution(&pix, &Box::new_unchecked(-1, 0, 2, 2));
        assert!(matches!(r, Err(ColorError::OutOfBounds { .. })));
    }

    #[test]
    fn test_extreme_coordinates() {
        let pix = two_tone(4, 4);
        let r = color_distribution(&pix, &Box::new_unchecked(i32::MAX, 0, 2, 2));
        assert!(matches!(r, Err(ColorError::OutOfBounds { .. })));
        let r = color_distribution(&pix, &Box::new_unchecked(0, i32::MAX - 1, 2, i32::MAX));
        assert!(matches!(r, Err(ColorError::OutOfBounds { .. })));
        let r = color_distribution_between(&pix, (i32::MIN, 0), (i32::MAX, 2));
        assert!(matches!(r, Err(ColorError::OutOfBounds { .. })));
        let r = color_distribution_between(&pix, (0, i32::MAX), (2, i32::MIN));
        assert!(matches!(r, Err(ColorError::OutOfBounds { .. })));
    }

    #[test]
    fn test_gray_rejected() {
        let pix = Pix::new(4, 4, PixelDepth::Bit8).unwrap();
        let r = color_distribution(&pix, &Box::new_unchecked(0, 0, 2, 2));
        assert!(matches!(
            r,
            Err(ColorError::UnsupportedDepth { actual: 8, .. })
        ));
    }

    #[test]
    fn test_compare_regions() {
        let pix = two_tone(8, 4);
        let left = Box::new_unchecked(0, 0, 4, 4);
        let right = Box::new_unchecked(4, 0, 4, 4);
        let d = compare_regions(&pix, &left, &right).unwrap();
        assert!((d - 2.0).abs() < 1e-6);
        assert_eq!(compare_regions(&pix, &left, &left).unwrap(), 0.0);
    }
}
