//! Block classification regression test
//!
//! Tests reference sets, nearest-distance queries and block-wise
//! segmentation on synthetic scenes.

use chromaseg_color::color_distribution;
use chromaseg_core::{Box, Color, Pix};
use chromaseg_io::ImageFormat;
use chromaseg_segment::{
    EdgePolicy, GridCaptureOptions, Label, ReferenceSet, SampleLayout, SegmentError,
    SegmentOptions, classify_blocks, min_distance, nearest_sample, paint_labels, segment_image,
};
use chromaseg_test::RegParams;

/// Blue scene with a red rectangle
fn create_scene(w: u32, h: u32, object: Box) -> Pix {
    let pix = Pix::new_filled(w, h, Color::BLUE).unwrap();
    let mut pix_mut = pix.try_into_mut().unwrap();
    pix_mut.fill_rect_color(&object, Color::RED).unwrap();
    pix_mut.into()
}

fn scene_refs() -> ReferenceSet {
    let whole = Box::new_unchecked(0, 0, 16, 16);
    let mut refs = ReferenceSet::new();
    refs.add_background_sample(&Pix::new_filled(16, 16, Color::BLUE).unwrap(), &whole)
        .unwrap();
    refs.add_object_sample(&Pix::new_filled(16, 16, Color::RED).unwrap(), &whole)
        .unwrap();
    refs
}

#[test]
fn block_reg() {
    let mut rp = RegParams::new("block");

    let object = Box::new_unchecked(16, 8, 16, 16);
    let pix = create_scene(64, 32, object);
    let refs = scene_refs();
    let opts = SegmentOptions::default();

    let labels = classify_blocks(&pix, &refs, &opts).unwrap();
    rp.compare_values(8.0, labels.cols() as f64, 0.0);
    rp.compare_values(4.0, labels.rows() as f64, 0.0);
    rp.compare_values(4.0, labels.count(Label::Object) as f64, 0.0);
    rp.compare_values(28.0, labels.count(Label::Background) as f64, 0.0);

    for (rect, decision) in labels.iter() {
        let expected = if object.contains_box(&rect) {
            Label::Object
        } else {
            Label::Background
        };
        rp.check(decision.label == expected, "block label");
    }

    let painted = paint_labels(&pix, &labels, &opts).unwrap();
    let expected = {
        let mut pm = Pix::new_filled(64, 32, Color::WHITE).unwrap().to_mut();
        pm.fill_rect_color(&object, Color::RED).unwrap();
        Pix::from(pm)
    };
    rp.compare_pix(&expected, &painted);
    rp.compare_pix(&painted, &segment_image(&pix, &refs, &opts).unwrap());

    if rp.display() {
        rp.write_pix_and_check(&painted, ImageFormat::Png).unwrap();
    }

    assert!(rp.cleanup());
}

#[test]
fn block_edges_reg() {
    let mut rp = RegParams::new("block_edges");

    // 20x13 is not a multiple of 8 in either direction
    let pix = create_scene(20, 13, Box::new_unchecked(16, 8, 4, 5));
    let refs = scene_refs();

    let clip = SegmentOptions::default();
    let labels = classify_blocks(&pix, &refs, &clip).unwrap();
    rp.compare_values(6.0, labels.len() as f64, 0.0);
    rp.check(labels.label(2, 1) == Some(Label::Object), "clipped corner block");
    let out = paint_labels(&pix, &labels, &clip).unwrap();
    rp.check(out.get_rgb(19, 12) == Some((255, 0, 0)), "corner painted");
    rp.check(out.get_rgb(17, 2) == Some((255, 255, 255)), "edge column painted");

    let skip = SegmentOptions {
        edge_policy: EdgePolicy::Skip,
        ..Default::default()
    };
    let labels = classify_blocks(&pix, &refs, &skip).unwrap();
    rp.compare_values(2.0, labels.len() as f64, 0.0);
    rp.compare_values(0.0, labels.count(Label::Object) as f64, 0.0);
    let out = paint_labels(&pix, &labels, &skip).unwrap();
    rp.check(out.get_rgb(19, 12) == Some((255, 0, 0)), "remainder keeps object");
    rp.check(out.get_rgb(17, 2) == Some((0, 0, 255)), "remainder keeps scene");
    rp.check(out.get_rgb(3, 3) == Some((255, 255, 255)), "full block painted");

    assert!(rp.cleanup());
}

#[test]
fn reference_reg() {
    let mut rp = RegParams::new("reference");
    let pix = create_scene(64, 32, Box::new_unchecked(0, 0, 32, 32));

    // A sample compared with a set containing itself is at distance 0
    let sample = color_distribution(&pix, &Box::new_unchecked(4, 4, 8, 8)).unwrap();
    let mut refs = ReferenceSet::new();
    refs.add_background_sample(&pix, &Box::new_unchecked(40, 0, 8, 8))
        .unwrap();
    refs.add_object(sample.clone()).unwrap();
    let d = min_distance(&sample, refs.object(), Label::Object).unwrap();
    rp.compare_values(0.0, d as f64, 0.0);
    let (idx, d) = nearest_sample(&sample, refs.background(), Label::Background).unwrap();
    rp.compare_values(0.0, idx as f64, 0.0);
    rp.compare_values(2.0, d as f64, 1e-6);

    // An empty object set fails before anything is painted
    let mut bg_only = ReferenceSet::new();
    bg_only
        .add_background_sample(&pix, &Box::new_unchecked(40, 0, 8, 8))
        .unwrap();
    let r = segment_image(&pix, &bg_only, &SegmentOptions::default());
    rp.check(
        matches!(r, Err(SegmentError::EmptyReferenceSet(Label::Object))),
        "empty object set",
    );
    rp.check(pix.get_rgb(40, 0) == Some((0, 0, 255)), "input untouched");

    // Grid capture takes only full tiles
    let frame = Pix::new_filled(300, 260, Color::WHITE).unwrap();
    let mut grid_refs = ReferenceSet::new();
    let added = grid_refs
        .add_background_grid(&frame, &GridCaptureOptions::default())
        .unwrap();
    rp.compare_values(4.0, added as f64, 0.0);
    rp.compare_values(4.0, grid_refs.len(Label::Background) as f64, 0.0);
    rp.check(!grid_refs.is_ready(), "object set still empty");

    // Operator layout: object on the left, compared with the right
    let layout = SampleLayout::for_frame(64, 32, 8).unwrap();
    let mut session = ReferenceSet::new();
    session.add_background_sample(&pix, &layout.center).unwrap();
    session.add_object_sample(&pix, &layout.left_half).unwrap();
    session.add_background_sample(&pix, &layout.right_half).unwrap();
    rp.check(session.is_ready(), "session ready");
    rp.compare_values(2.0, session.len(Label::Background) as f64, 0.0);

    assert!(rp.cleanup());
}
