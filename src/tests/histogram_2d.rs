use crate::core::FillError;
use crate::st::Histogram2D;
use crate::tests::util::*;

#[test]
fn joint_binning_over_square_grid() {
    init_logging();
    let mut h = Histogram2D::new("mass_plane", (0.0, 3.0), 4, true).unwrap();
    assert_eq!(h.values().shape(), (3, 3));

    succ!(h.fill(&[0.5, 2.5, 2.5, 3.0, 3.5], &[1.5, 0.5, 0.5, 3.0, 0.5]));
    assert_eq!(h.values().get(0, 1), Some(&1.0));
    assert_eq!(h.values().get(2, 0), Some(&2.0));
    assert_eq!(h.values().get(2, 2), Some(&1.0));
    assert_eq!(h.values().total(), 4.0);
}

#[test]
fn coordinate_length_mismatch_leaves_counts() {
    let mut h = Histogram2D::new("mass_plane", (0.0, 3.0), 4, true).unwrap();
    succ!(h.fill(&[0.5], &[0.5]));
    assert_eq!(
        h.fill(&[0.5, 1.5], &[0.5]),
        Err(FillError::ShapeMismatch { expected: (2, 2), actual: (2, 1) })
    );
    assert_eq!(h.values().total(), 1.0);
}

#[test]
fn chunked_points_match_single_fill() {
    let xs = samples(31, 4000, -1.0, 1.0);
    let ys = samples(32, 4000, -1.0, 1.0);

    let mut whole = Histogram2D::new("xy", (-1.0, 1.0), 9, false).unwrap();
    succ!(whole.fill(&xs, &ys));

    let mut chunked = Histogram2D::new("xy", (-1.0, 1.0), 9, false).unwrap();
    for (cx, cy) in xs.chunks(333).zip(ys.chunks(333)) {
        succ!(chunked.fill(cx, cy));
    }
    assert_eq!(whole.values(), chunked.values());

    let mut merged = Histogram2D::new("xy", (-1.0, 1.0), 9, false).unwrap();
    succ!(merged.add(&whole));
    assert_eq!(merged.values(), whole.values());
}
