use crate::core::{BinEdges, CreationError, FillError};
use crate::st::Histogram;
use crate::tests::util::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[test]
fn edges_from_range() {
    let h = Histogram::new("pt", (0.0, 10.0), 5, true).unwrap();
    assert_eq!(h.edges().as_slice(), &[0.0, 2.5, 5.0, 7.5, 10.0]);
    assert_eq!(h.values(), &[0, 0, 0, 0]);
    assert_eq!(h.name(), "pt");
}

#[test]
fn repeated_fills_accumulate() {
    init_logging();
    let mut h = Histogram::new("pt", (0.0, 10.0), 5, true).unwrap();
    h.fill(&[1.0, 1.0, 6.0]);
    assert_eq!(h.values(), &[2, 0, 1, 0]);
    h.fill(&[9.0]);
    assert_eq!(h.values(), &[2, 0, 1, 1]);
    assert_eq!(h.total(), 4);
    assert_eq!(h.get_count_at_value(1.5), Some(2));
    assert_eq!(h.get_count_at_index(4), None);
}

#[test]
fn empty_fill_changes_nothing() {
    let mut h = Histogram::new("pt", (0.0, 10.0), 11, false).unwrap();
    h.fill(&[3.0, 4.5]);
    let before = h.values().to_vec();
    h.fill(&[]);
    assert_eq!(h.values(), &before[..]);
}

#[test]
fn nan_and_out_of_range_are_dropped() {
    let mut h = Histogram::new("eta", (-2.5, 2.5), 6, true).unwrap();
    h.fill(&[f64::NAN, -3.0, 2.6, f64::INFINITY, f64::NEG_INFINITY]);
    assert_eq!(h.total(), 0);
    h.fill(&[-2.5, 2.5]);
    assert_eq!(h.values(), &[1, 0, 0, 0, 1]);
}

#[test]
fn chunked_fills_match_single_fill() {
    let values = samples(7, 5000, -1.0, 1.0);

    let mut whole = Histogram::new("x", (-1.0, 1.0), 41, true).unwrap();
    whole.fill(&values);

    let mut chunks = random_chunks(11, &values);
    chunks.shuffle(&mut StdRng::seed_from_u64(13));
    let mut chunked = Histogram::new("x", (-1.0, 1.0), 41, true).unwrap();
    for chunk in chunks {
        chunked.fill(chunk);
    }

    assert_eq!(whole.values(), chunked.values());
    assert!(whole.total() > 0);
}

#[test]
fn edges_never_change() {
    let mut h = Histogram::new("x", (0.0, 1.0), 3, true).unwrap();
    let edges = h.edges().clone();
    h.fill(&samples(3, 100, 0.0, 1.0));
    assert_eq!(h.edges(), &edges);
}

#[test]
fn add_merges_identical_binning() {
    let mut a = Histogram::new("x", (0.0, 4.0), 5, true).unwrap();
    let mut b = Histogram::new("x", (0.0, 4.0), 5, true).unwrap();
    a.fill(&[0.5, 1.5]);
    b.fill(&[1.5, 3.5]);
    succ!(a.add(&b));
    assert_eq!(a.values(), &[1, 2, 0, 1]);

    let other = Histogram::new("x", (0.0, 8.0), 5, true).unwrap();
    assert_eq!(a.add(&other), Err(FillError::EdgesMismatch));
    assert_eq!(a.values(), &[1, 2, 0, 1]);
}

#[test]
fn construction_rejects_degenerate_ranges() {
    assert_eq!(
        Histogram::new("x", (0.0, 1.0), 1, true).unwrap_err(),
        CreationError::TooFewEdges { requested: 1 }
    );
    assert!(Histogram::new("x", (2.0, 1.0), 10, true).is_err());
    assert_eq!(BinEdges::linspace(0.0, 1.0, 100).unwrap().n_bins(), 99);
}

#[test]
fn uneven_range_bins_consistently_with_edges() {
    let mut h = Histogram::new("x", (0.0, 1.0), 11, true).unwrap();
    let edges = h.edges().as_slice().to_vec();
    h.fill(&edges);
    assert_eq!(h.values(), &[1, 1, 1, 1, 1, 1, 1, 1, 1, 2]);
    assert_approx_eq!(edges[3], 0.3, 1e-12);
}
