//! The histogram routine every accumulator bins through.

use crate::core::edges::BinEdges;
use crate::core::errors::FillError;

/// Per-bin counts of `values` against `edges`.
///
/// NaN and out-of-range samples are dropped.
pub fn histogram(values: &[f64], edges: &BinEdges) -> Vec<u64> {
    let mut counts = vec![0_u64; edges.n_bins()];
    for &value in values {
        if let Some(idx) = edges.find_bin(value) {
            counts[idx] += 1;
        }
    }
    counts
}

/// Joint counts of the points `(xs[k], ys[k])`, row-major with x along rows.
///
/// A point is dropped when either coordinate has no bin.
pub fn histogram_2d(xs: &[f64], ys: &[f64], x_edges: &BinEdges, y_edges: &BinEdges) -> Result<Vec<f64>, FillError> {
    if xs.len() != ys.len() {
        return Err(FillError::ShapeMismatch {
            expected: (2, xs.len()),
            actual: (2, ys.len()),
        });
    }
    let n_cols = y_edges.n_bins();
    let mut counts = vec![0.0_f64; x_edges.n_bins() * n_cols];
    for (&x, &y) in xs.iter().zip(ys) {
        if let (Some(i), Some(j)) = (x_edges.find_bin(x), y_edges.find_bin(y)) {
            counts[i * n_cols + j] += 1.0;
        }
    }
    Ok(counts)
}
