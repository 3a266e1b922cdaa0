use crate::accumulator::{AccumulatorKind, ReadableAccumulator, Values};
use crate::core::*;
use crate::serialization::Compression;
use crate::st::counts::CountsBuffer;
use crate::st::histogram::check_same_edges;

/// Joint 2D histogram over `(edges, edges)`, counting in floats.
#[derive(Clone, Debug)]
pub struct Histogram2D {
    name: String,
    edges: BinEdges,
    counts: CountsBuffer<f64>,
    compression: Compression,
}

impl Histogram2D {
    pub fn new<S: Into<String>>(name: S, binrange: (f64, f64), bins: usize, compress: bool) -> Result<Histogram2D, CreationError> {
        let edges = BinEdges::linspace(binrange.0, binrange.1, bins)?;
        Ok(Histogram2D::with_edges(name.into(), edges, Compression::from_flag(compress)))
    }

    pub(crate) fn with_edges(name: String, edges: BinEdges, compression: Compression) -> Histogram2D {
        let n_bins = edges.n_bins();
        debug!("created 2D histogram '{}' with {}x{} bins", name, n_bins, n_bins);
        Histogram2D {
            name,
            edges,
            counts: CountsBuffer::zeros(n_bins, n_bins),
            compression,
        }
    }

    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline(always)]
    pub fn edges(&self) -> &BinEdges {
        &self.edges
    }

    /// N x N counts, x along rows.
    #[inline(always)]
    pub fn values(&self) -> &CountsBuffer<f64> {
        &self.counts
    }

    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// Bins the points `(xs[k], ys[k])`; unequal lengths fail with
    /// `ShapeMismatch` and leave the counts untouched.
    pub fn fill(&mut self, xs: &[f64], ys: &[f64]) -> Result<(), FillError> {
        trace!("filling 2D histogram '{}' with {} points", self.name, xs.len());
        let binned = binning::histogram_2d(xs, ys, &self.edges, &self.edges)?;
        for (count, added) in self.counts.as_mut_slice().iter_mut().zip(binned) {
            *count += added;
        }
        Ok(())
    }

    pub fn add(&mut self, other: &Histogram2D) -> Result<(), FillError> {
        check_same_edges(&self.name, &self.edges, &other.edges)?;
        self.counts.add(&other.counts)
    }
}

impl ReadableAccumulator for Histogram2D {
    fn name(&self) -> &str {
        &self.name
    }
    fn edges(&self) -> &BinEdges {
        &self.edges
    }
    fn compression(&self) -> Compression {
        self.compression
    }
    fn kind(&self) -> AccumulatorKind {
        AccumulatorKind::Histogram2D
    }
    fn read_values(&self) -> Values<'_> {
        Values::Matrix(&self.counts)
    }
}
