use crate::accumulator::{AccumulatorKind, ReadableAccumulator, Values};
use crate::core::*;
use crate::serialization::Compression;
use crate::st::counts::CountsBuffer;

/// One-dimensional running histogram.
#[derive(Clone, Debug)]
pub struct Histogram {
    name: String,
    edges: BinEdges,
    counts: CountsBuffer<u64>,
    compression: Compression,
}

// read methods
impl Histogram {
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline(always)]
    pub fn edges(&self) -> &BinEdges {
        &self.edges
    }

    /// Current per-bin counts.
    #[inline(always)]
    pub fn values(&self) -> &[u64] {
        self.counts.as_slice()
    }

    pub fn counts(&self) -> &CountsBuffer<u64> {
        &self.counts
    }

    pub fn compression(&self) -> Compression {
        self.compression
    }

    pub fn get_count_at_index(&self, index: usize) -> Option<u64> {
        self.counts.get(0, index).copied()
    }

    pub fn get_count_at_value(&self, value: f64) -> Option<u64> {
        self.edges.find_bin(value).and_then(|idx| self.get_count_at_index(idx))
    }

    /// Sum over all bins; samples that fell outside the range are not included.
    pub fn total(&self) -> u64 {
        self.counts.total()
    }
}

// write methods
impl Histogram {
    /// `bins` evenly spaced edges over `binrange`, i.e. `bins - 1` bins.
    pub fn new<S: Into<String>>(name: S, binrange: (f64, f64), bins: usize, compress: bool) -> Result<Histogram, CreationError> {
        let edges = BinEdges::linspace(binrange.0, binrange.1, bins)?;
        Ok(Histogram::with_edges(name.into(), edges, Compression::from_flag(compress)))
    }

    pub(crate) fn with_edges(name: String, edges: BinEdges, compression: Compression) -> Histogram {
        debug!("created histogram '{}' with {} bins over [{}, {}]", name, edges.n_bins(), edges.low(), edges.high());
        let counts = CountsBuffer::zeros(1, edges.n_bins());
        Histogram {
            name,
            edges,
            counts,
            compression,
        }
    }

    /// Bins `values` and adds the result to the running counts.
    pub fn fill(&mut self, values: &[f64]) {
        trace!("filling histogram '{}' with {} samples", self.name, values.len());
        let binned = binning::histogram(values, &self.edges);
        for (count, added) in self.counts.as_mut_slice().iter_mut().zip(binned) {
            *count += added;
        }
    }

    /// Merges counts accumulated elsewhere under identical binning.
    pub fn add(&mut self, other: &Histogram) -> Result<(), FillError> {
        check_same_edges(&self.name, &self.edges, &other.edges)?;
        self.counts.add(&other.counts)
    }
}

pub(crate) fn check_same_edges(name: &str, edges: &BinEdges, other: &BinEdges) -> Result<(), FillError> {
    if edges != other {
        debug!("rejected merge into '{}': bin edges differ", name);
        return Err(FillError::EdgesMismatch);
    }
    Ok(())
}

impl ReadableAccumulator for Histogram {
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
        AccumulatorKind::Histogram
    }
    fn read_values(&self) -> Values<'_> {
        Values::Counts(&self.counts)
    }
}
