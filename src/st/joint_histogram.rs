use crate::accumulator::{AccumulatorKind, ReadableAccumulator, Values};
use crate::core::*;
use crate::serialization::Compression;
use crate::st::counts::CountsBuffer;
use crate::st::histogram::check_same_edges;

/// Several datasets binned against the same edges, one row each.
///
/// The first fill fixes the number of rows. Until then the counts are a
/// single zero row.
#[derive(Clone, Debug)]
pub struct JointHistogram {
    name: String,
    edges: BinEdges,
    counts: CountsBuffer<u64>,
    rows_fixed: bool,
    compression: Compression,
}

impl JointHistogram {
    pub fn new<S: Into<String>>(name: S, binrange: (f64, f64), bins: usize, compress: bool) -> Result<JointHistogram, CreationError> {
        let edges = BinEdges::linspace(binrange.0, binrange.1, bins)?;
        Ok(JointHistogram::with_edges(name.into(), edges, Compression::from_flag(compress)))
    }

    pub(crate) fn with_edges(name: String, edges: BinEdges, compression: Compression) -> JointHistogram {
        debug!("created joint histogram '{}' with {} bins", name, edges.n_bins());
        let counts = CountsBuffer::zeros(1, edges.n_bins());
        JointHistogram {
            name,
            edges,
            counts,
            rows_fixed: false,
            compression,
        }
    }

    pub(crate) fn with_fixed_rows(name: String, edges: BinEdges, compression: Compression, rows: usize) -> JointHistogram {
        let counts = CountsBuffer::zeros(rows, edges.n_bins());
        JointHistogram {
            name,
            edges,
            counts,
            rows_fixed: true,
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

    /// Counts with one row per dataset.
    #[inline(always)]
    pub fn values(&self) -> &CountsBuffer<u64> {
        &self.counts
    }

    pub fn row(&self, row: usize) -> Option<&[u64]> {
        self.counts.row(row)
    }

    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// Bins every dataset and adds the stacked rows to the running counts.
    ///
    /// Fails with `ShapeMismatch`, leaving the counts untouched, when the
    /// number of datasets differs from the first fill or is zero.
    pub fn fill(&mut self, datasets: &[&[f64]]) -> Result<(), FillError> {
        let n_bins = self.edges.n_bins();
        if datasets.is_empty() {
            debug!("rejected fill of '{}': no datasets", self.name);
            return Err(FillError::ShapeMismatch {
                expected: self.counts.shape(),
                actual: (0, n_bins),
            });
        }
        trace!("filling joint histogram '{}' with {} datasets", self.name, datasets.len());

        let binned: Vec<u64> = datasets
            .iter()
            .flat_map(|dataset| binning::histogram(dataset, &self.edges))
            .collect();
        let update = CountsBuffer::from_rows(datasets.len(), n_bins, binned)?;

        if !self.rows_fixed {
            self.counts = CountsBuffer::zeros(datasets.len(), n_bins);
            self.rows_fixed = true;
        }
        self.counts.add(&update).map_err(|e| {
            debug!("rejected fill of '{}': {}", self.name, e);
            e
        })
    }

    pub fn add(&mut self, other: &JointHistogram) -> Result<(), FillError> {
        check_same_edges(&self.name, &self.edges, &other.edges)?;
        if !other.rows_fixed {
            return Ok(());
        }
        if !self.rows_fixed {
            self.counts = CountsBuffer::zeros(other.counts.rows(), self.edges.n_bins());
            self.rows_fixed = true;
        }
        self.counts.add(&other.counts)
    }
}

impl ReadableAccumulator for JointHistogram {
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
        AccumulatorKind::Joint
    }
    fn read_values(&self) -> Values<'_> {
        Values::Counts(&self.counts)
    }
}
