use crate::accumulator::{AccumulatorKind, ReadableAccumulator, Values};
use crate::core::*;
use crate::serialization::Compression;
use crate::st::counts::CountsBuffer;
use crate::st::efficiency_histogram::EfficiencyView;
use crate::st::histogram::check_same_edges;

/// Coordinate arrays `(xs, ys)` of one 2D dataset.
pub type Points<'a> = (&'a [f64], &'a [f64]);

/// 2D pass/total pair reporting a plain element-wise ratio.
///
/// No uncertainty is derived in 2D.
#[derive(Clone, Debug)]
pub struct EffHistogram2D {
    name: String,
    edges: BinEdges,
    passed: CountsBuffer<f64>,
    total: CountsBuffer<f64>,
    compression: Compression,
}

impl EffHistogram2D {
    pub fn new<S: Into<String>>(name: S, binrange: (f64, f64), bins: usize, compress: bool) -> Result<EffHistogram2D, CreationError> {
        let edges = BinEdges::linspace(binrange.0, binrange.1, bins)?;
        Ok(EffHistogram2D::with_edges(name.into(), edges, Compression::from_flag(compress)))
    }

    pub(crate) fn with_edges(name: String, edges: BinEdges, compression: Compression) -> EffHistogram2D {
        let n_bins = edges.n_bins();
        debug!("created 2D efficiency histogram '{}' with {}x{} bins", name, n_bins, n_bins);
        EffHistogram2D {
            name,
            edges,
            passed: CountsBuffer::zeros(n_bins, n_bins),
            total: CountsBuffer::zeros(n_bins, n_bins),
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

    pub fn compression(&self) -> Compression {
        self.compression
    }

    pub fn passed(&self) -> &CountsBuffer<f64> {
        &self.passed
    }

    pub fn total(&self) -> &CountsBuffer<f64> {
        &self.total
    }

    /// `passed / total` per cell. Empty cells come out NaN (or infinite when
    /// something passed), never as an error.
    pub fn values(&self) -> EfficiencyView<CountsBuffer<f64>> {
        EfficiencyView {
            efficiency: self.passed.combine(&self.total, |p, t| p / t),
            uncertainty: None,
        }
    }

    /// Bins both point sets jointly. Both are binned before anything is
    /// added, so a coordinate length mismatch in either leaves counts intact.
    pub fn fill(&mut self, passed: Points<'_>, total: Points<'_>) -> Result<(), FillError> {
        trace!("filling 2D efficiency histogram '{}' with {}/{} points", self.name, passed.0.len(), total.0.len());
        let binned_passed = binning::histogram_2d(passed.0, passed.1, &self.edges, &self.edges)?;
        let binned_total = binning::histogram_2d(total.0, total.1, &self.edges, &self.edges)?;

        for (count, added) in self.passed.as_mut_slice().iter_mut().zip(binned_passed) {
            *count += added;
        }
        for (count, added) in self.total.as_mut_slice().iter_mut().zip(binned_total) {
            *count += added;
        }
        Ok(())
    }

    /// Dynamic-arity fill; anything but exactly `[passed, total]` is rejected
    /// with `InvalidArgument`.
    pub fn fill_datasets(&mut self, datasets: &[Points<'_>]) -> Result<(), FillError> {
        match *datasets {
            [passed, total] => self.fill(passed, total),
            _ => {
                debug!("rejected fill of '{}': {} datasets", self.name, datasets.len());
                Err(FillError::wrong_arity("EffHistogram2D::fill", datasets.len()))
            }
        }
    }

    pub fn add(&mut self, other: &EffHistogram2D) -> Result<(), FillError> {
        check_same_edges(&self.name, &self.edges, &other.edges)?;
        self.passed.add(&other.passed)?;
        self.total.add(&other.total)
    }
}

impl ReadableAccumulator for EffHistogram2D {
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
        AccumulatorKind::Efficiency2D
    }
    fn read_values(&self) -> Values<'_> {
        Values::EfficiencyMatrix(self.values())
    }
}
