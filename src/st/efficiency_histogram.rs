use crate::accumulator::{AccumulatorKind, ReadableAccumulator, Values};
use crate::core::*;
use crate::serialization::Compression;
use crate::st::counts::CountsBuffer;
use crate::st::joint_histogram::JointHistogram;

const PASSED_ROW: usize = 0;
const TOTAL_ROW: usize = 1;

/// Efficiency derived from accumulated pass/total counts.
///
/// Never stored; every read recomputes it from the current totals.
#[derive(Clone, Debug, PartialEq)]
pub struct EfficiencyView<T> {
    pub efficiency: T,
    /// Absent for the 2D variant.
    pub uncertainty: Option<T>,
}

/// Pass/total histogram pair reporting efficiency with uncertainty.
#[derive(Clone, Debug)]
pub struct EffHistogram {
    inner: JointHistogram,
}

impl EffHistogram {
    pub fn new<S: Into<String>>(name: S, binrange: (f64, f64), bins: usize, compress: bool) -> Result<EffHistogram, CreationError> {
        let edges = BinEdges::linspace(binrange.0, binrange.1, bins)?;
        Ok(EffHistogram::with_edges(name.into(), edges, Compression::from_flag(compress)))
    }

    pub(crate) fn with_edges(name: String, edges: BinEdges, compression: Compression) -> EffHistogram {
        debug!("created efficiency histogram '{}' with {} bins", name, edges.n_bins());
        EffHistogram {
            inner: JointHistogram::with_fixed_rows(name, edges, compression, 2),
        }
    }

    #[inline(always)]
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    #[inline(always)]
    pub fn edges(&self) -> &BinEdges {
        self.inner.edges()
    }

    pub fn compression(&self) -> Compression {
        self.inner.compression()
    }

    /// Raw accumulated rows, `[passed, total]`.
    pub fn counts(&self) -> &CountsBuffer<u64> {
        self.inner.values()
    }

    pub fn passed(&self) -> &[u64] {
        self.inner.row(PASSED_ROW).unwrap_or(&[])
    }

    pub fn total(&self) -> &[u64] {
        self.inner.row(TOTAL_ROW).unwrap_or(&[])
    }

    /// Efficiency and Clopper–Pearson uncertainty per bin.
    pub fn values(&self) -> EfficiencyView<Vec<f64>> {
        let (efficiency, uncertainty) = efficiency::per_bin(self.passed(), self.total());
        EfficiencyView {
            efficiency,
            uncertainty: Some(uncertainty),
        }
    }

    pub fn fill(&mut self, passed: &[f64], total: &[f64]) {
        // two rows were fixed at construction, so this cannot mismatch
        let _ = self.inner.fill(&[passed, total]);
    }

    /// Dynamic-arity fill; anything but exactly `[passed, total]` is rejected
    /// with `InvalidArgument` before counts are touched.
    pub fn fill_datasets(&mut self, datasets: &[&[f64]]) -> Result<(), FillError> {
        match *datasets {
            [passed, total] => {
                self.fill(passed, total);
                Ok(())
            }
            _ => {
                debug!("rejected fill of '{}': {} datasets", self.name(), datasets.len());
                Err(FillError::wrong_arity("EffHistogram::fill", datasets.len()))
            }
        }
    }

    pub fn add(&mut self, other: &EffHistogram) -> Result<(), FillError> {
        self.inner.add(&other.inner)
    }
}

impl ReadableAccumulator for EffHistogram {
    fn name(&self) -> &str {
        self.inner.name()
    }
    fn edges(&self) -> &BinEdges {
        self.inner.edges()
    }
    fn compression(&self) -> Compression {
        self.inner.compression()
    }
    fn kind(&self) -> AccumulatorKind {
        AccumulatorKind::Efficiency
    }
    fn read_values(&self) -> Values<'_> {
        Values::Efficiency(self.values())
    }
}
