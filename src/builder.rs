use crate::accumulator::{Accumulator, AccumulatorKind};
use crate::core::{BinEdges, CreationError};
use crate::serialization::Compression;
use crate::st::*;
use std::marker::PhantomData;

/// Edge points when none are requested, i.e. 99 bins.
pub const DEFAULT_BINS: usize = 100;
pub const DEFAULT_COMPRESS: bool = true;

pub enum Buildable {}
pub enum NeedsRange {}

struct BuilderState {
    name: String,
    range: (f64, f64),
    bins: usize,
    compress: bool,
}

pub struct AccumulatorBuilder<B> {
    state: BuilderState,
    phantom: PhantomData<B>,
}

pub fn builder<S: Into<String>>(name: S) -> AccumulatorBuilder<NeedsRange> {
    AccumulatorBuilder {
        state: BuilderState {
            name: name.into(),
            range: (0.0, 0.0),
            bins: DEFAULT_BINS,
            compress: DEFAULT_COMPRESS,
        },
        phantom: PhantomData,
    }
}

impl<B> AccumulatorBuilder<B> {
    /// Number of edge points; the accumulator gets `bins - 1` bins.
    pub fn bins(mut self, bins: usize) -> AccumulatorBuilder<B> {
        self.state.bins = bins;
        self
    }

    pub fn compress(mut self, compress: bool) -> AccumulatorBuilder<B> {
        self.state.compress = compress;
        self
    }

    pub fn range(mut self, low: f64, high: f64) -> AccumulatorBuilder<Buildable> {
        self.state.range = (low, high);
        AccumulatorBuilder { state: self.state, phantom: PhantomData }
    }
}

impl AccumulatorBuilder<Buildable> {
    fn parts(self) -> Result<(String, BinEdges, Compression), CreationError> {
        let state = self.state;
        let edges = BinEdges::linspace(state.range.0, state.range.1, state.bins)?;
        Ok((state.name, edges, Compression::from_flag(state.compress)))
    }

    pub fn histogram(self) -> Result<Histogram, CreationError> {
        let (name, edges, compression) = self.parts()?;
        Ok(Histogram::with_edges(name, edges, compression))
    }

    pub fn joint(self) -> Result<JointHistogram, CreationError> {
        let (name, edges, compression) = self.parts()?;
        Ok(JointHistogram::with_edges(name, edges, compression))
    }

    pub fn efficiency(self) -> Result<EffHistogram, CreationError> {
        let (name, edges, compression) = self.parts()?;
        Ok(EffHistogram::with_edges(name, edges, compression))
    }

    pub fn histogram_2d(self) -> Result<Histogram2D, CreationError> {
        let (name, edges, compression) = self.parts()?;
        Ok(Histogram2D::with_edges(name, edges, compression))
    }

    pub fn efficiency_2d(self) -> Result<EffHistogram2D, CreationError> {
        let (name, edges, compression) = self.parts()?;
        Ok(EffHistogram2D::with_edges(name, edges, compression))
    }

    pub fn build(self, kind: AccumulatorKind) -> Result<Accumulator, CreationError> {
        Ok(match kind {
            AccumulatorKind::Histogram => self.histogram()?.into(),
            AccumulatorKind::Joint => self.joint()?.into(),
            AccumulatorKind::Efficiency => self.efficiency()?.into(),
            AccumulatorKind::Histogram2D => self.histogram_2d()?.into(),
            AccumulatorKind::Efficiency2D => self.efficiency_2d()?.into(),
        })
    }
}
