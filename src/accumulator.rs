//! The closed set of accumulator variants behind one interface.

use crate::core::{BinEdges, FillError};
use crate::serialization::Compression;
use crate::st::*;

/// Read-only state a persistence layer needs: name, values, edges and the
/// compression request.
pub trait ReadableAccumulator {
    fn name(&self) -> &str;
    fn edges(&self) -> &BinEdges;
    fn compression(&self) -> Compression;
    fn kind(&self) -> AccumulatorKind;
    fn read_values(&self) -> Values<'_>;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AccumulatorKind {
    Histogram,
    Joint,
    Efficiency,
    Histogram2D,
    Efficiency2D,
}

impl AccumulatorKind {
    pub fn as_str(&self) -> &'static str {
        match *self {
            AccumulatorKind::Histogram => "Histogram",
            AccumulatorKind::Joint => "JointHistogram",
            AccumulatorKind::Efficiency => "EffHistogram",
            AccumulatorKind::Histogram2D => "Histogram2D",
            AccumulatorKind::Efficiency2D => "EffHistogram2D",
        }
    }
}

/// What `values` reads back, per variant.
#[derive(Clone, Debug, PartialEq)]
pub enum Values<'a> {
    /// Raw counts: one row for [`Histogram`], one row per dataset for
    /// [`JointHistogram`].
    Counts(&'a CountsBuffer<u64>),
    /// N x N counts of a [`Histogram2D`].
    Matrix(&'a CountsBuffer<f64>),
    Efficiency(EfficiencyView<Vec<f64>>),
    EfficiencyMatrix(EfficiencyView<CountsBuffer<f64>>),
}

/// Input to [`Accumulator::fill`].
#[derive(Clone, Copy, Debug)]
pub enum Samples<'a> {
    One(&'a [f64]),
    Datasets(&'a [&'a [f64]]),
    Points(&'a [Points<'a>]),
}

impl<'a> Samples<'a> {
    fn describe(&self) -> String {
        match *self {
            Samples::One(_) => "a single dataset".to_owned(),
            Samples::Datasets(d) => format!("{} datasets", d.len()),
            Samples::Points(p) => format!("{} point sets", p.len()),
        }
    }
}

#[derive(Clone, Debug)]
pub enum Accumulator {
    Histogram(Histogram),
    Joint(JointHistogram),
    Efficiency(EffHistogram),
    Histogram2D(Histogram2D),
    Efficiency2D(EffHistogram2D),
}

macro_rules! dispatch {
    ($acc:expr, $h:ident => $e:expr) => {
        match $acc {
            Accumulator::Histogram($h) => $e,
            Accumulator::Joint($h) => $e,
            Accumulator::Efficiency($h) => $e,
            Accumulator::Histogram2D($h) => $e,
            Accumulator::Efficiency2D($h) => $e,
        }
    };
}

impl Accumulator {
    /// Fills the wrapped variant. A sample shape the variant does not take
    /// fails with `InvalidArgument`; variant-level errors pass through.
    pub fn fill(&mut self, samples: Samples<'_>) -> Result<(), FillError> {
        match (self, samples) {
            (Accumulator::Histogram(h), Samples::One(values)) => {
                h.fill(values);
                Ok(())
            }
            (Accumulator::Joint(h), Samples::One(values)) => h.fill(&[values]),
            (Accumulator::Joint(h), Samples::Datasets(datasets)) => h.fill(datasets),
            (Accumulator::Efficiency(h), Samples::Datasets(datasets)) => h.fill_datasets(datasets),
            (Accumulator::Histogram2D(h), Samples::Points(&[(xs, ys)])) => h.fill(xs, ys),
            (Accumulator::Efficiency2D(h), Samples::Points(points)) => h.fill_datasets(points),
            (acc, samples) => {
                debug!("rejected fill of '{}': {} given {}", acc.name(), acc.kind().as_str(), samples.describe());
                Err(FillError::InvalidArgument {
                    context: "Accumulator::fill",
                    message: format!("{} does not accept {}", acc.kind().as_str(), samples.describe()),
                })
            }
        }
    }

    pub fn values(&self) -> Values<'_> {
        self.read_values()
    }

    /// Merges another accumulator of the same variant and binning.
    pub fn add(&mut self, other: &Accumulator) -> Result<(), FillError> {
        match (self, other) {
            (Accumulator::Histogram(h), Accumulator::Histogram(o)) => h.add(o),
            (Accumulator::Joint(h), Accumulator::Joint(o)) => h.add(o),
            (Accumulator::Efficiency(h), Accumulator::Efficiency(o)) => h.add(o),
            (Accumulator::Histogram2D(h), Accumulator::Histogram2D(o)) => h.add(o),
            (Accumulator::Efficiency2D(h), Accumulator::Efficiency2D(o)) => h.add(o),
            (acc, other) => Err(FillError::InvalidArgument {
                context: "Accumulator::add",
                message: format!("cannot merge {} into {}", other.kind().as_str(), acc.kind().as_str()),
            }),
        }
    }
}

impl ReadableAccumulator for Accumulator {
    fn name(&self) -> &str {
        dispatch!(self, h => h.name())
    }
    fn edges(&self) -> &BinEdges {
        dispatch!(self, h => h.edges())
    }
    fn compression(&self) -> Compression {
        dispatch!(self, h => h.compression())
    }
    fn kind(&self) -> AccumulatorKind {
        dispatch!(self, h => ReadableAccumulator::kind(h))
    }
    fn read_values(&self) -> Values<'_> {
        dispatch!(self, h => h.read_values())
    }
}

impl From<Histogram> for Accumulator {
    fn from(h: Histogram) -> Accumulator {
        Accumulator::Histogram(h)
    }
}

impl From<JointHistogram> for Accumulator {
    fn from(h: JointHistogram) -> Accumulator {
        Accumulator::Joint(h)
    }
}

impl From<EffHistogram> for Accumulator {
    fn from(h: EffHistogram) -> Accumulator {
        Accumulator::Efficiency(h)
    }
}

impl From<Histogram2D> for Accumulator {
    fn from(h: Histogram2D) -> Accumulator {
        Accumulator::Histogram2D(h)
    }
}

impl From<EffHistogram2D> for Accumulator {
    fn from(h: EffHistogram2D) -> Accumulator {
        Accumulator::Efficiency2D(h)
    }
}
