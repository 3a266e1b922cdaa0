extern crate byteorder;
extern crate bytes;
#[macro_use]
extern crate log;
extern crate miniz_oxide;
extern crate num_traits as num;
extern crate parking_lot;

mod core;
pub mod st;
pub mod accumulator;
pub mod builder;
pub mod concurrent;
pub mod serialization;

pub use crate::core::errors::*;
pub use crate::core::{binning, efficiency, BinEdges, Counter};
pub use crate::accumulator::{Accumulator, AccumulatorKind, ReadableAccumulator, Samples, Values};
pub use crate::builder::builder;
pub use crate::concurrent::SharedAccumulator;
pub use crate::st::{CountsBuffer, EffHistogram, EffHistogram2D, EfficiencyView, Histogram, Histogram2D, JointHistogram};

#[cfg(test)]
pub mod tests;
