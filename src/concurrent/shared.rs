use crate::accumulator::{Accumulator, Samples};
use crate::core::FillError;
use crate::st::Histogram;
use parking_lot::Mutex;

/// An accumulator several workers can fill through a shared reference.
///
/// Fills are serialized by a lock; the counts end up exactly as if every
/// batch had been filled from one thread, in any order.
pub struct SharedAccumulator<A> {
    inner: Mutex<A>,
}

impl<A> SharedAccumulator<A> {
    pub fn new(accumulator: A) -> SharedAccumulator<A> {
        SharedAccumulator {
            inner: Mutex::new(accumulator),
        }
    }

    /// Runs `f` with exclusive access to the accumulator.
    pub fn fill_with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut A) -> R,
    {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }

    /// Runs `f` against the accumulator while no fill is in progress.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&A) -> R,
    {
        let guard = self.inner.lock();
        f(&*guard)
    }

    pub fn into_inner(self) -> A {
        self.inner.into_inner()
    }
}

impl<A: Clone> SharedAccumulator<A> {
    pub fn snapshot(&self) -> A {
        self.inner.lock().clone()
    }
}

impl SharedAccumulator<Histogram> {
    pub fn fill(&self, values: &[f64]) {
        self.inner.lock().fill(values)
    }

    /// Merges a worker-local histogram.
    pub fn add(&self, other: &Histogram) -> Result<(), FillError> {
        self.inner.lock().add(other)
    }
}

impl SharedAccumulator<Accumulator> {
    pub fn fill(&self, samples: Samples<'_>) -> Result<(), FillError> {
        self.inner.lock().fill(samples)
    }

    pub fn add(&self, other: &Accumulator) -> Result<(), FillError> {
        self.inner.lock().add(other)
    }
}
