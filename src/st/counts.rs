use crate::core::{Counter, FillError, Shape};

/// Row-major counts of fixed shape.
///
/// Allocated zeroed once; only ever changed by element-wise addition.
#[derive(Clone, Debug, PartialEq)]
pub struct CountsBuffer<C> {
    rows: usize,
    cols: usize,
    data: Vec<C>,
}

impl<C: Counter> CountsBuffer<C> {
    pub fn zeros(rows: usize, cols: usize) -> CountsBuffer<C> {
        CountsBuffer {
            rows,
            cols,
            data: vec![C::zero(); rows * cols],
        }
    }

    pub(crate) fn from_rows(rows: usize, cols: usize, data: Vec<C>) -> Result<CountsBuffer<C>, FillError> {
        if data.len() != rows * cols {
            return Err(FillError::ShapeMismatch {
                expected: (rows, cols),
                actual: (1, data.len()),
            });
        }
        Ok(CountsBuffer { rows, cols, data })
    }

    /// Caller guarantees `data.len() == rows * cols`.
    pub(crate) fn from_vec(rows: usize, cols: usize, data: Vec<C>) -> CountsBuffer<C> {
        debug_assert_eq!(data.len(), rows * cols);
        CountsBuffer { rows, cols, data }
    }

    #[inline(always)]
    pub fn shape(&self) -> Shape {
        (self.rows, self.cols)
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> Option<&C> {
        if row < self.rows && col < self.cols {
            return self.data.get(row * self.cols + col);
        }
        None
    }

    pub fn row(&self, row: usize) -> Option<&[C]> {
        if row < self.rows {
            let start = row * self.cols;
            return Some(&self.data[start..start + self.cols]);
        }
        None
    }

    pub fn as_slice(&self) -> &[C] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [C] {
        &mut self.data
    }

    /// Adds `other` element-wise. Shapes must match exactly; on mismatch
    /// nothing is touched.
    pub fn add(&mut self, other: &CountsBuffer<C>) -> Result<(), FillError> {
        if self.shape() != other.shape() {
            return Err(FillError::ShapeMismatch {
                expected: self.shape(),
                actual: other.shape(),
            });
        }
        for (count, &other_count) in self.data.iter_mut().zip(&other.data) {
            *count += other_count;
        }
        Ok(())
    }

    /// Element-wise `f(self, other)` in the shape of `self`.
    pub(crate) fn combine<F: Fn(C, C) -> C>(&self, other: &CountsBuffer<C>, f: F) -> CountsBuffer<C> {
        CountsBuffer {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().zip(&other.data).map(|(&a, &b)| f(a, b)).collect(),
        }
    }

    pub fn total(&self) -> C {
        self.data.iter().fold(C::zero(), |t, &c| t + c)
    }
}
