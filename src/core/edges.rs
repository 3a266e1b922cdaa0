use crate::core::errors::CreationError;
use std::ops::Deref;
use std::sync::Arc;

macro_rules! expect {
    ($t:expr, $e:expr) => {
        if $t { return Err($e); }
    };
}

/// Ordered, immutable bin edges.
///
/// `count` edge points spanning `[low, high]` inclusive define `count - 1`
/// contiguous bins. Clones share the same allocation.
#[derive(Clone, Debug, PartialEq)]
pub struct BinEdges {
    edges: Arc<[f64]>,
}

impl BinEdges {
    /// Evenly spaced edges over `[low, high]`, with `high` placed exactly.
    pub fn linspace(low: f64, high: f64, count: usize) -> Result<BinEdges, CreationError> {
        expect!(count < 2, CreationError::TooFewEdges { requested: count });
        expect!(!low.is_finite() || !high.is_finite(), CreationError::NonFiniteRange { low, high });
        expect!(low >= high, CreationError::LowGeHigh { low, high });

        let step = (high - low) / (count - 1) as f64;
        let mut edges: Vec<f64> = (0..count).map(|i| low + i as f64 * step).collect();
        edges[count - 1] = high;

        Ok(BinEdges { edges: edges.into() })
    }

    #[inline(always)]
    pub fn n_bins(&self) -> usize {
        self.edges.len() - 1
    }

    #[inline(always)]
    pub fn low(&self) -> f64 {
        self.edges[0]
    }

    #[inline(always)]
    pub fn high(&self) -> f64 {
        self.edges[self.edges.len() - 1]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.edges
    }

    /// Index of the bin holding `value`.
    ///
    /// Bins are half-open `[e_i, e_{i+1})` except the last, which also holds
    /// `high`. NaN and out-of-range values have no bin.
    #[inline]
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        if !(value >= self.low() && value <= self.high()) {
            return None;
        }
        let last = self.n_bins() - 1;
        // number of edges <= value, minus one
        let idx = self.edges.partition_point(|&e| e <= value) - 1;
        Some(idx.min(last))
    }
}

impl Deref for BinEdges {
    type Target = [f64];
    fn deref(&self) -> &[f64] {
        &self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_places_both_ends() {
        let edges = BinEdges::linspace(0.0, 10.0, 5).unwrap();
        assert_eq!(edges.as_slice(), &[0.0, 2.5, 5.0, 7.5, 10.0]);
        assert_eq!(edges.n_bins(), 4);
    }

    #[test]
    fn linspace_rejects_bad_ranges() {
        assert_eq!(BinEdges::linspace(0.0, 1.0, 1), Err(CreationError::TooFewEdges { requested: 1 }));
        assert_eq!(
            BinEdges::linspace(1.0, 1.0, 10),
            Err(CreationError::LowGeHigh { low: 1.0, high: 1.0 })
        );
        assert!(BinEdges::linspace(f64::NEG_INFINITY, 1.0, 10).is_err());
        assert!(BinEdges::linspace(0.0, f64::NAN, 10).is_err());
    }

    #[test]
    fn find_bin_closes_last_bin_only() {
        let edges = BinEdges::linspace(0.0, 10.0, 5).unwrap();
        assert_eq!(edges.find_bin(0.0), Some(0));
        assert_eq!(edges.find_bin(2.5), Some(1));
        assert_eq!(edges.find_bin(7.4999), Some(2));
        assert_eq!(edges.find_bin(10.0), Some(3));
        assert_eq!(edges.find_bin(10.000001), None);
        assert_eq!(edges.find_bin(-0.1), None);
        assert_eq!(edges.find_bin(f64::NAN), None);
    }

    #[test]
    fn clones_share_storage() {
        let edges = BinEdges::linspace(-1.0, 1.0, 11).unwrap();
        let other = edges.clone();
        assert!(std::ptr::eq(edges.as_slice(), other.as_slice()));
    }
}
