use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

macro_rules! succ {
    ($e:expr) => {
        assert!($e.is_ok());
    }
}

macro_rules! assert_approx_eq {
    ($e:expr, $v:expr, $t:expr) => {
        assert!(($e as f64 - $v as f64).abs() <= $t as f64, "{} !~= {} within {}", $e, $v, $t)
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Samples spread a little past `[low, high]` on both sides, with the odd NaN.
pub fn samples(seed: u64, n: usize, low: f64, high: f64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let margin = 0.1 * (high - low);
    (0..n)
        .map(|i| {
            if i % 97 == 0 {
                f64::NAN
            } else {
                rng.gen_range(low - margin..high + margin)
            }
        })
        .collect()
}

/// Splits `values` at random points into consecutive chunks.
pub fn random_chunks(seed: u64, values: &[f64]) -> Vec<&[f64]> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut chunks = Vec::new();
    let mut rest = values;
    while !rest.is_empty() {
        let take = rng.gen_range(0..=rest.len().min(64));
        let (head, tail) = rest.split_at(take);
        chunks.push(head);
        rest = tail;
    }
    chunks
}
