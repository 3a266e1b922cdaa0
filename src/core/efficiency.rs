//! Efficiency ratios with Clopper–Pearson uncertainties.

use crate::core::counter::Counter;
use crate::core::errors::FillError;

/// Central one-sigma coverage.
pub const ONE_SIGMA_CONFIDENCE: f64 = 0.682_689_492_137_085_9;

/// `passed / total` per bin and the half-width of the central Clopper–Pearson
/// interval at [`ONE_SIGMA_CONFIDENCE`].
///
/// Bins with `total == 0` follow float division for the ratio and get a NaN
/// uncertainty. `passed > total` is not rejected; such bins also get a NaN
/// uncertainty.
pub fn efficiency_with_uncertainties(passed: &[u64], total: &[u64]) -> Result<(Vec<f64>, Vec<f64>), FillError> {
    if passed.len() != total.len() {
        return Err(FillError::ShapeMismatch {
            expected: (1, total.len()),
            actual: (1, passed.len()),
        });
    }

    Ok(per_bin(passed, total))
}

/// Same as [`efficiency_with_uncertainties`] for rows known to have equal length.
pub(crate) fn per_bin(passed: &[u64], total: &[u64]) -> (Vec<f64>, Vec<f64>) {
    passed
        .iter()
        .zip(total)
        .map(|(&k, &n)| {
            let (low, high) = clopper_pearson(k, n, ONE_SIGMA_CONFIDENCE);
            (k.as_f64() / n.as_f64(), (high - low) / 2.0)
        })
        .unzip()
}

/// Clopper–Pearson interval for `k` successes out of `n` trials.
///
/// Returns `(NaN, NaN)` for `n == 0` or `k > n`.
pub fn clopper_pearson(k: u64, n: u64, confidence: f64) -> (f64, f64) {
    if n == 0 || k > n {
        return (f64::NAN, f64::NAN);
    }
    let alpha = (1.0 - confidence) / 2.0;
    let (k_f, n_f) = (k as f64, n as f64);

    let low = if k == 0 { 0.0 } else { beta_quantile(alpha, k_f, n_f - k_f + 1.0) };
    let high = if k == n { 1.0 } else { beta_quantile(1.0 - alpha, k_f + 1.0, n_f - k_f) };
    (low, high)
}

/// Quantile of the Beta(a, b) distribution by bisection on its CDF.
pub fn beta_quantile(p: f64, a: f64, b: f64) -> f64 {
    if p.is_nan() || a <= 0.0 || b <= 0.0 || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return 0.0;
    }
    if p == 1.0 {
        return 1.0;
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    for _ in 0..200 {
        let mid = 0.5 * (lo + hi);
        if hi - lo < 1e-15 {
            break;
        }
        if regularized_incomplete_beta(mid, a, b) < p {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}

/// Lanczos approximation of ln Γ(x).
fn ln_gamma(x: f64) -> f64 {
    #[allow(clippy::excessive_precision)]
    const COEFFICIENTS: [f64; 9] = [
        0.99999999999980993,
        676.5203681218851,
        -1259.1392167224028,
        771.32342877765313,
        -176.61502916214059,
        12.507343278686905,
        -0.13857109526572012,
        9.9843695780195716e-6,
        1.5056327351493116e-7,
    ];
    const G: f64 = 7.0;

    if x < 0.5 {
        let pi = std::f64::consts::PI;
        return (pi / (pi * x).sin()).ln() - ln_gamma(1.0 - x);
    }

    let x = x - 1.0;
    let sum = COEFFICIENTS[1..]
        .iter()
        .enumerate()
        .fold(COEFFICIENTS[0], |acc, (i, &c)| acc + c / (x + i as f64 + 1.0));

    let t = x + G + 0.5;
    0.5 * (2.0 * std::f64::consts::PI).ln() + (x + 0.5) * t.ln() - t + sum.ln()
}

fn ln_beta(a: f64, b: f64) -> f64 {
    ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b)
}

/// Regularized incomplete beta function I_x(a, b).
pub fn regularized_incomplete_beta(x: f64, a: f64, b: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    // I_x(a,b) = 1 - I_{1-x}(b,a) converges faster past the mean
    if x > (a + 1.0) / (a + b + 2.0) {
        return 1.0 - regularized_incomplete_beta(1.0 - x, b, a);
    }

    let ln_prefix = a * x.ln() + b * (1.0 - x).ln() - ln_beta(a, b);
    (ln_prefix.exp() / a) * beta_continued_fraction(x, a, b)
}

/// Lentz's algorithm.
fn beta_continued_fraction(x: f64, a: f64, b: f64) -> f64 {
    const MAX_ITER: usize = 300;
    const EPS: f64 = 1e-15;
    const TINY: f64 = 1e-300;

    let clamp = |v: f64| if v.abs() < TINY { TINY } else { v };

    let mut c = 1.0;
    let mut d = 1.0 / clamp(1.0 - (a + b) * x / (a + 1.0));
    let mut h = d;

    for m in 1..=MAX_ITER {
        let m_f = m as f64;
        let num_even = m_f * (b - m_f) * x / ((a + 2.0 * m_f - 1.0) * (a + 2.0 * m_f));
        d = 1.0 / clamp(1.0 + num_even * d);
        c = clamp(1.0 + num_even / c);
        h *= d * c;

        let num_odd = -(a + m_f) * (a + b + m_f) * x / ((a + 2.0 * m_f) * (a + 2.0 * m_f + 1.0));
        d = 1.0 / clamp(1.0 + num_odd * d);
        c = clamp(1.0 + num_odd / c);
        let delta = d * c;
        h *= delta;

        if (delta - 1.0).abs() < EPS {
            break;
        }
    }
    h
}
