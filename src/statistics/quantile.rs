//! Quantile computation using Type 7 quantiles (linear interpolation between order statistics).
//!
//! This module implements Type 7 quantiles following Hyndman & Fan (1996),
//! the default in R and NumPy.
//!
//! **Type 7 formula** (for sorted sample x of size n at probability p, 0-based):
//! ```text
//! h = (n - 1) * p
//! q = x[floor(h)] + (h - floor(h)) * (x[floor(h) + 1] - x[floor(h)])
//! ```
//!
//! # Input Requirements
//!
//! All input data must be finite (no NaN or infinity values). In debug builds,
//! this is checked via assertions.
//!
//! # Reference
//!
//! Hyndman, R. J. & Fan, Y. (1996). "Sample quantiles in statistical packages."
//! The American Statistician 50(4):361–365.

/// Debug assertion that all values in the slice are finite.
#[inline]
fn debug_assert_finite(data: &[f64]) {
    debug_assert!(
        data.iter().all(|x| x.is_finite()),
        "quantile input must be finite (no NaN or infinity)"
    );
}

/// Type 7 position: (lower index, upper index, interpolation weight).
#[inline]
fn type7_position(n: usize, p: f64) -> (usize, usize, f64) {
    let h = (n - 1) as f64 * p;
    let lo = (h.floor() as usize).min(n - 1);
    let hi = (lo + 1).min(n - 1);
    (lo, hi, h - lo as f64)
}

/// Compute a single quantile from a mutable slice using Type 7 quantiles.
///
/// Uses `select_nth_unstable_by()` for O(n) expected time complexity.
/// The slice is partially reordered as a side effect.
///
/// # Panics
///
/// Panics if `data` is empty or if `p` is outside [0, 1].
pub fn compute_quantile(data: &mut [f64], p: f64) -> f64 {
    assert!(!data.is_empty(), "Cannot compute quantile of empty slice");
    assert!(
        (0.0..=1.0).contains(&p),
        "Quantile probability must be in [0, 1]"
    );
    debug_assert_finite(data);

    let n = data.len();
    if n == 1 {
        return data[0];
    }

    let (lo, hi, frac) = type7_position(n, p);

    let (_, &mut lo_val, upper) = data.select_nth_unstable_by(lo, |a, b| a.total_cmp(b));
    if hi == lo || frac == 0.0 {
        return lo_val;
    }

    // Everything right of `lo` is >= x[lo], so x[lo + 1] is the minimum of that part.
    let hi_val = upper.iter().copied().fold(f64::INFINITY, f64::min);
    lo_val + frac * (hi_val - lo_val)
}

/// Compute a quantile from pre-sorted data using Type 7 quantiles.
///
/// # Panics
///
/// Panics if `sorted` is empty or if `p` is outside [0, 1].
///
/// The caller must ensure the data is sorted in ascending order.
pub fn compute_quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    assert!(!sorted.is_empty(), "Cannot compute quantile of empty slice");
    assert!(
        (0.0..=1.0).contains(&p),
        "Quantile probability must be in [0, 1]"
    );

    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let (lo, hi, frac) = type7_position(n, p);
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}
