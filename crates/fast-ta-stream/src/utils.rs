//! Utility functions for fast-ta-stream.
//!
//! Tolerance-based comparisons for scalar and optional outputs, plus helpers
//! for inspecting the "not ready" prefix of a batch result.
//!
//! # Example
//!
//! ```
//! use fast_ta_stream::utils::{approx_eq, count_not_ready_prefix, EPSILON};
//!
//! let a = 1.0 / 3.0;
//! let b = 0.333333333333333;
//! assert!(approx_eq(a, b, EPSILON));
//!
//! let out = vec![None, None, Some(2.0_f64), None];
//! assert_eq!(count_not_ready_prefix(&out), 2);
//! ```

use crate::traits::SeriesElement;

/// Standard epsilon for high-precision floating-point comparisons.
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for comparisons involving long recursive chains
/// (cascaded EMAs, adaptive smoothing, the Hilbert transform).
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Approximate equality check for floating-point values.
///
/// Returns `true` if `a` and `b` are within `tolerance` of each other,
/// or if both are NaN.
///
/// # Example
///
/// ```
/// use fast_ta_stream::utils::{approx_eq, EPSILON};
///
/// assert!(approx_eq(1.0, 1.0 + 1e-11, EPSILON));
/// assert!(!approx_eq(1.0, 2.0, EPSILON));
/// assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
/// ```
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    (a - b).abs() < tolerance
}

/// Relative approximate equality, for values of widely varying magnitude.
///
/// # Example
///
/// ```
/// use fast_ta_stream::utils::approx_eq_relative;
///
/// assert!(approx_eq_relative(1e10, 1e10 + 1.0, 1e-9));
/// ```
#[inline]
#[must_use]
pub fn approx_eq_relative<T: SeriesElement>(a: T, b: T, rel_tolerance: T) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    let scale = a.abs().max(b.abs());
    if scale == T::zero() {
        return true;
    }
    (a - b).abs() / scale < rel_tolerance
}

/// Compares two optional outputs: both `None`, or both `Some` and within
/// `tolerance`.
#[inline]
#[must_use]
pub fn approx_eq_opt<T: SeriesElement>(a: Option<T>, b: Option<T>, tolerance: T) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => approx_eq(a, b, tolerance),
        _ => false,
    }
}

/// Index of the first position where two output series disagree, if any.
///
/// Series of different length disagree at the shorter length.
#[must_use]
pub fn first_mismatch<T: SeriesElement>(a: &[Option<T>], b: &[Option<T>], tolerance: T) -> Option<usize> {
    a.iter()
        .zip(b)
        .position(|(&x, &y)| !approx_eq_opt(x, y, tolerance))
        .or_else(|| (a.len() != b.len()).then(|| a.len().min(b.len())))
}

/// Number of `None` outputs in a series.
#[inline]
#[must_use]
pub fn count_not_ready<T>(outputs: &[Option<T>]) -> usize {
    outputs.iter().filter(|v| v.is_none()).count()
}

/// Number of leading `None` outputs, i.e. the observed lookback.
#[inline]
#[must_use]
pub fn count_not_ready_prefix<T>(outputs: &[Option<T>]) -> usize {
    outputs.iter().take_while(|v| v.is_none()).count()
}

/// Flattens outputs into a dense vector, writing NaN for "not ready".
///
/// # Example
///
/// ```
/// use fast_ta_stream::utils::to_nan_padded;
///
/// let dense = to_nan_padded(&[None, Some(2.0_f64)]);
/// assert!(dense[0].is_nan());
/// assert_eq!(dense[1], 2.0);
/// ```
#[must_use]
pub fn to_nan_padded<T: SeriesElement>(outputs: &[Option<T>]) -> Vec<T> {
    outputs.iter().map(|v| v.unwrap_or_else(T::nan)).collect()
}
