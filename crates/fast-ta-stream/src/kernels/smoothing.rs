//! Pure numeric kernels shared by the moving-average families.
//!
//! Every function here is stateless: it takes the samples it needs (usually
//! the contents of a [`SlidingWindow`](super::SlidingWindow), oldest first)
//! and returns a number. Indicator states decide *what* to feed in, these
//! functions decide *how* to combine it.
//!
//! # Weighting
//!
//! Weighted families precompute their weights once at construction with
//! [`linear_weights`] or [`triangular_weights`] and combine them with the
//! window through [`weighted_sum`]. Recomputing from the window on every
//! call keeps a revised bar bit-identical to a committed one.

use crate::error::Result;
use crate::traits::SeriesElement;

/// Sums the values in iteration order.
#[inline]
pub fn sum<'a, T, I>(values: I) -> T
where
    T: SeriesElement,
    I: IntoIterator<Item = &'a T>,
{
    values.into_iter().fold(T::zero(), |acc, &v| acc + v)
}

/// Dot product of values with weights, pairing them oldest first.
#[inline]
pub fn weighted_sum<'a, T, I>(values: I, weights: &[T]) -> T
where
    T: SeriesElement,
    I: IntoIterator<Item = &'a T>,
{
    values
        .into_iter()
        .zip(weights)
        .fold(T::zero(), |acc, (&v, &w)| acc + v * w)
}

/// Linear weights `1, 2, ..., period` with the largest on the newest sample.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if a weight cannot be represented.
pub fn linear_weights<T: SeriesElement>(period: usize) -> Result<Vec<T>> {
    (1..=period).map(T::from_usize).collect()
}

/// Triangular weights for a window of `period` samples.
///
/// Odd periods peak once (`1, 2, 3, 2, 1`), even periods plateau across the
/// two middle samples (`1, 2, 2, 1`). The total is `((p + 1) / 2)^2` for odd
/// `p` and `(p / 2)(p / 2 + 1)` for even `p`.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if a weight cannot be represented.
pub fn triangular_weights<T: SeriesElement>(period: usize) -> Result<Vec<T>> {
    (0..period)
        .map(|i| T::from_usize((i + 1).min(period - i)))
        .collect()
}

/// Highest and lowest values, or `None` for an empty input.
#[inline]
pub fn extremes<'a, T, I>(values: I) -> Option<(T, T)>
where
    T: SeriesElement,
    I: IntoIterator<Item = &'a T>,
{
    values.into_iter().fold(None, |acc, &v| match acc {
        None => Some((v, v)),
        Some((high, low)) => Some((high.max(v), low.min(v))),
    })
}

/// One exponential smoothing step: `prev + alpha * (value - prev)`.
///
/// Written as `(value - prev) * alpha + prev` so the rounding matches the
/// reference recursion exactly.
#[inline]
#[must_use]
pub fn ema_step<T: SeriesElement>(prev: T, value: T, alpha: T) -> T {
    (value - prev) * alpha + prev
}

/// Kaufman efficiency ratio over a window of `period + 1` samples.
///
/// `|newest - oldest| / sum(|x[i] - x[i-1]|)`. A path with no movement, or
/// one whose total movement does not exceed the net change, is fully
/// efficient and yields 1. `zero` is the tolerance below which the total
/// movement counts as no movement.
#[inline]
pub fn efficiency_ratio<'a, T, I>(values: I, zero: T) -> T
where
    T: SeriesElement,
    I: IntoIterator<Item = &'a T>,
{
    let mut iter = values.into_iter();
    let Some(&first) = iter.next() else {
        return T::one();
    };
    let (last, volatility) = iter.fold((first, T::zero()), |(prev, total), &v| {
        (v, total + (v - prev).abs())
    });
    let change = last - first;
    if volatility <= change || volatility.abs() < zero {
        T::one()
    } else {
        (change / volatility).abs()
    }
}

/// Adaptive smoothing constant from an efficiency ratio:
/// `(er * (fast - slow) + slow)^2`.
#[inline]
#[must_use]
pub fn adaptive_constant<T: SeriesElement>(er: T, fast: T, slow: T) -> T {
    let sc = er * (fast - slow) + slow;
    sc * sc
}
