//! T3 (Tillson T3 Moving Average) indicator.
//!
//! T3 is a smoothed moving average developed by Tim Tillson that uses
//! a combination of six EMAs with a volume factor to reduce lag while
//! maintaining smoothness.
//!
//! # Formula
//!
//! T3 = c1*e6 + c2*e5 + c3*e4 + c4*e3
//!
//! where e1..e6 are six chained EMAs of the same period (e1 = EMA(x),
//! e2 = EMA(e1), ...). With `v` the volume factor, the coefficients are the
//! expansion of three generalized DEMAs applied in series:
//! - c1 = -v^3
//! - c2 = 3*v^2 + 3*v^3
//! - c3 = -6*v^2 - 3*v - 3*v^3
//! - c4 = 1 + 3*v + v^3 + 3*v^2
//!
//! # Lookback
//!
//! The lookback period is `6 * (period - 1)`.

use crate::batch::batch_values;
use crate::error::{Error, Result};
use crate::indicators::ema::{ema_lookback, EmaCascade};
use crate::traits::{validate_period, BarMode, Indicator, SeriesElement};

/// Default volume factor.
pub const T3_DEFAULT_VOLUME_FACTOR: f64 = 0.7;

/// Computes the lookback period for T3.
#[inline]
#[must_use]
pub const fn t3_lookback(period: usize) -> usize {
    6 * ema_lookback(period)
}

/// Validates a T3 volume factor: finite and in `(0, 1]`.
///
/// # Errors
///
/// Returns `Error::InvalidParameter` otherwise.
pub fn validate_volume_factor<T: SeriesElement>(volume_factor: T) -> Result<()> {
    crate::traits::validate_positive("volume_factor", volume_factor)?;
    if volume_factor > T::one() {
        return Err(Error::InvalidParameter {
            name: "volume_factor",
            value: volume_factor.widen(),
            reason: "must be at most 1",
        });
    }
    Ok(())
}

/// Streaming Tillson T3.
#[derive(Debug, Clone, PartialEq)]
pub struct T3<T> {
    period: usize,
    volume_factor: T,
    coefficients: [T; 4],
    cascade: EmaCascade<T, 6>,
}

impl<T: SeriesElement> T3<T> {
    /// Creates a T3 state.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if `period` is outside `2..=100_000`,
    /// or `Error::InvalidParameter` if `volume_factor` is not in `(0, 1]`.
    pub fn new(period: usize, volume_factor: T) -> Result<Self> {
        validate_period(period)?;
        validate_volume_factor(volume_factor)?;
        tracing::debug!(
            period,
            volume_factor = volume_factor.widen(),
            "t3 state created"
        );

        let three = T::from_usize(3)?;
        let six = T::from_usize(6)?;
        let v = volume_factor;
        let v2 = v * v;
        let c1 = -(v2 * v);
        let c2 = three * (v2 - c1);
        let c3 = -six * v2 - three * (v - c1);
        let c4 = T::one() + three * v - c1 + three * v2;

        Ok(Self {
            period,
            volume_factor,
            coefficients: [c1, c2, c3, c4],
            cascade: EmaCascade::new(period)?,
        })
    }

    /// The volume factor.
    #[must_use]
    pub fn volume_factor(&self) -> T {
        self.volume_factor
    }
}

impl<T: SeriesElement> Indicator for T3<T> {
    type Input = T;
    type Output = T;

    fn advance(&mut self, input: T, mode: BarMode) -> Option<T> {
        let [_, _, e3, e4, e5, e6] = self.cascade.next(input, mode)?;
        let [c1, c2, c3, c4] = self.coefficients;
        Some(c1 * e6 + c2 * e5 + c3 * e4 + c4 * e3)
    }

    fn lookback(&self) -> usize {
        self.cascade.lookback()
    }

    fn bars(&self) -> usize {
        self.cascade.bars()
    }

    fn reset(&mut self) {
        tracing::debug!(period = self.period, "t3 state reset");
        self.cascade.reset();
    }
}

/// Computes T3 over a whole series.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` or `Error::InvalidParameter` for invalid
/// parameters.
#[must_use = "this returns a Result with the T3 values, which should be used"]
pub fn t3<T: SeriesElement>(data: &[T], period: usize, volume_factor: T) -> Result<Vec<Option<T>>> {
    Ok(batch_values(T3::new(period, volume_factor)?, data))
}
