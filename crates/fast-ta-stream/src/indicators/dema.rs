//! DEMA (Double Exponential Moving Average) indicator.
//!
//! DEMA reduces the lag of a single EMA by subtracting the EMA of the EMA.
//!
//! # Formula
//!
//! ```text
//! e1   = EMA(x, period)
//! e2   = EMA(e1, period)
//! DEMA = 2 × e1 - e2
//! ```
//!
//! # Lookback
//!
//! `2 × (period - 1)`.

use crate::batch::batch_values;
use crate::error::Result;
use crate::indicators::ema::{ema_lookback, EmaCascade};
use crate::traits::{validate_period, BarMode, Indicator, SeriesElement};

/// Computes the lookback period for DEMA.
#[inline]
#[must_use]
pub const fn dema_lookback(period: usize) -> usize {
    2 * ema_lookback(period)
}

/// Streaming Double Exponential Moving Average.
#[derive(Debug, Clone, PartialEq)]
pub struct Dema<T> {
    period: usize,
    cascade: EmaCascade<T, 2>,
}

impl<T: SeriesElement> Dema<T> {
    /// Creates a DEMA state.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if `period` is outside `2..=100_000`.
    pub fn new(period: usize) -> Result<Self> {
        validate_period(period)?;
        tracing::debug!(period, "dema state created");
        Ok(Self {
            period,
            cascade: EmaCascade::new(period)?,
        })
    }
}

impl<T: SeriesElement> Indicator for Dema<T> {
    type Input = T;
    type Output = T;

    fn advance(&mut self, input: T, mode: BarMode) -> Option<T> {
        let [e1, e2] = self.cascade.next(input, mode)?;
        Some(T::two() * e1 - e2)
    }

    fn lookback(&self) -> usize {
        self.cascade.lookback()
    }

    fn bars(&self) -> usize {
        self.cascade.bars()
    }

    fn reset(&mut self) {
        tracing::debug!(period = self.period, "dema state reset");
        self.cascade.reset();
    }
}

/// Computes DEMA over a whole series.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `2..=100_000`.
#[must_use = "this returns a Result with the DEMA values, which should be used"]
pub fn dema<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<Option<T>>> {
    Ok(batch_values(Dema::new(period)?, data))
}
