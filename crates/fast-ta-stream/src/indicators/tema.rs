//! TEMA (Triple Exponential Moving Average) indicator.
//!
//! # Formula
//!
//! ```text
//! e1   = EMA(x, period)
//! e2   = EMA(e1, period)
//! e3   = EMA(e2, period)
//! TEMA = 3 × e1 - 3 × e2 + e3
//! ```
//!
//! # Lookback
//!
//! `3 × (period - 1)`.

use crate::batch::batch_values;
use crate::error::Result;
use crate::indicators::ema::{ema_lookback, EmaCascade};
use crate::traits::{validate_period, BarMode, Indicator, SeriesElement};

/// Computes the lookback period for TEMA.
#[inline]
#[must_use]
pub const fn tema_lookback(period: usize) -> usize {
    3 * ema_lookback(period)
}

/// Streaming Triple Exponential Moving Average.
#[derive(Debug, Clone, PartialEq)]
pub struct Tema<T> {
    period: usize,
    three: T,
    cascade: EmaCascade<T, 3>,
}

impl<T: SeriesElement> Tema<T> {
    /// Creates a TEMA state.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if `period` is outside `2..=100_000`.
    pub fn new(period: usize) -> Result<Self> {
        validate_period(period)?;
        tracing::debug!(period, "tema state created");
        Ok(Self {
            period,
            three: T::from_usize(3)?,
            cascade: EmaCascade::new(period)?,
        })
    }
}

impl<T: SeriesElement> Indicator for Tema<T> {
    type Input = T;
    type Output = T;

    fn advance(&mut self, input: T, mode: BarMode) -> Option<T> {
        let [e1, e2, e3] = self.cascade.next(input, mode)?;
        Some(self.three * e1 - self.three * e2 + e3)
    }

    fn lookback(&self) -> usize {
        self.cascade.lookback()
    }

    fn bars(&self) -> usize {
        self.cascade.bars()
    }

    fn reset(&mut self) {
        tracing::debug!(period = self.period, "tema state reset");
        self.cascade.reset();
    }
}

/// Computes TEMA over a whole series.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `2..=100_000`.
#[must_use = "this returns a Result with the TEMA values, which should be used"]
pub fn tema<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<Option<T>>> {
    Ok(batch_values(Tema::new(period)?, data))
}
