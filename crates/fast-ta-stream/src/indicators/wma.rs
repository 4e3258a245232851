//! Weighted Moving Average (WMA) indicator.
//!
//! Linearly weighted mean of the last `period` samples: the oldest sample has
//! weight 1 and the newest has weight `period`.
//!
//! # Formula
//!
//! ```text
//! WMA[t] = Σ (k × x[t-period+k]) / (period × (period + 1) / 2),  k = 1..period
//! ```
//!
//! # Lookback
//!
//! `period - 1`.

use crate::batch::batch_values;
use crate::error::Result;
use crate::kernels::{linear_weights, sum, weighted_sum, LookbackTracker, SlidingWindow};
use crate::traits::{validate_period, BarMode, Indicator, SeriesElement};

/// Returns the lookback period for WMA.
#[inline]
#[must_use]
pub const fn wma_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Streaming Weighted Moving Average.
#[derive(Debug, Clone, PartialEq)]
pub struct Wma<T> {
    period: usize,
    weights: Vec<T>,
    divisor: T,
    window: SlidingWindow<T>,
    tracker: LookbackTracker,
}

impl<T: SeriesElement> Wma<T> {
    /// Creates a WMA state.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if `period` is outside `2..=100_000`.
    pub fn new(period: usize) -> Result<Self> {
        validate_period(period)?;
        let weights = linear_weights(period)?;
        let divisor = sum(&weights);
        tracing::debug!(period, "wma state created");
        Ok(Self {
            period,
            weights,
            divisor,
            window: SlidingWindow::new(period),
            tracker: LookbackTracker::new(wma_lookback(period)),
        })
    }

    /// The averaging period.
    #[must_use]
    pub const fn period(&self) -> usize {
        self.period
    }
}

impl<T: SeriesElement> Indicator for Wma<T> {
    type Input = T;
    type Output = T;

    fn advance(&mut self, input: T, mode: BarMode) -> Option<T> {
        self.tracker.advance(mode);
        self.window.apply(input, mode);
        self.tracker
            .is_ready()
            .then(|| weighted_sum(self.window.iter(), &self.weights) / self.divisor)
    }

    fn lookback(&self) -> usize {
        self.tracker.lookback()
    }

    fn bars(&self) -> usize {
        self.tracker.committed()
    }

    fn reset(&mut self) {
        tracing::debug!(period = self.period, "wma state reset");
        self.window.clear();
        self.tracker.reset();
    }
}

/// Computes the Weighted Moving Average over a whole series.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `2..=100_000`.
#[must_use = "this returns a Result with the WMA values, which should be used"]
pub fn wma<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<Option<T>>> {
    Ok(batch_values(Wma::new(period)?, data))
}
