//! Triangular Moving Average (TRIMA) indicator.
//!
//! A moving average whose weights rise linearly to the middle of the window
//! and fall back, equivalent to an SMA of an SMA. The weights are applied to
//! the raw window directly.
//!
//! # Weights
//!
//! ```text
//! odd period  (5):  1 2 3 2 1      total ((p + 1) / 2)²
//! even period (4):  1 2 2 1        total (p / 2)(p / 2 + 1)
//! ```
//!
//! # Lookback
//!
//! `period - 1`.

use crate::batch::batch_values;
use crate::error::Result;
use crate::kernels::{sum, triangular_weights, weighted_sum, LookbackTracker, SlidingWindow};
use crate::traits::{validate_period, BarMode, Indicator, SeriesElement};

/// Returns the lookback period for TRIMA.
#[inline]
#[must_use]
pub const fn trima_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Streaming Triangular Moving Average.
#[derive(Debug, Clone, PartialEq)]
pub struct Trima<T> {
    period: usize,
    weights: Vec<T>,
    divisor: T,
    window: SlidingWindow<T>,
    tracker: LookbackTracker,
}

impl<T: SeriesElement> Trima<T> {
    /// Creates a TRIMA state.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if `period` is outside `2..=100_000`.
    pub fn new(period: usize) -> Result<Self> {
        validate_period(period)?;
        let weights = triangular_weights(period)?;
        let divisor = sum(&weights);
        tracing::debug!(period, "trima state created");
        Ok(Self {
            period,
            weights,
            divisor,
            window: SlidingWindow::new(period),
            tracker: LookbackTracker::new(trima_lookback(period)),
        })
    }

    /// The averaging period.
    #[must_use]
    pub const fn period(&self) -> usize {
        self.period
    }
}

impl<T: SeriesElement> Indicator for Trima<T> {
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
        tracing::debug!(period = self.period, "trima state reset");
        self.window.clear();
        self.tracker.reset();
    }
}

/// Computes the Triangular Moving Average over a whole series.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `2..=100_000`.
#[must_use = "this returns a Result with the TRIMA values, which should be used"]
pub fn trima<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<Option<T>>> {
    Ok(batch_values(Trima::new(period)?, data))
}
