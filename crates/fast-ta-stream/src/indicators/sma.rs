//! Simple Moving Average (SMA) indicator.
//!
//! The Simple Moving Average is the arithmetic mean of the last `period`
//! samples. Every output is recomputed from the window, so revising the open
//! bar costs O(period) and never accumulates rounding drift.
//!
//! # Formula
//!
//! ```text
//! SMA[t] = (x[t] + x[t-1] + ... + x[t-period+1]) / period
//! ```
//!
//! # Lookback
//!
//! `period - 1`.
//!
//! # Example
//!
//! ```
//! use fast_ta_stream::indicators::sma::{sma, Sma};
//! use fast_ta_stream::traits::{BarMode, Indicator};
//!
//! let result = sma(&[1.0_f64, 2.0, 3.0, 4.0, 5.0], 3).unwrap();
//! assert_eq!(result, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
//!
//! let mut state = Sma::<f64>::new(3).unwrap();
//! state.next(1.0, BarMode::Commit);
//! state.next(2.0, BarMode::Commit);
//! assert_eq!(state.next(3.0, BarMode::Commit), Some(2.0));
//! assert_eq!(state.next(6.0, BarMode::Revise), Some(3.0));
//! ```

use crate::batch::batch_values;
use crate::error::Result;
use crate::kernels::{sum, LookbackTracker, SlidingWindow};
use crate::traits::{validate_period, BarMode, Indicator, SeriesElement};

/// Returns the lookback period for SMA.
///
/// # Example
///
/// ```
/// use fast_ta_stream::indicators::sma::sma_lookback;
///
/// assert_eq!(sma_lookback(5), 4);
/// ```
#[inline]
#[must_use]
pub const fn sma_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Streaming Simple Moving Average.
#[derive(Debug, Clone, PartialEq)]
pub struct Sma<T> {
    period: usize,
    divisor: T,
    window: SlidingWindow<T>,
    tracker: LookbackTracker,
}

impl<T: SeriesElement> Sma<T> {
    /// Creates an SMA state.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if `period` is outside `2..=100_000`.
    pub fn new(period: usize) -> Result<Self> {
        validate_period(period)?;
        tracing::debug!(period, "sma state created");
        Ok(Self {
            period,
            divisor: T::from_usize(period)?,
            window: SlidingWindow::new(period),
            tracker: LookbackTracker::new(sma_lookback(period)),
        })
    }

    /// The averaging period.
    #[must_use]
    pub const fn period(&self) -> usize {
        self.period
    }
}

impl<T: SeriesElement> Indicator for Sma<T> {
    type Input = T;
    type Output = T;

    fn advance(&mut self, input: T, mode: BarMode) -> Option<T> {
        self.tracker.advance(mode);
        self.window.apply(input, mode);
        self.tracker
            .is_ready()
            .then(|| sum(self.window.iter()) / self.divisor)
    }

    fn lookback(&self) -> usize {
        self.tracker.lookback()
    }

    fn bars(&self) -> usize {
        self.tracker.committed()
    }

    fn reset(&mut self) {
        tracing::debug!(period = self.period, "sma state reset");
        self.window.clear();
        self.tracker.reset();
    }
}

/// Computes the Simple Moving Average over a whole series.
///
/// The output has one entry per input; the first `period - 1` are `None`.
/// NaN and infinite inputs are treated as missing.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `2..=100_000`.
#[must_use = "this returns a Result with the SMA values, which should be used"]
pub fn sma<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<Option<T>>> {
    Ok(batch_values(Sma::new(period)?, data))
}
