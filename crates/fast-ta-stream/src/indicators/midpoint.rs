//! MIDPOINT indicator.
//!
//! Center of the range spanned by the last `period` samples of one series.
//!
//! # Formula
//!
//! ```text
//! MIDPOINT[t] = (max(x[t-period+1..=t]) + min(x[t-period+1..=t])) / 2
//! ```
//!
//! # Lookback
//!
//! `period - 1`.

use crate::batch::batch_values;
use crate::error::Result;
use crate::kernels::{extremes, LookbackTracker, SlidingWindow};
use crate::traits::{validate_period, BarMode, Indicator, SeriesElement};

/// Returns the lookback period for MIDPOINT.
#[inline]
#[must_use]
pub const fn midpoint_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Streaming MIDPOINT.
#[derive(Debug, Clone, PartialEq)]
pub struct Midpoint<T> {
    period: usize,
    window: SlidingWindow<T>,
    tracker: LookbackTracker,
}

impl<T: SeriesElement> Midpoint<T> {
    /// Creates a MIDPOINT state.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if `period` is outside `2..=100_000`.
    pub fn new(period: usize) -> Result<Self> {
        validate_period(period)?;
        tracing::debug!(period, "midpoint state created");
        Ok(Self {
            period,
            window: SlidingWindow::new(period),
            tracker: LookbackTracker::new(midpoint_lookback(period)),
        })
    }
}

impl<T: SeriesElement> Indicator for Midpoint<T> {
    type Input = T;
    type Output = T;

    fn advance(&mut self, input: T, mode: BarMode) -> Option<T> {
        self.tracker.advance(mode);
        self.window.apply(input, mode);
        if !self.tracker.is_ready() {
            return None;
        }
        extremes(self.window.iter()).map(|(high, low)| (high + low) / T::two())
    }

    fn lookback(&self) -> usize {
        self.tracker.lookback()
    }

    fn bars(&self) -> usize {
        self.tracker.committed()
    }

    fn reset(&mut self) {
        tracing::debug!(period = self.period, "midpoint state reset");
        self.window.clear();
        self.tracker.reset();
    }
}

/// Computes MIDPOINT over a whole series.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `2..=100_000`.
#[must_use = "this returns a Result with the MIDPOINT values, which should be used"]
pub fn midpoint<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<Option<T>>> {
    Ok(batch_values(Midpoint::new(period)?, data))
}
