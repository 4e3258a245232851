//! MIDPRICE indicator.
//!
//! Center of the range between the highest high and the lowest low of the
//! last `period` bars.
//!
//! # Formula
//!
//! ```text
//! MIDPRICE[t] = (max(high[t-period+1..=t]) + min(low[t-period+1..=t])) / 2
//! ```
//!
//! # Lookback
//!
//! `period - 1`.

use crate::batch::{batch_values, zip_high_low};
use crate::error::Result;
use crate::kernels::{extremes, LookbackTracker, SlidingWindow};
use crate::traits::{validate_period, BarMode, HighLow, Indicator, SeriesElement};

/// Returns the lookback period for MIDPRICE.
#[inline]
#[must_use]
pub const fn midprice_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Streaming MIDPRICE over high/low bars.
#[derive(Debug, Clone, PartialEq)]
pub struct Midprice<T> {
    period: usize,
    window: SlidingWindow<HighLow<T>>,
    tracker: LookbackTracker,
}

impl<T: SeriesElement> Midprice<T> {
    /// Creates a MIDPRICE state.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if `period` is outside `2..=100_000`.
    pub fn new(period: usize) -> Result<Self> {
        validate_period(period)?;
        tracing::debug!(period, "midprice state created");
        Ok(Self {
            period,
            window: SlidingWindow::new(period),
            tracker: LookbackTracker::new(midprice_lookback(period)),
        })
    }
}

impl<T: SeriesElement> Indicator for Midprice<T> {
    type Input = HighLow<T>;
    type Output = T;

    fn advance(&mut self, input: HighLow<T>, mode: BarMode) -> Option<T> {
        self.tracker.advance(mode);
        self.window.apply(input, mode);
        if !self.tracker.is_ready() {
            return None;
        }
        let (highest, _) = extremes(self.window.iter().map(|bar| &bar.high))?;
        let (_, lowest) = extremes(self.window.iter().map(|bar| &bar.low))?;
        Some((highest + lowest) / T::two())
    }

    fn lookback(&self) -> usize {
        self.tracker.lookback()
    }

    fn bars(&self) -> usize {
        self.tracker.committed()
    }

    fn reset(&mut self) {
        tracing::debug!(period = self.period, "midprice state reset");
        self.window.clear();
        self.tracker.reset();
    }
}

/// Computes MIDPRICE over paired high and low series.
///
/// A bar whose high or low is NaN or infinite is missing.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `2..=100_000`, or
/// `Error::LengthMismatch` if `high` and `low` differ in length.
#[must_use = "this returns a Result with the MIDPRICE values, which should be used"]
pub fn midprice<T: SeriesElement>(high: &[T], low: &[T], period: usize) -> Result<Vec<Option<T>>> {
    let state = Midprice::new(period)?;
    Ok(batch_values(state, &zip_high_low(high, low)?))
}
