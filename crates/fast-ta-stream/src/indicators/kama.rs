//! KAMA (Kaufman Adaptive Moving Average) indicator.
//!
//! KAMA is an adaptive moving average that adjusts its smoothing based on
//! market efficiency. It responds quickly during trending markets and slowly
//! during sideways markets.
//!
//! # Formula
//!
//! 1. Efficiency Ratio (ER) = |x\[t\] - x\[t-period\]| / Σ |x\[i\] - x\[i-1\]| over the last `period` changes
//! 2. Smoothing Constant (SC) = \[ER × (`fast_sc` - `slow_sc`) + `slow_sc`\]²
//!    where `fast_sc` = 2/(2+1), `slow_sc` = 2/(30+1)
//! 3. KAMA\[t\] = KAMA\[t-1\] + SC × (x\[t\] - KAMA\[t-1\])
//!
//! The recursion is seeded with the SMA of the first `period` samples, so the
//! first output (at index `period`) is `seed + SC × (x[period] - seed)`.
//!
//! # Lookback
//!
//! `period`: the efficiency ratio needs `period + 1` samples.

use crate::batch::batch_values;
use crate::error::Result;
use crate::kernels::{adaptive_constant, efficiency_ratio, sum, LookbackTracker, SlidingWindow};
use crate::traits::{validate_period, BarMode, Indicator, SeriesElement};

/// Period of the fastest smoothing constant.
pub const KAMA_FAST_PERIOD: usize = 2;

/// Period of the slowest smoothing constant.
pub const KAMA_SLOW_PERIOD: usize = 30;

/// Total path length below which a window counts as motionless.
const MOTIONLESS: f64 = 1e-8;

/// Computes the lookback period for KAMA.
#[inline]
#[must_use]
pub const fn kama_lookback(period: usize) -> usize {
    period
}

/// Streaming Kaufman Adaptive Moving Average.
#[derive(Debug, Clone, PartialEq)]
pub struct Kama<T> {
    period: usize,
    divisor: T,
    fast: T,
    slow: T,
    motionless: T,
    window: SlidingWindow<T>,
    tracker: LookbackTracker,
    base: T,
    value: T,
}

impl<T: SeriesElement> Kama<T> {
    /// Creates a KAMA state.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if `period` is outside `2..=100_000`.
    pub fn new(period: usize) -> Result<Self> {
        validate_period(period)?;
        tracing::debug!(period, "kama state created");
        Ok(Self {
            period,
            divisor: T::from_usize(period)?,
            fast: T::two() / T::from_usize(KAMA_FAST_PERIOD + 1)?,
            slow: T::two() / T::from_usize(KAMA_SLOW_PERIOD + 1)?,
            motionless: T::from_f64(MOTIONLESS)?,
            window: SlidingWindow::new(period + 1),
            tracker: LookbackTracker::new(kama_lookback(period)),
            base: T::zero(),
            value: T::zero(),
        })
    }

    /// The efficiency ratio period.
    #[must_use]
    pub const fn period(&self) -> usize {
        self.period
    }
}

impl<T: SeriesElement> Indicator for Kama<T> {
    type Input = T;
    type Output = T;

    fn advance(&mut self, input: T, mode: BarMode) -> Option<T> {
        let bars = self.tracker.advance(mode);
        self.window.apply(input, mode);
        if !self.tracker.is_ready() {
            return None;
        }
        if mode.is_commit() {
            self.base = if bars == self.period + 1 {
                // SMA of the first `period` samples: everything but the newest.
                sum(self.window.iter().take(self.period)) / self.divisor
            } else {
                self.value
            };
        }
        let er = efficiency_ratio(self.window.iter(), self.motionless);
        let sc = adaptive_constant(er, self.fast, self.slow);
        self.value = self.base + sc * (input - self.base);
        Some(self.value)
    }

    fn lookback(&self) -> usize {
        self.tracker.lookback()
    }

    fn bars(&self) -> usize {
        self.tracker.committed()
    }

    fn reset(&mut self) {
        tracing::debug!(period = self.period, "kama state reset");
        self.window.clear();
        self.tracker.reset();
        self.base = T::zero();
        self.value = T::zero();
    }
}

/// Computes KAMA over a whole series.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `2..=100_000`.
#[must_use = "this returns a Result with the KAMA values, which should be used"]
pub fn kama<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<Option<T>>> {
    Ok(batch_values(Kama::new(period)?, data))
}
