//! `HT_TRENDLINE` (Hilbert Transform - Instantaneous Trendline) indicator.
//!
//! The Hilbert Transform Trendline uses signal processing techniques to
//! compute an adaptive trendline based on the dominant cycle period in the data.
//!
//! This implementation is based on John Ehlers' work on applying the Hilbert
//! Transform to financial market data.
//!
//! # Algorithm
//!
//! 1. Compute smoothed price using a four-bar weighted moving average
//! 2. Apply Hilbert Transform to extract in-phase (I) and quadrature (Q) components
//! 3. Estimate the dominant cycle period with a homodyne discriminator
//! 4. Average the last `round(period)` prices and smooth the result over four bars
//!
//! See [`kernels::hilbert`](crate::kernels::hilbert) for the step itself.
//!
//! # Lookback
//!
//! The lookback period is 63 bars (warm-up period for the Hilbert Transform).

use crate::batch::batch_values;
use crate::error::Result;
use crate::kernels::{
    HilbertConstants, LookbackTracker, SlidingWindow, TrendlineAccumulator, HT_LOOKBACK,
    HT_PRICE_WINDOW, HT_WARMUP_START,
};
use crate::traits::{BarMode, Indicator, SeriesElement};

/// Computes the lookback period for `HT_TRENDLINE`.
#[inline]
#[must_use]
pub const fn ht_trendline_lookback() -> usize {
    HT_LOOKBACK
}

/// Streaming Hilbert Transform instantaneous trendline.
#[derive(Debug, Clone, PartialEq)]
pub struct HtTrendline<T> {
    constants: HilbertConstants<T>,
    prices: SlidingWindow<T>,
    tracker: LookbackTracker,
    base: TrendlineAccumulator<T>,
    current: TrendlineAccumulator<T>,
}

impl<T: SeriesElement> HtTrendline<T> {
    /// Creates an `HT_TRENDLINE` state.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the transform constants cannot be
    /// represented in `T`.
    pub fn new() -> Result<Self> {
        tracing::debug!("ht_trendline state created");
        Ok(Self {
            constants: HilbertConstants::new()?,
            prices: SlidingWindow::new(HT_PRICE_WINDOW),
            tracker: LookbackTracker::new(ht_trendline_lookback()),
            base: TrendlineAccumulator::default(),
            current: TrendlineAccumulator::default(),
        })
    }

    /// Smoothed dominant cycle period as of the latest sample.
    #[must_use]
    pub fn dominant_cycle(&self) -> T {
        self.current.smooth_period()
    }
}

impl<T: SeriesElement> Indicator for HtTrendline<T> {
    type Input = T;
    type Output = T;

    fn advance(&mut self, input: T, mode: BarMode) -> Option<T> {
        let bars = self.tracker.advance(mode);
        self.prices.apply(input, mode);
        let bar = bars.saturating_sub(1);
        if bar < HT_WARMUP_START {
            return None;
        }
        if mode.is_commit() {
            self.base = self.current;
        }
        let mut accumulator = self.base;
        let line = accumulator.advance(&self.prices, bar, &self.constants);
        self.current = accumulator;
        self.tracker.is_ready().then_some(line)
    }

    fn lookback(&self) -> usize {
        self.tracker.lookback()
    }

    fn bars(&self) -> usize {
        self.tracker.committed()
    }

    fn reset(&mut self) {
        tracing::debug!("ht_trendline state reset");
        self.prices.clear();
        self.tracker.reset();
        self.base = TrendlineAccumulator::default();
        self.current = TrendlineAccumulator::default();
    }
}

/// Computes the Hilbert Transform instantaneous trendline over a whole series.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if the transform constants cannot be
/// represented in `T`.
#[must_use = "this returns a Result with the HT_TRENDLINE values, which should be used"]
pub fn ht_trendline<T: SeriesElement>(data: &[T]) -> Result<Vec<Option<T>>> {
    Ok(batch_values(HtTrendline::new()?, data))
}
