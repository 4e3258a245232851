//! Exponential Moving Average (EMA) indicator.
//!
//! The EMA weights recent samples geometrically more than older ones. It is
//! seeded with the SMA of the first `period` samples and then follows the
//! standard recursion with `α = 2 / (period + 1)`.
//!
//! # Formula
//!
//! ```text
//! EMA[period-1] = SMA(x[0..period])
//! EMA[t]        = (x[t] - EMA[t-1]) × α + EMA[t-1]
//! ```
//!
//! # Revising
//!
//! The state keeps both the value as of the last closed bar (`base`) and the
//! value of the open bar. A revise recomputes the open bar from `base`; a
//! commit first promotes the open value to `base`. Revising therefore never
//! compounds, and a commit after any number of revisions equals committing
//! the last revised sample directly.
//!
//! # Cascades
//!
//! [`EmaCascade`] chains `N` EMA stages where each stage consumes the previous
//! stage's output. DEMA, TEMA and T3 are built from it.
//!
//! # Example
//!
//! ```
//! use fast_ta_stream::indicators::ema::Ema;
//! use fast_ta_stream::traits::{BarMode, Indicator};
//!
//! let mut state = Ema::<f64>::new(2).unwrap();
//! assert_eq!(state.next(100.0, BarMode::Commit), None);
//! assert_eq!(state.next(110.0, BarMode::Commit), Some(105.0));
//! assert_eq!(state.next(120.0, BarMode::Commit), Some(115.0));
//! ```

use crate::batch::batch_values;
use crate::error::Result;
use crate::kernels::{ema_step, sum, LookbackTracker, SlidingWindow};
use crate::traits::{validate_period, BarMode, Indicator, Sample, SeriesElement};

/// Returns the lookback period for EMA.
///
/// # Example
///
/// ```
/// use fast_ta_stream::indicators::ema::ema_lookback;
///
/// assert_eq!(ema_lookback(5), 4);
/// assert_eq!(ema_lookback(14), 13);
/// ```
#[inline]
#[must_use]
pub const fn ema_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Computes the standard smoothing factor `2 / (period + 1)`.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if the period cannot be represented.
pub fn ema_alpha<T: SeriesElement>(period: usize) -> Result<T> {
    Ok(T::two() / (T::from_usize(period)? + T::one()))
}

/// Streaming Exponential Moving Average.
#[derive(Debug, Clone, PartialEq)]
pub struct Ema<T> {
    period: usize,
    alpha: T,
    divisor: T,
    seed: SlidingWindow<T>,
    tracker: LookbackTracker,
    base: T,
    value: T,
}

impl<T: SeriesElement> Ema<T> {
    /// Creates an EMA state.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if `period` is outside `2..=100_000`.
    pub fn new(period: usize) -> Result<Self> {
        validate_period(period)?;
        tracing::debug!(period, "ema state created");
        Ok(Self {
            period,
            alpha: ema_alpha(period)?,
            divisor: T::from_usize(period)?,
            seed: SlidingWindow::new(period),
            tracker: LookbackTracker::new(ema_lookback(period)),
            base: T::zero(),
            value: T::zero(),
        })
    }

    /// The smoothing period.
    #[must_use]
    pub const fn period(&self) -> usize {
        self.period
    }

    /// The smoothing factor α.
    #[must_use]
    pub fn alpha(&self) -> T {
        self.alpha
    }
}

impl<T: SeriesElement> Indicator for Ema<T> {
    type Input = T;
    type Output = T;

    fn advance(&mut self, input: T, mode: BarMode) -> Option<T> {
        let bars = self.tracker.advance(mode);
        if bars <= self.period {
            self.seed.apply(input, mode);
            if bars < self.period {
                return None;
            }
            self.value = sum(self.seed.iter()) / self.divisor;
        } else {
            if mode.is_commit() {
                self.base = self.value;
            }
            self.value = ema_step(self.base, input, self.alpha);
        }
        Some(self.value)
    }

    fn lookback(&self) -> usize {
        self.tracker.lookback()
    }

    fn bars(&self) -> usize {
        self.tracker.committed()
    }

    fn reset(&mut self) {
        tracing::debug!(period = self.period, "ema state reset");
        self.seed.clear();
        self.tracker.reset();
        self.base = T::zero();
        self.value = T::zero();
    }
}

/// `N` EMA stages in series, each fed with the previous stage's output.
///
/// A stage only sees a sample once the stage before it has produced a value,
/// and it sees it in the same [`BarMode`]. A revise therefore corrects every
/// ready stage in place.
#[derive(Debug, Clone, PartialEq)]
pub struct EmaCascade<T, const N: usize> {
    period: usize,
    stages: Vec<Ema<T>>,
}

impl<T: SeriesElement, const N: usize> EmaCascade<T, N> {
    /// Creates `N` EMA stages sharing one period.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if `period` is outside `2..=100_000`.
    pub fn new(period: usize) -> Result<Self> {
        let stages = (0..N).map(|_| Ema::new(period)).collect::<Result<Vec<_>>>()?;
        Ok(Self { period, stages })
    }

    /// Feeds a sample through the stages.
    ///
    /// Returns every stage's output once the last stage is ready, indexed
    /// from the first stage. Missing samples are screened once at the
    /// entrance; past it every stage is advanced with whatever the stage
    /// before it produced, so the stages never drift apart in bar count.
    pub fn next(&mut self, input: T, mode: BarMode) -> Option<[T; N]> {
        if input.is_missing() || (!mode.is_commit() && self.bars() == 0) {
            return None;
        }
        let mut taps = [T::zero(); N];
        let mut value = input;
        for (stage, tap) in self.stages.iter_mut().zip(taps.iter_mut()) {
            value = stage.advance(value, mode)?;
            *tap = value;
        }
        Some(taps)
    }

    /// Number of leading bars before the last stage is ready: `N × (period - 1)`.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        N * ema_lookback(self.period)
    }

    /// Bars committed to the first stage.
    #[must_use]
    pub fn bars(&self) -> usize {
        self.stages.first().map_or(0, Indicator::bars)
    }

    /// Resets every stage.
    pub fn reset(&mut self) {
        self.stages.iter_mut().for_each(Indicator::reset);
    }
}

/// Computes the Exponential Moving Average over a whole series.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is outside `2..=100_000`.
#[must_use = "this returns a Result with the EMA values, which should be used"]
pub fn ema<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<Option<T>>> {
    Ok(batch_values(Ema::new(period)?, data))
}
