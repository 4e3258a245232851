//! SAR (Parabolic Stop and Reverse) indicator.
//!
//! The Parabolic SAR is a trend-following indicator that provides potential
//! entry and exit points. It appears as dots above or below the price
//! depending on the trend direction.
//!
//! # Formula
//!
//! SAR(i) = SAR(i-1) + AF × (EP - SAR(i-1))
//!
//! Where:
//! - AF = Acceleration Factor, starts at `acceleration` and grows by
//!   `acceleration` each time a new extreme point is made, up to `maximum`
//! - EP = Extreme Point, the highest high in an uptrend or lowest low in a downtrend
//!
//! The stop is never allowed inside the range of the current or previous
//! bar. Piercing the stop reverses the trend; see
//! [`ParabolicState`](crate::kernels::ParabolicState) for the step.
//!
//! # Default Parameters
//!
//! - `acceleration` = 0.02
//! - `maximum` = 0.20
//!
//! An acceleration above the maximum is lowered to the maximum.
//!
//! # Lookback
//!
//! The lookback period is 1 (need at least 2 bars to start).

use crate::batch::{batch_values, zip_high_low};
use crate::error::Result;
use crate::kernels::{LookbackTracker, ParabolicState, SlidingWindow};
use crate::traits::{validate_positive, BarMode, HighLow, Indicator, SeriesElement};

/// Default acceleration factor step.
pub const SAR_DEFAULT_ACCELERATION: f64 = 0.02;

/// Default acceleration factor ceiling.
pub const SAR_DEFAULT_MAXIMUM: f64 = 0.2;

/// Computes the lookback period for SAR.
#[inline]
#[must_use]
pub const fn sar_lookback() -> usize {
    1
}

/// Streaming Parabolic SAR over high/low bars.
#[derive(Debug, Clone, PartialEq)]
pub struct Sar<T> {
    acceleration: T,
    maximum: T,
    window: SlidingWindow<HighLow<T>>,
    tracker: LookbackTracker,
    base: ParabolicState<T>,
    current: ParabolicState<T>,
}

impl<T: SeriesElement> Sar<T> {
    /// Creates a SAR state.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if `acceleration` or `maximum` is
    /// not finite and positive.
    pub fn new(acceleration: T, maximum: T) -> Result<Self> {
        validate_positive("acceleration", acceleration)?;
        validate_positive("maximum", maximum)?;
        let acceleration = acceleration.min(maximum);
        tracing::debug!(
            acceleration = acceleration.widen(),
            maximum = maximum.widen(),
            "sar state created"
        );
        Ok(Self {
            acceleration,
            maximum,
            window: SlidingWindow::new(2),
            tracker: LookbackTracker::new(sar_lookback()),
            base: ParabolicState::default(),
            current: ParabolicState::default(),
        })
    }

    /// The acceleration step in effect (after clamping to the maximum).
    #[must_use]
    pub fn acceleration(&self) -> T {
        self.acceleration
    }

    /// The acceleration ceiling.
    #[must_use]
    pub fn maximum(&self) -> T {
        self.maximum
    }

    /// `Some(true)` while long, `Some(false)` while short, `None` before the
    /// trend is known.
    #[must_use]
    pub fn is_long(&self) -> Option<bool> {
        self.tracker.is_ready().then_some(self.current.is_long)
    }
}

impl<T: SeriesElement> Indicator for Sar<T> {
    type Input = HighLow<T>;
    type Output = T;

    fn advance(&mut self, input: HighLow<T>, mode: BarMode) -> Option<T> {
        let bars = self.tracker.advance(mode);
        self.window.apply(input, mode);
        if !self.tracker.is_ready() {
            return None;
        }
        let (Some(prev), Some(bar)) = (self.window.oldest(), self.window.newest()) else {
            return None;
        };

        let (mut state, prev) = if bars == 2 {
            // The first step sees the second bar as both previous and current.
            (ParabolicState::seed(prev, bar, self.acceleration), bar)
        } else {
            if mode.is_commit() {
                self.base = self.current;
            }
            (self.base, prev)
        };

        let was_long = state.is_long;
        let printed = state.step(prev, bar, self.acceleration, self.maximum);
        if state.is_long != was_long {
            tracing::trace!(
                bar = bars - 1,
                long = state.is_long,
                stop = printed.widen(),
                "sar reversal"
            );
        }
        self.current = state;
        Some(printed)
    }

    fn lookback(&self) -> usize {
        self.tracker.lookback()
    }

    fn bars(&self) -> usize {
        self.tracker.committed()
    }

    fn reset(&mut self) {
        tracing::debug!("sar state reset");
        self.window.clear();
        self.tracker.reset();
        self.base = ParabolicState::default();
        self.current = ParabolicState::default();
    }
}

/// Computes the Parabolic SAR over paired high and low series.
///
/// # Errors
///
/// Returns `Error::InvalidParameter` for a non-positive or non-finite
/// `acceleration`/`maximum`, or `Error::LengthMismatch` if `high` and `low`
/// differ in length.
#[must_use = "this returns a Result with the SAR values, which should be used"]
pub fn sar<T: SeriesElement>(
    high: &[T],
    low: &[T],
    acceleration: T,
    maximum: T,
) -> Result<Vec<Option<T>>> {
    let state = Sar::new(acceleration, maximum)?;
    Ok(batch_values(state, &zip_high_low(high, low)?))
}
