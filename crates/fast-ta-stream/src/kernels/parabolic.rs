//! Parabolic stop-and-reverse step.
//!
//! [`ParabolicState`] is the whole trend-following accumulator of the SAR
//! family: trend direction, the stop, the extreme point and the acceleration
//! factor. It is `Copy` so the streaming state can keep the snapshot taken at
//! the last commit and recompute the open bar from it on every revise.
//!
//! # Algorithm
//!
//! ```text
//! long:  if low <= sar          reverse: sar = max(ep, prev.high, high), go short
//!        else                   if high > ep { ep = high; af = min(af + step, max) }
//!                               sar = min(sar + af * (ep - sar), prev.low, low)
//! short: mirror image with highs and lows swapped
//! ```
//!
//! The value printed for a bar is the stop in force when the bar opened, or
//! the reversal stop if the bar pierced it.

use crate::traits::{HighLow, SeriesElement};

/// Trend-following accumulator for the parabolic SAR.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParabolicState<T> {
    /// `true` while the trend is up.
    pub is_long: bool,
    /// Stop for the next bar.
    pub sar: T,
    /// Extreme point of the current trend.
    pub extreme: T,
    /// Current acceleration factor.
    pub factor: T,
}

impl<T: SeriesElement> ParabolicState<T> {
    /// Seeds direction and stop from the first two bars.
    ///
    /// The trend starts short only when the second bar's downward extension
    /// is positive and larger than its upward extension.
    #[must_use]
    pub fn seed(first: HighLow<T>, second: HighLow<T>, acceleration: T) -> Self {
        let up = second.high - first.high;
        let down = first.low - second.low;
        let is_long = !(down > T::zero() && up < down);
        if is_long {
            Self {
                is_long,
                sar: first.low,
                extreme: second.high,
                factor: acceleration,
            }
        } else {
            Self {
                is_long,
                sar: first.high,
                extreme: second.low,
                factor: acceleration,
            }
        }
    }

    /// Processes `bar` given the bar before it and returns the SAR printed
    /// for `bar`.
    pub fn step(&mut self, prev: HighLow<T>, bar: HighLow<T>, acceleration: T, maximum: T) -> T {
        if self.is_long {
            if bar.low <= self.sar {
                self.is_long = false;
                let printed = self.extreme.max(prev.high).max(bar.high);
                self.factor = acceleration;
                self.extreme = bar.low;
                let next = printed + self.factor * (self.extreme - printed);
                self.sar = next.max(prev.high).max(bar.high);
                printed
            } else {
                let printed = self.sar;
                if bar.high > self.extreme {
                    self.extreme = bar.high;
                    self.factor = (self.factor + acceleration).min(maximum);
                }
                let next = printed + self.factor * (self.extreme - printed);
                self.sar = next.min(prev.low).min(bar.low);
                printed
            }
        } else if bar.high >= self.sar {
            self.is_long = true;
            let printed = self.extreme.min(prev.low).min(bar.low);
            self.factor = acceleration;
            self.extreme = bar.high;
            let next = printed + self.factor * (self.extreme - printed);
            self.sar = next.min(prev.low).min(bar.low);
            printed
        } else {
            let printed = self.sar;
            if bar.low < self.extreme {
                self.extreme = bar.low;
                self.factor = (self.factor + acceleration).min(maximum);
            }
            let next = printed + self.factor * (self.extreme - printed);
            self.sar = next.max(prev.high).max(bar.high);
            printed
        }
    }
}
