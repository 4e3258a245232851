//! Core traits for fast-ta-stream.
//!
//! # Overview
//!
//! - [`SeriesElement`] abstracts over `f32` and `f64` samples.
//! - [`Sample`] tells the engine whether an input is missing.
//! - [`Indicator`] is the uniform streaming interface every family implements:
//!   one sample in, one optional value out, with [`BarMode`] selecting between
//!   closing a new bar and revising the open one.
//!
//! # Example
//!
//! ```
//! use fast_ta_stream::indicators::Sma;
//! use fast_ta_stream::traits::{BarMode, Indicator};
//!
//! let mut sma = Sma::<f64>::new(2).unwrap();
//! assert_eq!(sma.next(1.0, BarMode::Commit), None);
//! assert_eq!(sma.next(3.0, BarMode::Commit), Some(2.0));
//! // The bar is still open: correct its close.
//! assert_eq!(sma.next(5.0, BarMode::Revise), Some(3.0));
//! ```

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// Smallest period accepted by any period-based family.
pub const MIN_PERIOD: usize = 2;

/// Largest period accepted by any period-based family.
pub const MAX_PERIOD: usize = 100_000;

/// A trait for types that can be used as elements in a data series.
///
/// This trait provides a common interface for numeric operations on series data,
/// abstracting over `f32` and `f64` types. It extends `num_traits::Float` with
/// the conversions indicator constructors need.
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// This is commonly used for converting period parameters to the series element type.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }

    /// Widens the value to `f64` for logging and error reporting.
    #[inline]
    #[must_use]
    fn widen(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    /// Returns the constant 2 as this type.
    ///
    /// This is commonly used in EMA calculations: `alpha = 2 / (period + 1)`.
    #[inline]
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// An input observation that may be logically absent.
///
/// NaN and ±infinity are both missing: a non-finite value has no place in a
/// running sum or recursion, where `inf - inf` would turn into NaN. A missing
/// sample never reaches an indicator's state: [`Indicator::next`]
/// returns `None` for it and leaves the state untouched.
pub trait Sample: Copy {
    /// Returns `true` when the sample carries no usable value.
    fn is_missing(&self) -> bool;
}

impl<T: SeriesElement> Sample for T {
    #[inline]
    fn is_missing(&self) -> bool {
        !self.is_finite()
    }
}

/// A high/low pair, the input of the two-series families (SAR, MIDPRICE).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HighLow<T> {
    /// Bar high.
    pub high: T,
    /// Bar low.
    pub low: T,
}

impl<T> HighLow<T> {
    /// Creates a high/low pair.
    #[inline]
    pub const fn new(high: T, low: T) -> Self {
        Self { high, low }
    }
}

impl<T> From<(T, T)> for HighLow<T> {
    #[inline]
    fn from((high, low): (T, T)) -> Self {
        Self { high, low }
    }
}

impl<T: SeriesElement> Sample for HighLow<T> {
    #[inline]
    fn is_missing(&self) -> bool {
        !(self.high.is_finite() && self.low.is_finite())
    }
}

/// A full price bar, the input of [`AnyIndicator`](crate::indicators::AnyIndicator).
///
/// Single-series families read `close`; SAR and MIDPRICE read `high` and
/// `low`. A non-finite field a family reads makes the bar missing for that
/// family.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceBar<T> {
    /// Bar high.
    pub high: T,
    /// Bar low.
    pub low: T,
    /// Bar close.
    pub close: T,
}

impl<T: Copy> PriceBar<T> {
    /// Creates a price bar.
    #[inline]
    pub const fn new(high: T, low: T, close: T) -> Self {
        Self { high, low, close }
    }

    /// A bar whose high, low and close are all `close`.
    #[inline]
    pub const fn from_close(close: T) -> Self {
        Self {
            high: close,
            low: close,
            close,
        }
    }

    /// The high/low part of the bar.
    #[inline]
    pub const fn high_low(&self) -> HighLow<T> {
        HighLow::new(self.high, self.low)
    }
}

impl<T: SeriesElement> Sample for PriceBar<T> {
    #[inline]
    fn is_missing(&self) -> bool {
        !(self.high.is_finite() || self.low.is_finite() || self.close.is_finite())
    }
}

/// How a sample relates to the bar sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarMode {
    /// A new bar has closed: append the sample and advance the lookback counter.
    Commit,
    /// The open bar changed: replace the most recently committed sample.
    Revise,
}

impl BarMode {
    /// Returns `true` for [`BarMode::Commit`].
    #[inline]
    #[must_use]
    pub const fn is_commit(self) -> bool {
        matches!(self, Self::Commit)
    }
}

/// The streaming interface shared by every indicator family.
///
/// An indicator is an owned state machine. Feeding it a sample either closes a
/// new bar ([`BarMode::Commit`]) or corrects the last one ([`BarMode::Revise`]).
/// Revising is idempotent with respect to bar counting, and a Commit that
/// follows any number of Revise calls behaves as if the last revised value had
/// been the one committed.
pub trait Indicator {
    /// The sample type consumed per bar.
    type Input: Sample;
    /// The numeric output type.
    type Output: SeriesElement;

    /// Feeds one well-formed sample.
    ///
    /// Implementations may assume the sample is not missing and, for
    /// [`BarMode::Revise`], that at least one bar has been committed.
    /// Callers should use [`next`](Self::next) instead.
    fn advance(&mut self, input: Self::Input, mode: BarMode) -> Option<Self::Output>;

    /// Number of leading "not ready" outputs for this family and parameters.
    fn lookback(&self) -> usize;

    /// Number of bars committed so far.
    fn bars(&self) -> usize;

    /// Returns the state to its freshly constructed form, keeping parameters.
    fn reset(&mut self);

    /// Feeds one sample and returns the indicator value, or `None` while the
    /// family is still warming up.
    ///
    /// A missing (non-finite) sample, or a Revise before the first Commit,
    /// yields `None` and leaves the state unchanged. A result that overflows
    /// to a non-finite value is also reported as `None`.
    #[inline]
    fn next(&mut self, input: Self::Input, mode: BarMode) -> Option<Self::Output> {
        if input.is_missing() {
            return None;
        }
        if mode == BarMode::Revise && self.bars() == 0 {
            tracing::trace!("revise before first commit ignored");
            return None;
        }
        self.advance(input, mode).filter(|value| value.is_finite())
    }

    /// Like [`next`](Self::next), with absence expressed as `None`.
    #[inline]
    fn update(&mut self, input: Option<Self::Input>, mode: BarMode) -> Option<Self::Output> {
        input.and_then(|sample| self.next(sample, mode))
    }

    /// Consuming form of [`next`](Self::next): the prior state goes in, the
    /// output and the successor state come out.
    #[inline]
    fn step(mut self, input: Self::Input, mode: BarMode) -> (Option<Self::Output>, Self)
    where
        Self: Sized,
    {
        let output = self.next(input, mode);
        (output, self)
    }

    /// Returns `true` once the most recently committed bar produced a value.
    #[inline]
    fn is_ready(&self) -> bool {
        self.bars() > self.lookback()
    }
}

/// Validates that a period is usable by a period-based family.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is below [`MIN_PERIOD`] or
/// above [`MAX_PERIOD`].
#[inline]
pub fn validate_period(period: usize) -> Result<()> {
    if period < MIN_PERIOD {
        Err(Error::InvalidPeriod {
            period,
            reason: "period must be at least 2",
        })
    } else if period > MAX_PERIOD {
        Err(Error::InvalidPeriod {
            period,
            reason: "period must be at most 100000",
        })
    } else {
        Ok(())
    }
}

/// Validates that a factor is finite and strictly positive.
///
/// # Errors
///
/// Returns `Error::InvalidParameter` naming the parameter otherwise.
#[inline]
pub fn validate_positive<T: SeriesElement>(name: &'static str, value: T) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::InvalidParameter {
            name,
            value: value.widen(),
            reason: "must be finite",
        });
    }
    if value <= T::zero() {
        return Err(Error::InvalidParameter {
            name,
            value: value.widen(),
            reason: "must be positive",
        });
    }
    Ok(())
}
