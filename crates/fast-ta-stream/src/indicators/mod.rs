//! Overlap-study indicator families.
//!
//! Every family is a streaming state implementing
//! [`Indicator`](crate::traits::Indicator), plus a batch function that replays
//! a whole series through a fresh state.
//!
//! # Overview
//!
//! All indicators in this module share the following properties:
//!
//! - **Generic**: Work with both `f32` and `f64` types via the
//!   [`SeriesElement`](crate::traits::SeriesElement) trait
//! - **Revisable**: the open bar can be corrected any number of times before
//!   the next one closes
//! - **Gap-aware**: a NaN or infinite sample is missing and leaves the state untouched
//! - **Aligned**: batch output has one entry per input, `None` through the
//!   lookback
//!
//! # Families
//!
//! ## Moving averages
//!
//! - [`sma`] - Simple Moving Average
//! - [`ema`] - Exponential Moving Average
//! - [`wma`] - Weighted Moving Average
//! - [`dema`] - Double Exponential Moving Average
//! - [`tema`] - Triple Exponential Moving Average
//! - [`trima`] - Triangular Moving Average
//! - [`kama`] - Kaufman Adaptive Moving Average
//! - [`t3`] - Tillson T3
//!
//! ## Trend and range
//!
//! - [`sar`] - Parabolic Stop and Reverse (high/low input)
//! - [`midpoint`] - center of the range of one series
//! - [`midprice`] - center of the high/low range (high/low input)
//! - [`ht_trendline`] - Hilbert Transform instantaneous trendline
//!
//! # Example
//!
//! ```
//! use fast_ta_stream::indicators::{ema, sma, wma};
//!
//! let prices = vec![44.0_f64, 44.5, 43.5, 44.5, 44.0, 43.0, 42.5, 43.5, 44.5, 45.0];
//!
//! let sma_result = sma(&prices, 5).unwrap();
//! let ema_result = ema(&prices, 5).unwrap();
//! let wma_result = wma(&prices, 5).unwrap();
//! assert_eq!(sma_result.iter().filter(|v| v.is_some()).count(), 6);
//! ```

use crate::config::Family;
use crate::traits::{BarMode, Indicator, PriceBar, SeriesElement};

pub mod dema;
pub mod ema;
pub mod ht_trendline;
pub mod kama;
pub mod midpoint;
pub mod midprice;
pub mod sar;
pub mod sma;
pub mod t3;
pub mod tema;
pub mod trima;
pub mod wma;

pub use dema::{dema, dema_lookback, Dema};
pub use ema::{ema, ema_alpha, ema_lookback, Ema, EmaCascade};
pub use ht_trendline::{ht_trendline, ht_trendline_lookback, HtTrendline};
pub use kama::{kama, kama_lookback, Kama};
pub use midpoint::{midpoint, midpoint_lookback, Midpoint};
pub use midprice::{midprice, midprice_lookback, Midprice};
pub use sar::{sar, sar_lookback, Sar};
pub use sma::{sma, sma_lookback, Sma};
pub use t3::{t3, t3_lookback, T3};
pub use tema::{tema, tema_lookback, Tema};
pub use trima::{trima, trima_lookback, Trima};
pub use wma::{wma, wma_lookback, Wma};

/// Any family behind one type, fed with full [`PriceBar`]s.
///
/// Built from configuration with
/// [`IndicatorConfig::build`](crate::config::IndicatorConfig::build).
#[derive(Debug, Clone, PartialEq)]
pub enum AnyIndicator<T> {
    /// Simple Moving Average
    Sma(Sma<T>),
    /// Exponential Moving Average
    Ema(Ema<T>),
    /// Weighted Moving Average
    Wma(Wma<T>),
    /// Double Exponential Moving Average
    Dema(Dema<T>),
    /// Triple Exponential Moving Average
    Tema(Tema<T>),
    /// Triangular Moving Average
    Trima(Trima<T>),
    /// Kaufman Adaptive Moving Average
    Kama(Kama<T>),
    /// Tillson T3
    T3(T3<T>),
    /// Parabolic Stop and Reverse
    Sar(Sar<T>),
    /// Midpoint of one series
    Midpoint(Midpoint<T>),
    /// Midpoint of the high/low range
    Midprice(Midprice<T>),
    /// Hilbert Transform instantaneous trendline
    HtTrendline(HtTrendline<T>),
}

macro_rules! dispatch {
    ($value:expr, $state:ident => $body:expr) => {
        match $value {
            AnyIndicator::Sma($state) => $body,
            AnyIndicator::Ema($state) => $body,
            AnyIndicator::Wma($state) => $body,
            AnyIndicator::Dema($state) => $body,
            AnyIndicator::Tema($state) => $body,
            AnyIndicator::Trima($state) => $body,
            AnyIndicator::Kama($state) => $body,
            AnyIndicator::T3($state) => $body,
            AnyIndicator::Sar($state) => $body,
            AnyIndicator::Midpoint($state) => $body,
            AnyIndicator::Midprice($state) => $body,
            AnyIndicator::HtTrendline($state) => $body,
        }
    };
}

impl<T: SeriesElement> AnyIndicator<T> {
    /// The family of the wrapped state.
    #[must_use]
    pub fn family(&self) -> Family {
        match self {
            Self::Sma(_) => Family::Sma,
            Self::Ema(_) => Family::Ema,
            Self::Wma(_) => Family::Wma,
            Self::Dema(_) => Family::Dema,
            Self::Tema(_) => Family::Tema,
            Self::Trima(_) => Family::Trima,
            Self::Kama(_) => Family::Kama,
            Self::T3(_) => Family::T3,
            Self::Sar(_) => Family::Sar,
            Self::Midpoint(_) => Family::Midpoint,
            Self::Midprice(_) => Family::Midprice,
            Self::HtTrendline(_) => Family::HtTrendline,
        }
    }
}

impl<T: SeriesElement> Indicator for AnyIndicator<T> {
    type Input = PriceBar<T>;
    type Output = T;

    fn advance(&mut self, input: PriceBar<T>, mode: BarMode) -> Option<T> {
        match self {
            Self::Sar(state) => state.next(input.high_low(), mode),
            Self::Midprice(state) => state.next(input.high_low(), mode),
            Self::Sma(state) => state.next(input.close, mode),
            Self::Ema(state) => state.next(input.close, mode),
            Self::Wma(state) => state.next(input.close, mode),
            Self::Dema(state) => state.next(input.close, mode),
            Self::Tema(state) => state.next(input.close, mode),
            Self::Trima(state) => state.next(input.close, mode),
            Self::Kama(state) => state.next(input.close, mode),
            Self::T3(state) => state.next(input.close, mode),
            Self::Midpoint(state) => state.next(input.close, mode),
            Self::HtTrendline(state) => state.next(input.close, mode),
        }
    }

    fn lookback(&self) -> usize {
        dispatch!(self, state => state.lookback())
    }

    fn bars(&self) -> usize {
        dispatch!(self, state => state.bars())
    }

    fn reset(&mut self) {
        dispatch!(self, state => state.reset());
    }
}
