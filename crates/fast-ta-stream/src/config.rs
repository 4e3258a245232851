//! Indicator configuration.
//!
//! Parameters are plain serde structs with the customary defaults, so a set
//! of indicators can be described in JSON (or any serde format) and turned
//! into live states with [`IndicatorConfig::build`]. Validation happens in
//! the family constructors, once, when the state is built.
//!
//! # Example
//!
//! ```
//! use fast_ta_stream::config::{Family, IndicatorConfig};
//!
//! let config: IndicatorConfig = serde_json::from_str(r#"{"family": "SMA", "period": 3}"#).unwrap();
//! assert_eq!(config.family(), Family::Sma);
//! assert_eq!(config.lookback(), 2);
//! let state = config.build::<f64>().unwrap();
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::indicators::{
    dema_lookback, ema_lookback, ht_trendline_lookback, kama_lookback, midpoint_lookback,
    midprice_lookback, sar_lookback, sma_lookback, t3_lookback, tema_lookback, trima_lookback,
    wma_lookback, AnyIndicator, Dema, Ema, HtTrendline, Kama, Midpoint, Midprice, Sar, Sma, Tema,
    Trima, Wma, T3,
};
use crate::indicators::sar::{SAR_DEFAULT_ACCELERATION, SAR_DEFAULT_MAXIMUM};
use crate::indicators::t3::T3_DEFAULT_VOLUME_FACTOR;
use crate::traits::SeriesElement;

/// Default period of the moving-average families.
pub const DEFAULT_PERIOD: usize = 30;

/// Default period of the range families (MIDPOINT, MIDPRICE).
pub const DEFAULT_RANGE_PERIOD: usize = 14;

/// Default T3 period.
pub const DEFAULT_T3_PERIOD: usize = 5;

/// The indicator families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Family {
    /// Simple Moving Average
    Sma,
    /// Exponential Moving Average
    Ema,
    /// Weighted Moving Average
    Wma,
    /// Double Exponential Moving Average
    Dema,
    /// Triple Exponential Moving Average
    Tema,
    /// Triangular Moving Average
    Trima,
    /// Kaufman Adaptive Moving Average
    Kama,
    /// Tillson T3
    T3,
    /// Parabolic Stop and Reverse
    Sar,
    /// Midpoint of one series
    Midpoint,
    /// Midpoint of the high/low range
    Midprice,
    /// Hilbert Transform instantaneous trendline
    HtTrendline,
}

impl Family {
    /// Every family, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::Sma,
        Self::Ema,
        Self::Wma,
        Self::Dema,
        Self::Tema,
        Self::Trima,
        Self::Kama,
        Self::T3,
        Self::Sar,
        Self::Midpoint,
        Self::Midprice,
        Self::HtTrendline,
    ];

    /// Returns the conventional name of the family.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sma => "SMA",
            Self::Ema => "EMA",
            Self::Wma => "WMA",
            Self::Dema => "DEMA",
            Self::Tema => "TEMA",
            Self::Trima => "TRIMA",
            Self::Kama => "KAMA",
            Self::T3 => "T3",
            Self::Sar => "SAR",
            Self::Midpoint => "MIDPOINT",
            Self::Midprice => "MIDPRICE",
            Self::HtTrendline => "HT_TRENDLINE",
        }
    }

    /// Returns whether this family reads high/low bars instead of one series.
    #[must_use]
    pub fn requires_high_low(self) -> bool {
        matches!(self, Self::Sar | Self::Midprice)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters of the single-period moving averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodParams {
    /// Window or smoothing period.
    pub period: usize,
}

impl Default for PeriodParams {
    fn default() -> Self {
        Self {
            period: DEFAULT_PERIOD,
        }
    }
}

impl PeriodParams {
    /// Creates parameters with the given period.
    #[must_use]
    pub const fn new(period: usize) -> Self {
        Self { period }
    }
}

/// Parameters of MIDPOINT and MIDPRICE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeParams {
    /// Number of bars spanned by the range.
    pub period: usize,
}

impl Default for RangeParams {
    fn default() -> Self {
        Self {
            period: DEFAULT_RANGE_PERIOD,
        }
    }
}

impl RangeParams {
    /// Creates parameters with the given period.
    #[must_use]
    pub const fn new(period: usize) -> Self {
        Self { period }
    }
}

/// Parameters of T3.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct T3Params {
    /// Period of each EMA stage.
    pub period: usize,
    /// Volume factor, in `(0, 1]`.
    pub volume_factor: f64,
}

impl Default for T3Params {
    fn default() -> Self {
        Self {
            period: DEFAULT_T3_PERIOD,
            volume_factor: T3_DEFAULT_VOLUME_FACTOR,
        }
    }
}

/// Parameters of the Parabolic SAR.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SarParams {
    /// Acceleration factor step and starting value.
    pub acceleration: f64,
    /// Acceleration factor ceiling.
    pub maximum: f64,
}

impl Default for SarParams {
    fn default() -> Self {
        Self {
            acceleration: SAR_DEFAULT_ACCELERATION,
            maximum: SAR_DEFAULT_MAXIMUM,
        }
    }
}

/// A family together with its parameters.
///
/// Serialized with the family name as a `"family"` tag next to the parameter
/// fields, e.g. `{"family": "T3", "period": 5, "volume_factor": 0.7}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndicatorConfig {
    /// Simple Moving Average
    Sma(PeriodParams),
    /// Exponential Moving Average
    Ema(PeriodParams),
    /// Weighted Moving Average
    Wma(PeriodParams),
    /// Double Exponential Moving Average
    Dema(PeriodParams),
    /// Triple Exponential Moving Average
    Tema(PeriodParams),
    /// Triangular Moving Average
    Trima(PeriodParams),
    /// Kaufman Adaptive Moving Average
    Kama(PeriodParams),
    /// Tillson T3
    T3(T3Params),
    /// Parabolic Stop and Reverse
    Sar(SarParams),
    /// Midpoint of one series
    Midpoint(RangeParams),
    /// Midpoint of the high/low range
    Midprice(RangeParams),
    /// Hilbert Transform instantaneous trendline
    HtTrendline,
}

impl IndicatorConfig {
    /// The configured family.
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
            Self::HtTrendline => Family::HtTrendline,
        }
    }

    /// Number of leading "not ready" outputs for these parameters.
    #[must_use]
    pub fn lookback(&self) -> usize {
        match *self {
            Self::Sma(p) => sma_lookback(p.period),
            Self::Ema(p) => ema_lookback(p.period),
            Self::Wma(p) => wma_lookback(p.period),
            Self::Dema(p) => dema_lookback(p.period),
            Self::Tema(p) => tema_lookback(p.period),
            Self::Trima(p) => trima_lookback(p.period),
            Self::Kama(p) => kama_lookback(p.period),
            Self::T3(p) => t3_lookback(p.period),
            Self::Sar(_) => sar_lookback(),
            Self::Midpoint(p) => midpoint_lookback(p.period),
            Self::Midprice(p) => midprice_lookback(p.period),
            Self::HtTrendline => ht_trendline_lookback(),
        }
    }

    /// Validates the parameters and builds a fresh state.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` or `Error::InvalidParameter` when the
    /// parameters are out of range, or `Error::NumericConversion` when a
    /// parameter cannot be represented in `T`.
    pub fn build<T: SeriesElement>(&self) -> Result<AnyIndicator<T>> {
        let state = match *self {
            Self::Sma(p) => AnyIndicator::Sma(Sma::new(p.period)?),
            Self::Ema(p) => AnyIndicator::Ema(Ema::new(p.period)?),
            Self::Wma(p) => AnyIndicator::Wma(Wma::new(p.period)?),
            Self::Dema(p) => AnyIndicator::Dema(Dema::new(p.period)?),
            Self::Tema(p) => AnyIndicator::Tema(Tema::new(p.period)?),
            Self::Trima(p) => AnyIndicator::Trima(Trima::new(p.period)?),
            Self::Kama(p) => AnyIndicator::Kama(Kama::new(p.period)?),
            Self::T3(p) => AnyIndicator::T3(T3::new(p.period, T::from_f64(p.volume_factor)?)?),
            Self::Sar(p) => AnyIndicator::Sar(Sar::new(
                T::from_f64(p.acceleration)?,
                T::from_f64(p.maximum)?,
            )?),
            Self::Midpoint(p) => AnyIndicator::Midpoint(Midpoint::new(p.period)?),
            Self::Midprice(p) => AnyIndicator::Midprice(Midprice::new(p.period)?),
            Self::HtTrendline => AnyIndicator::HtTrendline(HtTrendline::new()?),
        };
        tracing::debug!(family = %self.family(), "indicator built from config");
        Ok(state)
    }
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self::Sma(PeriodParams::default())
    }
}
