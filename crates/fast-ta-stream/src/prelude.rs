//! Commonly used types and traits for convenient importing.
//!
//! # Usage
//!
//! ```
//! use fast_ta_stream::prelude::*;
//!
//! let prices = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//!
//! let sma_result = sma(&prices, 3).unwrap();
//! let mut state = Ema::<f64>::new(3).unwrap();
//! for &p in &prices {
//!     state.next(p, BarMode::Commit);
//! }
//! assert!(state.is_ready());
//! ```

// Error types
pub use crate::error::{Error, Result};

// Streaming interface
pub use crate::traits::{BarMode, HighLow, Indicator, PriceBar, Sample, SeriesElement};

// Indicator states
pub use crate::indicators::{
    AnyIndicator, Dema, Ema, HtTrendline, Kama, Midpoint, Midprice, Sar, Sma, Tema, Trima, Wma,
    T3,
};

// Batch functions
pub use crate::indicators::{
    dema, ema, ht_trendline, kama, midpoint, midprice, sar, sma, t3, tema, trima, wma,
};

// Lookback functions
pub use crate::indicators::{
    dema_lookback, ema_lookback, ht_trendline_lookback, kama_lookback, midpoint_lookback,
    midprice_lookback, sar_lookback, sma_lookback, t3_lookback, tema_lookback, trima_lookback,
    wma_lookback,
};

// Replay and configuration
pub use crate::batch::{batch, batch_values, BatchProcessor};
pub use crate::config::{Family, IndicatorConfig};
