//! fast-ta-stream: streaming overlap-study indicators
//!
//! This crate computes the classic overlap studies (moving averages, the
//! parabolic SAR, range midpoints and the Hilbert transform trendline) as
//! incremental state machines. Every state accepts one bar at a time, can
//! revise the bar that is still open, and agrees exactly with replaying the
//! whole series in one batch.
//!
//! # Features
//!
//! - **Streaming**: O(1) state per indicator, one sample in, one value out
//! - **Revisable bars**: [`BarMode::Revise`](traits::BarMode::Revise) corrects the open bar without
//!   double-counting it
//! - **Consistent**: batch functions are literal replays of the streaming state
//! - **Generics**: works with both `f32` and `f64` data types
//!
//! # Quick Start
//!
//! ```
//! use fast_ta_stream::prelude::*;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = sma(&data, 3).unwrap();
//! assert_eq!(result, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
//!
//! let mut state = Sma::<f64>::new(3).unwrap();
//! for &x in &data[..4] {
//!     state.next(x, BarMode::Commit);
//! }
//! // The last bar is still forming: its close moves from 4 to 10.
//! assert_eq!(state.next(10.0, BarMode::Revise), Some(5.0));
//! ```
//!
//! # Available Indicators
//!
//! ## Moving Averages
//! - [`indicators::sma()`], [`indicators::ema()`], [`indicators::wma()`]
//! - [`indicators::dema()`], [`indicators::tema()`], [`indicators::t3()`]
//! - [`indicators::trima()`], [`indicators::kama()`]
//!
//! ## Trend and Range
//! - [`indicators::sar()`]: Parabolic SAR
//! - [`indicators::midpoint()`], [`indicators::midprice()`]
//! - [`indicators::ht_trendline()`]: Hilbert Transform instantaneous trendline
//!
//! # Error Handling
//!
//! Only construction can fail. A state that has not seen enough bars yields
//! `None`, never an error:
//!
//! ```
//! use fast_ta_stream::prelude::*;
//!
//! assert!(matches!(sma(&[1.0_f64, 2.0], 1), Err(Error::InvalidPeriod { .. })));
//! assert_eq!(sma(&[1.0_f64, 2.0], 10).unwrap(), vec![None, None]);
//! ```
//!
//! # Logging
//!
//! States emit [`tracing`] events (`debug` on construction and reset,
//! `trace` for SAR reversals and ignored revisions). The crate installs no
//! subscriber.

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

pub mod batch;
pub mod config;
pub mod error;
pub mod indicators;
pub mod kernels;
pub mod prelude;
pub mod traits;
pub mod utils;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use traits::{BarMode, HighLow, Indicator, SeriesElement};
pub use utils::{approx_eq, approx_eq_opt, count_not_ready_prefix, EPSILON, LOOSE_EPSILON};
