//! Building blocks shared by the indicator families.
//!
//! # Kernels
//!
//! - [`lookback`]: bar counting and readiness gating
//! - [`window`]: bounded oldest-first buffer with commit/revise semantics
//! - [`smoothing`]: stateless sums, weights, extremes and smoothing steps
//! - [`parabolic`]: stop-and-reverse trend accumulator
//! - [`hilbert`]: homodyne cycle estimator behind the instantaneous trendline
//!
//! Nothing here allocates per sample. Windows are sized once at construction
//! and accumulators are `Copy` so indicator states can snapshot them.

pub mod hilbert;
pub mod lookback;
pub mod parabolic;
pub mod smoothing;
pub mod window;

pub use hilbert::{HilbertConstants, TrendlineAccumulator, HT_LOOKBACK, HT_PRICE_WINDOW, HT_WARMUP_START};
pub use lookback::LookbackTracker;
pub use parabolic::ParabolicState;
pub use smoothing::{
    adaptive_constant, efficiency_ratio, ema_step, extremes, linear_weights, sum,
    triangular_weights, weighted_sum,
};
pub use window::SlidingWindow;
