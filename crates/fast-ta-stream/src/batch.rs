//! Batch replay of streaming states.
//!
//! A batch computation is nothing more than a fresh state folded over the
//! series with [`BarMode::Commit`]. Because batch and streaming share the
//! same code path, a state fed bar by bar always agrees with the batch
//! output for the same prefix.
//!
//! [`BatchProcessor`] runs many independent series at once, in parallel with
//! Rayon when the `parallel` feature is enabled:
//!
//! ```toml
//! [dependencies]
//! fast-ta-stream = { version = "0.1", features = ["parallel"] }
//! ```
//!
//! # Example
//!
//! ```
//! use fast_ta_stream::batch::{batch, BatchProcessor};
//! use fast_ta_stream::indicators::Sma;
//!
//! let out = batch(Sma::new(2).unwrap(), &[Some(1.0_f64), None, Some(3.0), Some(5.0)]);
//! assert_eq!(out, vec![None, None, Some(2.0), Some(4.0)]);
//!
//! let series = vec![vec![1.0_f64, 2.0, 3.0], vec![3.0, 2.0, 1.0]];
//! let results = BatchProcessor::new()
//!     .process(&series, || Sma::new(2))
//!     .unwrap();
//! assert_eq!(results[1], vec![None, Some(2.5), Some(1.5)]);
//! ```

use crate::error::{Error, Result};
use crate::traits::{BarMode, HighLow, Indicator, SeriesElement};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Replays a series with gaps through `indicator`.
///
/// The output has exactly one entry per input. `None` inputs (and non-finite
/// samples) yield `None` without touching the state, so leading gaps shift
/// the warm-up and interior gaps only blank their own position.
pub fn batch<I: Indicator>(indicator: I, series: &[Option<I::Input>]) -> Vec<Option<I::Output>> {
    let (outputs, _) = series.iter().fold(
        (Vec::with_capacity(series.len()), indicator),
        |(mut outputs, state), sample| {
            let (output, state) = match *sample {
                Some(sample) => state.step(sample, BarMode::Commit),
                None => (None, state),
            };
            outputs.push(output);
            (outputs, state)
        },
    );
    outputs
}

/// Replays a dense series through `indicator`; non-finite samples count as missing.
pub fn batch_values<I: Indicator>(mut indicator: I, series: &[I::Input]) -> Vec<Option<I::Output>> {
    series
        .iter()
        .map(|&sample| indicator.next(sample, BarMode::Commit))
        .collect()
}

/// Pairs high and low series into bars.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the series differ in length.
pub fn zip_high_low<T: SeriesElement>(high: &[T], low: &[T]) -> Result<Vec<HighLow<T>>> {
    if high.len() != low.len() {
        return Err(Error::LengthMismatch {
            description: format!(
                "high has {} elements, low has {}",
                high.len(),
                low.len()
            ),
        });
    }
    Ok(high
        .iter()
        .zip(low)
        .map(|(&high, &low)| HighLow::new(high, low))
        .collect())
}

/// Batch processor for many independent series.
///
/// Each series gets its own freshly built state.
#[derive(Debug, Default, Clone)]
pub struct BatchProcessor {
    /// Minimum number of series before work is spread over threads.
    min_parallel_threshold: usize,
}

impl BatchProcessor {
    /// Creates a new batch processor with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_parallel_threshold: 16,
        }
    }

    /// Sets the minimum number of series required to use parallel processing.
    ///
    /// Below this threshold, series are processed sequentially.
    #[must_use]
    pub const fn min_parallel_threshold(mut self, threshold: usize) -> Self {
        self.min_parallel_threshold = threshold;
        self
    }

    /// Replays every series through a state produced by `make`.
    ///
    /// # Errors
    ///
    /// Returns the first error `make` reports.
    #[cfg(feature = "parallel")]
    pub fn process<I, F>(&self, series: &[Vec<I::Input>], make: F) -> Result<Vec<Vec<Option<I::Output>>>>
    where
        I: Indicator,
        I::Input: Sync,
        I::Output: Send,
        F: Fn() -> Result<I> + Send + Sync,
    {
        if series.len() < self.min_parallel_threshold {
            series
                .iter()
                .map(|s| Ok(batch_values(make()?, s)))
                .collect()
        } else {
            tracing::debug!(series = series.len(), "processing batch in parallel");
            series
                .par_iter()
                .map(|s| Ok(batch_values(make()?, s)))
                .collect()
        }
    }

    /// Sequential version when parallel feature is disabled.
    ///
    /// # Errors
    ///
    /// Returns the first error `make` reports.
    #[cfg(not(feature = "parallel"))]
    pub fn process<I, F>(&self, series: &[Vec<I::Input>], make: F) -> Result<Vec<Vec<Option<I::Output>>>>
    where
        I: Indicator,
        F: Fn() -> Result<I>,
    {
        series
            .iter()
            .map(|s| Ok(batch_values(make()?, s)))
            .collect()
    }
}
