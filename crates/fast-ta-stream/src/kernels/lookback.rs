//! Lookback tracking for streaming indicators.
//!
//! Every family has a lookback `k`: the number of leading bars for which it
//! cannot produce a value. The tracker counts committed bars and reports
//! readiness once more than `k` bars have closed, so the first value lands on
//! index `k` in both streaming and batch replay.

use crate::traits::BarMode;

/// Counts committed bars and gates output on a fixed lookback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookbackTracker {
    committed: usize,
    lookback: usize,
}

impl LookbackTracker {
    /// Creates a tracker for a family with the given lookback.
    #[inline]
    #[must_use]
    pub const fn new(lookback: usize) -> Self {
        Self {
            committed: 0,
            lookback,
        }
    }

    /// Records one sample. Only [`BarMode::Commit`] moves the counter.
    ///
    /// Returns the number of committed bars after the update.
    #[inline]
    pub fn advance(&mut self, mode: BarMode) -> usize {
        if mode.is_commit() {
            self.committed += 1;
        }
        self.committed
    }

    /// Number of committed bars.
    #[inline]
    #[must_use]
    pub const fn committed(&self) -> usize {
        self.committed
    }

    /// The lookback this tracker gates on.
    #[inline]
    #[must_use]
    pub const fn lookback(&self) -> usize {
        self.lookback
    }

    /// Returns `true` once more than `lookback` bars have been committed.
    #[inline]
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.committed > self.lookback
    }

    /// Forgets every committed bar.
    #[inline]
    pub fn reset(&mut self) {
        self.committed = 0;
    }
}
