//! Fixed-capacity sliding window over the most recent samples.
//!
//! The window is ordered oldest first. A commit appends and evicts the oldest
//! element on overflow; a revise overwrites the newest element in place. Its
//! length never exceeds its capacity.
//!
//! # Example
//!
//! ```
//! use fast_ta_stream::kernels::SlidingWindow;
//!
//! let mut window = SlidingWindow::new(2);
//! window.push_evict(1.0);
//! window.push_evict(2.0);
//! assert_eq!(window.push_evict(3.0), Some(1.0));
//! assert_eq!(window.replace_last(4.0), Some(3.0));
//! assert_eq!(window.iter().copied().collect::<Vec<_>>(), vec![2.0, 4.0]);
//! ```

use std::collections::vec_deque::{self, VecDeque};

use crate::traits::BarMode;

/// A bounded, oldest-first buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct SlidingWindow<T> {
    buffer: VecDeque<T>,
    capacity: usize,
}

impl<T: Copy> SlidingWindow<T> {
    /// Creates an empty window holding at most `capacity` elements.
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends `value`, evicting and returning the oldest element when full.
    #[inline]
    pub fn push_evict(&mut self, value: T) -> Option<T> {
        let evicted = if self.buffer.len() == self.capacity {
            self.buffer.pop_front()
        } else {
            None
        };
        self.buffer.push_back(value);
        evicted
    }

    /// Overwrites the newest element, returning the value it replaced.
    ///
    /// Does nothing and returns `None` on an empty window.
    #[inline]
    pub fn replace_last(&mut self, value: T) -> Option<T> {
        self.buffer
            .back_mut()
            .map(|slot| std::mem::replace(slot, value))
    }

    /// Applies `value` according to `mode`: push on commit, replace on revise.
    #[inline]
    pub fn apply(&mut self, value: T, mode: BarMode) {
        match mode {
            BarMode::Commit => {
                self.push_evict(value);
            }
            BarMode::Revise => {
                self.replace_last(value);
            }
        }
    }

    /// Number of elements held.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` when the window holds nothing.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns `true` when the window holds `capacity` elements.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.buffer.len() == self.capacity
    }

    /// Maximum number of elements held.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates oldest to newest.
    #[inline]
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.buffer.iter()
    }

    /// The element at `index`, counted from the oldest.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        self.buffer.get(index).copied()
    }

    /// The element `age` positions before the newest (`age == 0` is the newest).
    #[inline]
    #[must_use]
    pub fn back(&self, age: usize) -> Option<T> {
        self.buffer
            .len()
            .checked_sub(age + 1)
            .and_then(|index| self.get(index))
    }

    /// The most recent element.
    #[inline]
    #[must_use]
    pub fn newest(&self) -> Option<T> {
        self.buffer.back().copied()
    }

    /// The least recent element.
    #[inline]
    #[must_use]
    pub fn oldest(&self) -> Option<T> {
        self.buffer.front().copied()
    }

    /// Removes every element, keeping the capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(window: &SlidingWindow<f64>) -> Vec<f64> {
        window.iter().copied().collect()
    }

    #[test]
    fn test_push_below_capacity() {
        let mut window = SlidingWindow::new(3);
        assert_eq!(window.push_evict(1.0), None);
        assert_eq!(window.push_evict(2.0), None);
        assert_eq!(contents(&window), vec![1.0, 2.0]);
        assert!(!window.is_full());
    }

    #[test]
    fn test_push_evicts_oldest() {
        let mut window = SlidingWindow::new(2);
        window.push_evict(1.0);
        window.push_evict(2.0);
        assert_eq!(window.push_evict(3.0), Some(1.0));
        assert_eq!(contents(&window), vec![2.0, 3.0]);
        assert_eq!(window.len(), 2);
    }

    #[test]
    fn test_replace_last() {
        let mut window = SlidingWindow::new(3);
        window.push_evict(1.0);
        window.push_evict(2.0);
        assert_eq!(window.replace_last(5.0), Some(2.0));
        assert_eq!(contents(&window), vec![1.0, 5.0]);
    }

    #[test]
    fn test_replace_last_on_empty() {
        let mut window: SlidingWindow<f64> = SlidingWindow::new(3);
        assert_eq!(window.replace_last(5.0), None);
        assert!(window.is_empty());
    }

    #[test]
    fn test_apply_dispatches_on_mode() {
        let mut window = SlidingWindow::new(2);
        window.apply(1.0, BarMode::Commit);
        window.apply(2.0, BarMode::Commit);
        window.apply(3.0, BarMode::Revise);
        window.apply(4.0, BarMode::Commit);
        assert_eq!(contents(&window), vec![3.0, 4.0]);
    }

    #[test]
    fn test_accessors() {
        let mut window = SlidingWindow::new(3);
        for v in [1.0, 2.0, 3.0, 4.0] {
            window.push_evict(v);
        }
        assert_eq!(window.oldest(), Some(2.0));
        assert_eq!(window.newest(), Some(4.0));
        assert_eq!(window.get(1), Some(3.0));
        assert_eq!(window.back(0), Some(4.0));
        assert_eq!(window.back(2), Some(2.0));
        assert_eq!(window.back(3), None);
        assert_eq!(window.capacity(), 3);
    }

    #[test]
    fn test_zero_capacity_raised() {
        let mut window = SlidingWindow::new(0);
        window.push_evict(1.0);
        window.push_evict(2.0);
        assert_eq!(contents(&window), vec![2.0]);
    }

    #[test]
    fn test_clear() {
        let mut window = SlidingWindow::new(2);
        window.push_evict(1.0);
        window.clear();
        assert!(window.is_empty());
        assert_eq!(window.capacity(), 2);
    }
}
