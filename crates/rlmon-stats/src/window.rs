//! Trailing windows for moving averages.
//!
//! A [`TrailingWindow`] keeps at most `capacity` of the most recently pushed
//! values. While fewer than `capacity` values have been pushed the window
//! simply grows; afterwards every push evicts the oldest value. Averaging the
//! window after each push therefore yields a growing-then-sliding moving
//! average with no padding and no look-ahead.

use std::collections::{VecDeque, vec_deque};

/// A fixed-capacity window that evicts its oldest entry when full.
#[derive(Debug, Clone)]
pub struct TrailingWindow<T> {
    capacity: usize,
    buf: VecDeque<T>,
}

impl<T> TrailingWindow<T> {
    /// Creates an empty window holding at most `capacity` entries.
    ///
    /// A window with capacity 0 never stores anything.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            buf: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends `item`, evicting the oldest entry if the window is full.
    pub fn push(&mut self, item: T) {
        if self.capacity == 0 {
            return;
        }
        if self.buf.len() >= self.capacity {
            self.buf.pop_front();
        }
        self.buf.push_back(item);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Iterates from the oldest to the newest entry.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.buf.iter()
    }

    /// Arithmetic mean of `f` applied to every entry, oldest first.
    ///
    /// Returns `None` when the window is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rlmon_stats::window::TrailingWindow;
    /// let mut window = TrailingWindow::with_capacity(2);
    /// window.push((1, 10.0));
    /// window.push((2, 20.0));
    /// window.push((3, 40.0));
    /// assert_eq!(window.mean_by(|(_, v)| *v), Some(30.0));
    /// ```
    #[must_use]
    pub fn mean_by<F>(&self, f: F) -> Option<f64>
    where
        F: FnMut(&T) -> f64,
    {
        crate::descriptive::mean(self.iter().map(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_grows_then_slides() {
        let mut window = TrailingWindow::with_capacity(3);

        window.push(1);
        window.push(2);
        assert_eq!(window.len(), 2);

        window.push(3);
        assert_eq!(window.len(), 3);
        assert_eq!(window.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);

        // Oldest (1) is evicted
        window.push(4);
        assert_eq!(window.len(), 3);
        assert_eq!(window.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn test_window_capacity_one() {
        let mut window = TrailingWindow::with_capacity(1);

        window.push("first");
        window.push("second");

        assert_eq!(window.len(), 1);
        assert_eq!(window.iter().copied().collect::<Vec<_>>(), vec!["second"]);
    }

    #[test]
    fn test_window_capacity_zero() {
        let mut window = TrailingWindow::with_capacity(0);

        window.push(1.0);
        window.push(2.0);

        assert!(window.is_empty());
        assert_eq!(window.mean_by(|v| *v), None);
    }

    #[test]
    fn test_mean_by_follows_slide() {
        let mut window = TrailingWindow::with_capacity(2);
        let mut means = vec![];
        for v in [4.0, 2.0, 6.0] {
            window.push(v);
            means.push(window.mean_by(|v| *v).unwrap());
        }
        assert_eq!(means, vec![4.0, 3.0, 4.0]);
    }
}
