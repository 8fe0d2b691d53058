//! Sliding-window maximum and minimum over a monotonic deque.
//!
//! The deque holds `(position, value)` pairs whose values are strictly
//! decreasing front to back for [`Extremum::Max`] (strictly increasing for
//! [`Extremum::Min`]), so the front is always the extremum of the current
//! window. Every value is pushed and popped at most once, giving amortised
//! O(1) work per element and at most `width` values held at any time.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::convert::Infallible;

/// Which end of the ordering a window reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extremum {
    Max,
    Min,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WindowError {
    #[error("invalid window size {0}: must be at least 1")]
    InvalidWindow(usize),
    #[error("value at position {index} has no defined order against the window")]
    Incomparable { index: usize },
}

/// Streaming sliding-window extremum.
///
/// Feed values in order with [`SlidingWindow::push`]; once `width` values have
/// been seen, each push returns the extremum of the last `width` values.
///
/// ```
/// use algo_toolkit::window::{Extremum, SlidingWindow};
///
/// let mut w = SlidingWindow::new(2, Extremum::Min).unwrap();
/// assert_eq!(w.push(4), None);
/// assert_eq!(w.push(1), Some(1));
/// assert_eq!(w.push(7), Some(1));
/// assert_eq!(w.push(9), Some(7));
/// ```
#[derive(Debug, Clone)]
pub struct SlidingWindow<T> {
    width: usize,
    extremum: Extremum,
    seen: usize,
    deque: VecDeque<(usize, T)>,
}

impl<T> SlidingWindow<T> {
    pub fn new(width: usize, extremum: Extremum) -> Result<Self, WindowError> {
        if width == 0 {
            return Err(WindowError::InvalidWindow(width));
        }
        Ok(Self { width, extremum, seen: 0, deque: VecDeque::new() })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn extremum(&self) -> Extremum {
        self.extremum
    }

    /// Number of values pushed so far.
    pub fn seen(&self) -> usize {
        self.seen
    }

    /// Number of candidate values currently held; never exceeds `width`.
    pub fn len(&self) -> usize {
        self.deque.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }

    /// Push with a caller-supplied ordering. `cmp` must be a total order.
    pub fn push_by<F>(&mut self, value: T, mut cmp: F) -> Option<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        match self.push_with(value, |a, b| Ok::<_, Infallible>(cmp(a, b))) {
            Ok(out) => out,
            Err(never) => match never {},
        }
    }

    fn push_with<F, E>(&mut self, value: T, mut cmp: F) -> Result<Option<T>, E>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Result<Ordering, E>,
    {
        let i = self.seen;
        self.seen += 1;

        // Drop positions that slid out of the window.
        let width = self.width;
        while self.deque.front().is_some_and(|&(pos, _)| pos + width <= i) {
            self.deque.pop_front();
        }

        // Drop candidates the new value dominates; ties go too, keeping the deque strict.
        while let Some((_, back)) = self.deque.back() {
            let ord = cmp(back, &value)?;
            let dominated = match self.extremum {
                Extremum::Max => ord != Ordering::Greater,
                Extremum::Min => ord != Ordering::Less,
            };
            if !dominated {
                break;
            }
            self.deque.pop_back();
        }
        self.deque.push_back((i, value));

        if i + 1 < width {
            return Ok(None);
        }
        Ok(self.deque.front().map(|(_, v)| v.clone()))
    }
}

impl<T: Ord + Clone> SlidingWindow<T> {
    /// Push the next value; returns the window's extremum once the window is full.
    pub fn push(&mut self, value: T) -> Option<T> {
        self.push_by(value, T::cmp)
    }
}

impl<T: PartialOrd + Clone> SlidingWindow<T> {
    /// Like [`SlidingWindow::push`] for partially ordered values such as floats.
    ///
    /// Fails with [`WindowError::Incomparable`] when the value cannot be ordered
    /// against a held candidate; the window should be discarded after an error.
    pub fn try_push(&mut self, value: T) -> Result<Option<T>, WindowError> {
        let index = self.seen;
        self.push_with(value, |a, b| a.partial_cmp(b).ok_or(WindowError::Incomparable { index }))
    }
}

/// Maximum of every window of width `k`, left to right.
///
/// Returns `len - k + 1` values, or none when `k` exceeds the input length.
///
/// ```
/// use algo_toolkit::window::{window_maximum, WindowError};
///
/// assert_eq!(window_maximum(&[1, 3, -1, -3, 5, 3, 6, 7], 3).unwrap(), vec![3, 3, 5, 5, 6, 7]);
/// assert!(window_maximum(&[1, 2], 5).unwrap().is_empty());
/// assert_eq!(window_maximum::<i32>(&[1, 2], 0), Err(WindowError::InvalidWindow(0)));
/// ```
pub fn window_maximum<T: Ord + Clone>(values: &[T], k: usize) -> Result<Vec<T>, WindowError> {
    window_extremum_by(values, k, Extremum::Max, T::cmp)
}

/// Minimum of every window of width `k`, left to right.
pub fn window_minimum<T: Ord + Clone>(values: &[T], k: usize) -> Result<Vec<T>, WindowError> {
    window_extremum_by(values, k, Extremum::Min, T::cmp)
}

/// Window extremum under a caller-supplied total order.
pub fn window_extremum_by<T, F>(
    values: &[T],
    k: usize,
    extremum: Extremum,
    mut cmp: F,
) -> Result<Vec<T>, WindowError>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut window = SlidingWindow::new(k, extremum)?;
    log::trace!("{extremum:?} window of width {k} over {} values", values.len());
    let out = values
        .iter()
        .filter_map(|v| window.push_by(v, |a: &&T, b: &&T| cmp(*a, *b)))
        .cloned()
        .collect();
    Ok(out)
}

/// [`window_maximum`] for partially ordered values; fails on the first incomparable value.
///
/// ```
/// use algo_toolkit::window::{try_window_maximum, WindowError};
///
/// assert_eq!(try_window_maximum(&[0.5, 2.0, 1.0], 2).unwrap(), vec![2.0, 2.0]);
/// assert_eq!(
///     try_window_maximum(&[0.5, f64::NAN, 1.0], 2),
///     Err(WindowError::Incomparable { index: 1 })
/// );
/// ```
pub fn try_window_maximum<T: PartialOrd + Clone>(
    values: &[T],
    k: usize,
) -> Result<Vec<T>, WindowError> {
    try_window_extremum(values, k, Extremum::Max)
}

/// [`window_minimum`] for partially ordered values; fails on the first incomparable value.
pub fn try_window_minimum<T: PartialOrd + Clone>(
    values: &[T],
    k: usize,
) -> Result<Vec<T>, WindowError> {
    try_window_extremum(values, k, Extremum::Min)
}

fn try_window_extremum<T: PartialOrd + Clone>(
    values: &[T],
    k: usize,
    extremum: Extremum,
) -> Result<Vec<T>, WindowError> {
    let mut window = SlidingWindow::new(k, extremum)?;
    let mut out = Vec::with_capacity((values.len() + 1).saturating_sub(k));
    for v in values {
        if let Some(best) = window.try_push(v)? {
            out.push(best.clone());
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_width_is_rejected() {
        assert_eq!(window_maximum::<i32>(&[], 0), Err(WindowError::InvalidWindow(0)));
        assert!(SlidingWindow::<i32>::new(0, Extremum::Min).is_err());
    }

    #[test]
    fn empty_and_short_inputs_yield_nothing() {
        assert!(window_maximum::<i32>(&[], 1).unwrap().is_empty());
        assert!(window_minimum(&[3, 1], 3).unwrap().is_empty());
    }

    #[test]
    fn width_one_is_identity() {
        let xs = [5, -2, 9, 9, 0];
        assert_eq!(window_maximum(&xs, 1).unwrap(), xs.to_vec());
        assert_eq!(window_minimum(&xs, 1).unwrap(), xs.to_vec());
    }

    #[test]
    fn full_width_gives_global_extremum() {
        let xs = [4, 8, 1, 7];
        assert_eq!(window_maximum(&xs, 4).unwrap(), vec![8]);
        assert_eq!(window_minimum(&xs, 4).unwrap(), vec![1]);
    }

    #[test]
    fn minimum_example() {
        let xs = [1, 3, -1, -3, 5, 3, 6, 7];
        assert_eq!(window_minimum(&xs, 3).unwrap(), vec![-1, -3, -3, -3, 3, 3]);
    }

    #[test]
    fn deque_stays_strict_with_ties() {
        let mut w = SlidingWindow::new(3, Extremum::Max).unwrap();
        for v in [2, 2, 2, 2] {
            w.push(v);
            assert_eq!(w.len(), 1);
        }
        let mut w = SlidingWindow::new(3, Extremum::Max).unwrap();
        for v in [9, 5, 1] {
            w.push(v);
        }
        assert_eq!(w.len(), 3);
        // 9 leaves the window, 5 takes over
        assert_eq!(w.push(0), Some(5));
        assert!(w.len() <= w.width());
        assert_eq!(w.seen(), 4);
    }

    #[test]
    fn extremum_by_key() {
        let words = ["bb", "a", "dddd", "ccc", "e"];
        let longest =
            window_extremum_by(&words, 2, Extremum::Max, |a, b| a.len().cmp(&b.len())).unwrap();
        assert_eq!(longest, vec!["bb", "dddd", "dddd", "ccc"]);
    }

    #[test]
    fn partial_order_reports_position() {
        assert_eq!(try_window_minimum(&[3.0, 1.5, 2.0], 2).unwrap(), vec![1.5, 1.5]);
        assert_eq!(
            try_window_minimum(&[3.0, 1.5, f64::NAN], 2),
            Err(WindowError::Incomparable { index: 2 })
        );
        // A lone NaN never meets another candidate.
        assert_eq!(try_window_maximum(&[f64::NAN], 1).unwrap().len(), 1);
    }
}
