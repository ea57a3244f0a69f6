//! Bounded tracker for the highest local maxima seen so far.

use crate::point::Point;

/// Replacement policy used by [`PeakTracker`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrackerMode {
    /// Append while under capacity, then replace the first member that is
    /// strictly lower. Both steps run for every point, so an appended point
    /// may also displace an earlier member. Approximates a top-K set.
    #[default]
    Greedy,
    /// Canonical top-K: once full, the lowest member is evicted when the new
    /// point is strictly higher.
    Strict,
}

/// Top-K container of points kept in insertion/replacement order.
///
/// Members are never reordered by elevation; replaced members are removed
/// and the newcomer is appended at the end.
#[derive(Clone, Debug)]
pub struct PeakTracker {
    k: usize,
    mode: TrackerMode,
    items: Vec<Point>,
}

impl PeakTracker {
    /// Creates a tracker holding at most `k` points.
    pub fn new(k: usize, mode: TrackerMode) -> Self {
        Self {
            k,
            mode,
            items: Vec::with_capacity(k),
        }
    }

    /// Offers a point to the tracker.
    pub fn push(&mut self, point: Point) {
        if self.k == 0 {
            return;
        }
        match self.mode {
            TrackerMode::Greedy => self.push_greedy(point),
            TrackerMode::Strict => self.push_strict(point),
        }
        debug_assert!(self.items.len() <= self.k);
    }

    fn push_greedy(&mut self, point: Point) {
        if self.items.len() < self.k {
            self.items.push(point);
        }
        // First strictly lower member only, not the lowest one.
        if let Some(idx) = self
            .items
            .iter()
            .position(|item| point.elevation > item.elevation)
        {
            self.items.remove(idx);
            self.items.push(point);
        }
    }

    fn push_strict(&mut self, point: Point) {
        if self.items.len() < self.k {
            self.items.push(point);
            return;
        }

        let mut worst_idx = 0usize;
        for (idx, item) in self.items.iter().enumerate().skip(1) {
            if item.elevation < self.items[worst_idx].elevation {
                worst_idx = idx;
            }
        }

        if point.elevation > self.items[worst_idx].elevation {
            self.items.remove(worst_idx);
            self.items.push(point);
        }
    }

    /// Capacity of the tracker.
    pub fn capacity(&self) -> usize {
        self.k
    }

    /// Replacement policy in use.
    pub fn mode(&self) -> TrackerMode {
        self.mode
    }

    /// Number of tracked points.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when nothing has been tracked.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Tracked points in container order.
    pub fn as_slice(&self) -> &[Point] {
        &self.items
    }

    /// Consumes the tracker, returning points in container order.
    pub fn into_points(self) -> Vec<Point> {
        self.items
    }
}
