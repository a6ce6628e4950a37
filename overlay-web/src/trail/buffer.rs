//! Bounded FIFO of trail points
//!
//! Keeps the most recent points in insertion order. Once full, every push
//! evicts the oldest point.

use std::collections::VecDeque;

use nalgebra::Point3;

use crate::constants::TRAIL_CAPACITY;

/// A trail point in world space
pub type TrailPoint = Point3<f32>;

pub struct TrailBuffer {
    points: VecDeque<TrailPoint>,
    capacity: usize,
}

impl TrailBuffer {
    pub fn new() -> Self {
        Self::with_capacity(TRAIL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a point, evicting the oldest one if over capacity
    ///
    /// Returns the evicted point, if any.
    pub fn push(&mut self, point: TrailPoint) -> Option<TrailPoint> {
        self.points.push_back(point);
        if self.points.len() > self.capacity {
            self.points.pop_front()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Points from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &TrailPoint> + '_ {
        self.points.iter()
    }

    pub fn newest(&self) -> Option<&TrailPoint> {
        self.points.back()
    }
}

impl Default for TrailBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(i: usize) -> TrailPoint {
        TrailPoint::new(i as f32, 0.0, 0.0)
    }

    #[test]
    fn test_starts_empty() {
        let buffer = TrailBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 100);
        assert!(buffer.newest().is_none());
    }

    #[test]
    fn test_evicts_oldest_past_capacity() {
        let mut buffer = TrailBuffer::new();
        for i in 0..100 {
            assert!(buffer.push(point(i)).is_none());
        }
        assert_eq!(buffer.len(), 100);

        let evicted = buffer.push(point(100));
        assert_eq!(evicted, Some(point(0)));
        assert_eq!(buffer.len(), 100);

        let xs: Vec<f32> = buffer.iter().map(|p| p.x).collect();
        let expected: Vec<f32> = (1..=100).map(|i| i as f32).collect();
        assert_eq!(xs, expected);
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let mut buffer = TrailBuffer::with_capacity(3);
        for i in 0..50 {
            buffer.push(point(i));
            assert!(buffer.len() <= 3);
        }
        assert_eq!(buffer.newest(), Some(&point(49)));
    }
}
