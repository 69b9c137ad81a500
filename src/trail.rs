//! Traveled-path history used for trail rendering.

use crate::geometry::Point;
use std::collections::VecDeque;

/// Append-only record of robot center points.
///
/// With no retention cap every point is kept, so `len()` equals the number
/// of updates. With a cap the trail behaves as a ring buffer over the most
/// recent points, while `total_recorded()` keeps counting every update.
#[derive(Debug, Clone, Default)]
pub struct Trail {
    points: VecDeque<Point>,
    retention: Option<usize>,
    total_recorded: u64,
}

impl Trail {
    /// Unbounded trail
    pub fn new() -> Self {
        Self::default()
    }

    /// Trail keeping at most `retention` points (`None` = unbounded)
    pub fn with_retention(retention: Option<usize>) -> Self {
        Self {
            points: VecDeque::new(),
            retention,
            total_recorded: 0,
        }
    }

    pub fn push(&mut self, point: Point) {
        if let Some(cap) = self.retention {
            while self.points.len() >= cap.max(1) {
                self.points.pop_front();
            }
        }
        self.points.push_back(point);
        self.total_recorded += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Every point ever pushed, including ones dropped by retention
    pub fn total_recorded(&self) -> u64 {
        self.total_recorded
    }

    pub fn last(&self) -> Option<Point> {
        self.points.back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.iter()
    }

    /// Copy of the retained points, oldest first
    pub fn to_vec(&self) -> Vec<Point> {
        self.points.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_keeps_order() {
        let mut trail = Trail::new();
        for i in 0..100 {
            trail.push(Point::new(i as f32, 0.0));
        }
        assert_eq!(trail.len(), 100);
        assert_eq!(trail.total_recorded(), 100);
        assert!(trail.iter().enumerate().all(|(i, p)| p.x == i as f32));
    }

    #[test]
    fn test_retention_drops_oldest() {
        let mut trail = Trail::with_retention(Some(3));
        for i in 0..5 {
            trail.push(Point::new(i as f32, 0.0));
        }
        assert_eq!(trail.len(), 3);
        assert_eq!(trail.total_recorded(), 5);
        let xs: Vec<f32> = trail.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
        assert_eq!(trail.last(), Some(Point::new(4.0, 0.0)));
    }
}
