//! Axis-aligned bounding boxes used for broad-phase pruning before exact
//! containment tests.

use crate::point::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Axis-aligned box spanning `origin` to `origin + size`.
///
/// `area` is always `size.x * size.y` and never negative. A zone that failed
/// to parse keeps the default zero box at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub origin: Point2,
    pub size: Vector2,
    pub area: f32,
}

impl Bounds {
    pub fn new(origin: Point2, size: Vector2) -> Self {
        Self {
            origin,
            size,
            area: (size.x * size.y).max(0.0),
        }
    }

    /// Smallest box containing every point. An empty slice yields the default box.
    pub fn from_points(points: &[Point2]) -> Self {
        let Some(first) = points.first() else {
            return Self::default();
        };

        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for point in &points[1..] {
            min_x = min_x.min(point.x);
            min_y = min_y.min(point.y);
            max_x = max_x.max(point.x);
            max_y = max_y.max(point.y);
        }

        Self::new(
            Point2::new(min_x, min_y),
            Vector2::new(max_x - min_x, max_y - min_y),
        )
    }

    /// Corner opposite to `origin`.
    pub fn max(&self) -> Point2 {
        self.origin.offset(self.size.x, self.size.y)
    }

    /// Inclusive point test, cheap enough to run before any exact check.
    pub fn contains(&self, point: Point2) -> bool {
        let max = self.max();
        point.x >= self.origin.x && point.x <= max.x && point.y >= self.origin.y && point.y <= max.y
    }

    /// True when the two boxes share interior area or touch.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        let (a_min, a_max) = (self.origin, self.max());
        let (b_min, b_max) = (other.origin, other.max());

        !(a_max.x < b_min.x || b_max.x < a_min.x || a_max.y < b_min.y || b_max.y < a_min.y)
    }
}
