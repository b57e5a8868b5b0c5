use crate::point::Point2;

/// Memoized perimeter samples for a single `(points_per_line, spacing)` request.
///
/// Only the most recent request is kept. Switching parameters and switching
/// back recomputes; the result is identical because sampling is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleCache {
    last_points_per_line: u32,
    last_spacing: f32,
    points: Vec<Point2>,
}

impl SampleCache {
    /// True when the cache is empty or was filled with different parameters.
    pub fn is_stale(&self, points_per_line: u32, spacing: f32) -> bool {
        self.points.is_empty()
            || self.last_points_per_line != points_per_line
            || self.last_spacing != spacing
    }

    pub fn store(&mut self, points_per_line: u32, spacing: f32, points: Vec<Point2>) {
        self.last_points_per_line = points_per_line;
        self.last_spacing = spacing;
        self.points = points;
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Parameters of the cached samples, if any are cached.
    pub fn parameters(&self) -> Option<(u32, f32)> {
        if self.points.is_empty() {
            None
        } else {
            Some((self.last_points_per_line, self.last_spacing))
        }
    }
}
