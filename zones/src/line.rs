//! Directed 2D segments used for zone edges, perimeter sampling and the
//! ray-casting containment test.

use crate::point::Point2;

/// Adjusts `target` so that a whole number of gaps tiles `length` exactly.
///
/// When the leftover after fitting as many `target` gaps as possible is under
/// half a gap, the existing gaps are stretched; otherwise one more gap is added
/// and all of them shrink. A length shorter than one gap becomes a single gap.
/// Non-positive or non-finite inputs return `target` unchanged.
pub fn normalize_spacing(length: f32, target: f32) -> f32 {
    if !(length > 0.0 && target > 0.0 && length.is_finite() && target.is_finite()) {
        return target;
    }

    let count = (length / target).floor();
    if count < 1.0 {
        return length;
    }

    let remainder = length - count * target;
    if remainder < target / 2.0 {
        length / count
    } else {
        length / (count + 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub pt1: Point2,
    pub pt2: Point2,
    /// Infinite or NaN for vertical segments; every consumer checks `pt1.x == pt2.x` first.
    pub slope: f32,
    pub intercept: f32,
    pub length: f32,
}

impl Line {
    pub fn new(pt1: Point2, pt2: Point2) -> Self {
        let slope = (pt1.y - pt2.y) / (pt1.x - pt2.x);
        Self {
            pt1,
            pt2,
            slope,
            intercept: pt1.y - slope * pt1.x,
            length: pt1.distance(&pt2),
        }
    }

    pub fn is_vertical(&self) -> bool {
        self.pt1.x == self.pt2.x
    }

    /// Point `distance` along the segment, measured from `pt1`.
    pub fn point_at_distance_from_pt1(&self, distance: f32) -> Point2 {
        Self::interpolate(self.pt1, self.pt2, self.length, distance)
    }

    /// Point `distance` along the segment, measured from `pt2`.
    pub fn point_at_distance_from_pt2(&self, distance: f32) -> Point2 {
        Self::interpolate(self.pt2, self.pt1, self.length, distance)
    }

    /// Point at `percent` (0.0 to 1.0) of the way from `pt1` to `pt2`.
    pub fn point_at_percent(&self, percent: f32) -> Point2 {
        self.point_at_distance_from_pt1(self.length * percent)
    }

    pub fn normalize_spacing(&self, target_spacing: f32) -> f32 {
        normalize_spacing(self.length, target_spacing)
    }

    /// Whether a ray cast from `(query_x, query_y)` towards +x crosses this segment.
    ///
    /// The y range is half-open so a ray through a vertex shared by two edges is
    /// counted once.
    pub fn is_intersecting_ray(&self, query_y: f32, query_x: f32) -> bool {
        let (min_y, max_y) = if self.pt1.y < self.pt2.y {
            (self.pt1.y, self.pt2.y)
        } else {
            (self.pt2.y, self.pt1.y)
        };
        if query_y < min_y || query_y >= max_y {
            return false;
        }

        if self.is_vertical() {
            return self.pt1.x >= query_x;
        }

        let x = (query_y - self.intercept) / self.slope;
        x >= query_x
    }

    fn interpolate(from: Point2, to: Point2, length: f32, distance: f32) -> Point2 {
        if length == 0.0 {
            return from;
        }

        let t = distance / length;
        if from.x == to.x {
            return Point2::new(from.x, from.y + (to.y - from.y) * t);
        }
        Point2::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_line_creation() {
        let line = Line::new(Point2::new(0.0, 1.0), Point2::new(2.0, 5.0));
        assert_approx_eq!(line.slope, 2.0);
        assert_approx_eq!(line.intercept, 1.0);
        assert_approx_eq!(line.length, 20.0f32.sqrt());
        assert!(!line.is_vertical());
    }

    #[test]
    fn test_vertical_line_slope_is_not_finite() {
        let line = Line::new(Point2::new(3.0, 0.0), Point2::new(3.0, 10.0));
        assert!(line.is_vertical());
        assert!(!line.slope.is_finite());
        assert_approx_eq!(line.length, 10.0);
    }

    #[test]
    fn test_point_at_distance_from_pt1() {
        let line = Line::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
        let p = line.point_at_distance_from_pt1(2.5);
        assert_approx_eq!(p.x, 2.5);
        assert_approx_eq!(p.y, 0.0);

        let diagonal = Line::new(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0));
        let q = diagonal.point_at_distance_from_pt1(2.5);
        assert_approx_eq!(q.x, 1.5);
        assert_approx_eq!(q.y, 2.0);
    }

    #[test]
    fn test_point_at_distance_from_pt2() {
        let line = Line::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
        let p = line.point_at_distance_from_pt2(2.0);
        assert_approx_eq!(p.x, 8.0);
        assert_approx_eq!(p.y, 0.0);
    }

    #[test]
    fn test_point_at_distance_on_vertical_line() {
        let line = Line::new(Point2::new(5.0, 10.0), Point2::new(5.0, 0.0));
        let p = line.point_at_distance_from_pt1(4.0);
        assert_eq!(p.x, 5.0);
        assert_approx_eq!(p.y, 6.0);

        let q = line.point_at_distance_from_pt2(4.0);
        assert_eq!(q.x, 5.0);
        assert_approx_eq!(q.y, 4.0);
    }

    #[test]
    fn test_point_at_distance_on_zero_length_line() {
        let p = Point2::new(1.0, 1.0);
        let line = Line::new(p, p);
        assert_eq!(line.point_at_distance_from_pt1(3.0), p);
        assert_eq!(line.point_at_percent(0.5), p);
    }

    #[test]
    fn test_point_at_percent() {
        let line = Line::new(Point2::new(-4.0, 2.0), Point2::new(4.0, 2.0));
        let p = line.point_at_percent(0.75);
        assert_approx_eq!(p.x, 2.0);
        assert_approx_eq!(p.y, 2.0);
    }

    #[test]
    fn test_normalize_spacing_stretches_small_remainder() {
        // 100 / 30 leaves 10, under half a gap: three gaps of 33.3
        let spacing = normalize_spacing(100.0, 30.0);
        assert_approx_eq!(spacing, 100.0 / 3.0, 1e-4);
        assert_approx_eq!(100.0 / spacing, 3.0, 1e-4);
        assert!((spacing - 30.0).abs() < (25.0f32 - 30.0).abs());
    }

    #[test]
    fn test_normalize_spacing_adds_gap_for_large_remainder() {
        // 100 / 40 leaves 20, exactly half a gap: three gaps instead of two
        assert_approx_eq!(normalize_spacing(100.0, 40.0), 100.0 / 3.0, 1e-4);
        // 100 / 35 leaves 30: three gaps
        assert_approx_eq!(normalize_spacing(100.0, 35.0), 100.0 / 3.0, 1e-4);
    }

    #[test]
    fn test_normalize_spacing_exact_fit() {
        assert_approx_eq!(normalize_spacing(100.0, 25.0), 25.0);
    }

    #[test]
    fn test_normalize_spacing_short_segment() {
        assert_approx_eq!(normalize_spacing(4.0, 15.0), 4.0);
    }

    #[test]
    fn test_normalize_spacing_degenerate_inputs() {
        assert_eq!(normalize_spacing(0.0, 15.0), 15.0);
        assert_eq!(normalize_spacing(10.0, 0.0), 0.0);
        assert_eq!(normalize_spacing(10.0, -1.0), -1.0);
    }

    #[test]
    fn test_line_normalize_spacing_uses_length() {
        let line = Line::new(Point2::new(0.0, 0.0), Point2::new(0.0, 100.0));
        assert_approx_eq!(line.normalize_spacing(30.0), 100.0 / 3.0, 1e-4);
    }

    #[test]
    fn test_ray_intersection_diagonal() {
        let line = Line::new(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));
        assert!(line.is_intersecting_ray(5.0, 0.0));
        assert!(line.is_intersecting_ray(5.0, 5.0));
        assert!(!line.is_intersecting_ray(5.0, 6.0));
    }

    #[test]
    fn test_ray_intersection_half_open_range() {
        let line = Line::new(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));
        assert!(line.is_intersecting_ray(0.0, -1.0));
        assert!(!line.is_intersecting_ray(10.0, -1.0));
        assert!(!line.is_intersecting_ray(-0.5, -1.0));
        assert!(!line.is_intersecting_ray(10.5, -1.0));
    }

    #[test]
    fn test_ray_intersection_vertical() {
        let line = Line::new(Point2::new(5.0, 0.0), Point2::new(5.0, 10.0));
        assert!(line.is_intersecting_ray(5.0, 2.0));
        assert!(line.is_intersecting_ray(5.0, 5.0));
        assert!(!line.is_intersecting_ray(5.0, 6.0));
    }

    #[test]
    fn test_ray_never_hits_horizontal_segment() {
        let line = Line::new(Point2::new(0.0, 3.0), Point2::new(10.0, 3.0));
        assert!(!line.is_intersecting_ray(3.0, -100.0));
        assert!(!line.is_intersecting_ray(3.0, 5.0));
    }
}
