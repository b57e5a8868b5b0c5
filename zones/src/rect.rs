use crate::bounds::Bounds;
use crate::line::Line;
use crate::point::{Point2, Vector2};
use crate::shape::{sample_edges, ZoneShape};
use crate::{DEFAULT_EDGE_POINTS, DEFAULT_SPACING};

/// Axis-aligned rectangle centred on `center`.
///
/// Corners run TL, TR, BR, BL where TL is the minimum corner on both axes,
/// and `edges[i]` goes from `corners[i]` to `corners[(i + 1) % 4]`.
#[derive(Debug, Clone, PartialEq)]
pub struct RectZone {
    pub center: Point2,
    pub size: Vector2,
    pub corners: [Point2; 4],
    pub edges: [Line; 4],
}

impl RectZone {
    pub fn new(center: Point2, size: Vector2) -> Self {
        let half_x = size.x / 2.0;
        let half_y = size.y / 2.0;
        let corners = [
            center.offset(-half_x, -half_y),
            center.offset(half_x, -half_y),
            center.offset(half_x, half_y),
            center.offset(-half_x, half_y),
        ];
        let edges = [
            Line::new(corners[0], corners[1]),
            Line::new(corners[1], corners[2]),
            Line::new(corners[2], corners[3]),
            Line::new(corners[3], corners[0]),
        ];

        Self {
            center,
            size,
            corners,
            edges,
        }
    }
}

impl ZoneShape for RectZone {
    /// Points on the boundary are outside.
    fn contains(&self, point: Point2) -> bool {
        let half_x = self.size.x / 2.0;
        let half_y = self.size.y / 2.0;

        point.x > self.center.x - half_x
            && point.x < self.center.x + half_x
            && point.y > self.center.y - half_y
            && point.y < self.center.y + half_y
    }

    fn bounds(&self) -> Bounds {
        Bounds::new(self.corners[0], self.size)
    }

    fn corners(&self) -> &[Point2] {
        &self.corners
    }

    fn sample_perimeter(&self, points_per_line: u32, spacing: f32) -> Vec<Point2> {
        sample_edges(&self.edges, points_per_line, spacing)
    }

    fn default_sampling(&self) -> (u32, f32) {
        (DEFAULT_EDGE_POINTS, DEFAULT_SPACING)
    }
}
