use crate::bounds::Bounds;
use crate::line::Line;
use crate::point::Point2;
use crate::shape::{sample_edges, ZoneShape};
use crate::{DEFAULT_EDGE_POINTS, DEFAULT_SPACING};

/// Simple polygon given by its vertices in order; the last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonZone {
    pub vertices: Vec<Point2>,
    pub edges: Vec<Line>,
    bounds: Bounds,
}

impl PolygonZone {
    pub fn new(vertices: Vec<Point2>) -> Self {
        let count = vertices.len();
        let edges = (0..count)
            .map(|i| Line::new(vertices[i], vertices[(i + 1) % count]))
            .collect();
        let bounds = Bounds::from_points(&vertices);

        Self {
            vertices,
            edges,
            bounds,
        }
    }

    pub fn perimeter(&self) -> f32 {
        self.edges.iter().map(|edge| edge.length).sum()
    }
}

impl ZoneShape for PolygonZone {
    /// Even-odd rule: a +x ray from the point crosses the boundary an odd number of times.
    fn contains(&self, point: Point2) -> bool {
        let crossings = self
            .edges
            .iter()
            .filter(|edge| edge.is_intersecting_ray(point.y, point.x))
            .count();
        crossings % 2 == 1
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn corners(&self) -> &[Point2] {
        &self.vertices
    }

    fn sample_perimeter(&self, points_per_line: u32, spacing: f32) -> Vec<Point2> {
        sample_edges(&self.edges, points_per_line, spacing)
    }

    fn default_sampling(&self) -> (u32, f32) {
        (DEFAULT_EDGE_POINTS, DEFAULT_SPACING)
    }
}
