//! Shape dispatch shared by every zone variant.

use crate::bounds::Bounds;
use crate::circle::CircleZone;
use crate::data::{ShapeKind, ShapeParams};
use crate::line::Line;
use crate::point::Point2;
use crate::polygon::PolygonZone;
use crate::rect::RectZone;
use crate::MIN_SPACING;

/// Geometry queries every zone shape answers.
///
/// `points_per_line == 0` and `spacing < MIN_SPACING` both mean "unset"; a set
/// spacing takes priority. With neither set, sampling produces no points.
pub trait ZoneShape {
    /// Exact containment test on the zone plane.
    fn contains(&self, point: Point2) -> bool;

    fn bounds(&self) -> Bounds;

    /// Shape vertices reported alongside sampled points. Empty for circles.
    fn corners(&self) -> &[Point2];

    /// Evenly spaced points along the boundary, in a fixed order.
    fn sample_perimeter(&self, points_per_line: u32, spacing: f32) -> Vec<Point2>;

    /// Parameters used to fill the sample cache when the zone is built.
    fn default_sampling(&self) -> (u32, f32);
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle(RectZone),
    Circle(CircleZone),
    Polygon(PolygonZone),
}

impl Shape {
    /// Builds the shape around `center`, scaling every parameter by `multiplier`.
    pub fn from_params(center: Point2, params: &ShapeParams, multiplier: f32) -> Self {
        match params {
            ShapeParams::Rectangle { size } => {
                Shape::Rectangle(RectZone::new(center, size.scale(multiplier)))
            }
            ShapeParams::Circle { radius } => {
                Shape::Circle(CircleZone::new(center, radius * multiplier))
            }
            ShapeParams::Polygon { points } => Shape::Polygon(PolygonZone::new(
                points.iter().map(|p| p.scale(multiplier)).collect(),
            )),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Polygon(_) => ShapeKind::Polygon,
        }
    }
}

impl ZoneShape for Shape {
    fn contains(&self, point: Point2) -> bool {
        match self {
            Shape::Rectangle(rect) => rect.contains(point),
            Shape::Circle(circle) => circle.contains(point),
            Shape::Polygon(polygon) => polygon.contains(point),
        }
    }

    fn bounds(&self) -> Bounds {
        match self {
            Shape::Rectangle(rect) => rect.bounds(),
            Shape::Circle(circle) => circle.bounds(),
            Shape::Polygon(polygon) => polygon.bounds(),
        }
    }

    fn corners(&self) -> &[Point2] {
        match self {
            Shape::Rectangle(rect) => rect.corners(),
            Shape::Circle(circle) => circle.corners(),
            Shape::Polygon(polygon) => polygon.corners(),
        }
    }

    fn sample_perimeter(&self, points_per_line: u32, spacing: f32) -> Vec<Point2> {
        match self {
            Shape::Rectangle(rect) => rect.sample_perimeter(points_per_line, spacing),
            Shape::Circle(circle) => circle.sample_perimeter(points_per_line, spacing),
            Shape::Polygon(polygon) => polygon.sample_perimeter(points_per_line, spacing),
        }
    }

    fn default_sampling(&self) -> (u32, f32) {
        match self {
            Shape::Rectangle(rect) => rect.default_sampling(),
            Shape::Circle(circle) => circle.default_sampling(),
            Shape::Polygon(polygon) => polygon.default_sampling(),
        }
    }
}

/// Samples each edge in order, starting one step past the edge's first point
/// and stopping before its end.
pub(crate) fn sample_edges(edges: &[Line], points_per_line: u32, spacing: f32) -> Vec<Point2> {
    let use_spacing = spacing >= MIN_SPACING;
    if !use_spacing && points_per_line == 0 {
        return Vec::new();
    }

    let mut points = Vec::new();
    for edge in edges {
        let step = if use_spacing {
            edge.normalize_spacing(spacing)
        } else {
            edge.length / points_per_line as f32
        };
        if step <= 0.0 || !step.is_finite() {
            continue;
        }

        let mut k = 1u32;
        loop {
            let distance = step * k as f32;
            if distance >= edge.length {
                break;
            }
            points.push(edge.point_at_distance_from_pt1(distance));
            k += 1;
        }
    }
    points
}
