use crate::bounds::Bounds;
use crate::line::normalize_spacing;
use crate::point::{Point2, Vector2};
use crate::shape::ZoneShape;
use crate::{DEFAULT_CIRCLE_POINTS, DEFAULT_SPACING, MIN_SPACING};
use std::f32::consts::TAU;

#[derive(Debug, Clone, PartialEq)]
pub struct CircleZone {
    pub center: Point2,
    pub radius: f32,
}

impl CircleZone {
    pub fn new(center: Point2, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn circumference(&self) -> f32 {
        TAU * self.radius
    }
}

impl ZoneShape for CircleZone {
    /// Points exactly on the circle count as inside.
    fn contains(&self, point: Point2) -> bool {
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }

    /// The bounding square; `area` is `(2r)²`, not the disc area.
    fn bounds(&self) -> Bounds {
        Bounds::new(
            self.center.offset(-self.radius, -self.radius),
            Vector2::new(self.radius * 2.0, self.radius * 2.0),
        )
    }

    fn corners(&self) -> &[Point2] {
        &[]
    }

    fn sample_perimeter(&self, points_per_line: u32, spacing: f32) -> Vec<Point2> {
        if self.radius <= 0.0 {
            return Vec::new();
        }

        let circumference = self.circumference();
        let angle_step = if spacing >= MIN_SPACING {
            normalize_spacing(circumference, spacing) / self.radius
        } else if points_per_line > 0 {
            circumference / points_per_line as f32 / self.radius
        } else {
            return Vec::new();
        };

        // within half a step of a full turn the next sample would land on the first
        let last_angle = TAU - angle_step * 0.5;
        let mut points = Vec::new();
        let mut k = 0u32;
        loop {
            let angle = angle_step * k as f32;
            if angle >= last_angle {
                break;
            }
            points.push(Point2::new(
                self.center.x + self.radius * angle.cos(),
                self.center.y + self.radius * angle.sin(),
            ));
            k += 1;
        }
        points
    }

    fn default_sampling(&self) -> (u32, f32) {
        (DEFAULT_CIRCLE_POINTS, DEFAULT_SPACING)
    }
}
