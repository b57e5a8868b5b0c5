use serde::{Deserialize, Serialize};

///Represents a position on the zone plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    ///Value along the world x-axis.
    pub x: f32,
    ///Value along the second planar axis (world z for 3D positions).
    pub y: f32,
}

impl Point2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    ///Returns the euclidean distance between two points.
    pub fn distance(&self, other: &Point2) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    ///Returns the point moved by the given amounts.
    pub fn offset(&self, dx: f32, dy: f32) -> Point2 {
        Point2 {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    ///Returns the point with both coordinates multiplied by `scalar`.
    pub fn scale(&self, scalar: f32) -> Point2 {
        Point2 {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

///Represents a position in the world. `y` is elevation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    ///Lifts a planar point to the given elevation.
    pub fn from_planar(point: Point2, elevation: f32) -> Self {
        Self {
            x: point.x,
            y: elevation,
            z: point.y,
        }
    }
}

impl From<Point3> for Point2 {
    fn from(point: Point3) -> Self {
        Point2::new(point.x, point.z)
    }
}

///Represents an extent in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    ///Returns the vector with both components multiplied by `scalar`.
    pub fn scale(&self, scalar: f32) -> Vector2 {
        Vector2 {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}
