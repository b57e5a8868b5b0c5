//! Zone shape payloads.
//!
//! Stored presets carry a shape tag plus a comma separated parameter string.
//! [`ZoneData::parse`] is the single boundary where that legacy string becomes a
//! structured [`ShapeParams`]; each shape has its own parse function.

use crate::point::{Point2, Vector2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Reasons a [`ZoneData`] payload cannot become a shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ZoneDataError {
    #[error("unknown shape type `{0}`")]
    UnknownShape(String),
    #[error("{shape} expects {expected} parameters, got {found}")]
    WrongArity {
        shape: ShapeKind,
        expected: &'static str,
        found: usize,
    },
    #[error("polygon needs an even number of coordinates, got {0}")]
    OddCoordinateCount(usize),
    #[error("parameter {index} (`{token}`) is not a finite number")]
    InvalidNumber { index: usize, token: String },
    #[error("degenerate {shape}: {reason}")]
    DegenerateGeometry {
        shape: ShapeKind,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Polygon,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Polygon => "polygon",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = ZoneDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rectangle" => Ok(ShapeKind::Rectangle),
            "circle" => Ok(ShapeKind::Circle),
            "polygon" => Ok(ShapeKind::Polygon),
            _ => Err(ZoneDataError::UnknownShape(s.to_string())),
        }
    }
}

/// Unscaled shape parameters in the units of the preset.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeParams {
    Rectangle { size: Vector2 },
    Circle { radius: f32 },
    Polygon { points: Vec<Point2> },
}

impl ShapeParams {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeParams::Rectangle { .. } => ShapeKind::Rectangle,
            ShapeParams::Circle { .. } => ShapeKind::Circle,
            ShapeParams::Polygon { .. } => ShapeKind::Polygon,
        }
    }
}

/// Shape tag plus raw parameter string, exactly as stored in presets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneData {
    pub shape_type: String,
    pub raw_parameters: String,
}

impl ZoneData {
    pub fn new(shape_type: impl Into<String>, raw_parameters: impl Into<String>) -> Self {
        Self {
            shape_type: shape_type.into(),
            raw_parameters: raw_parameters.into(),
        }
    }

    pub fn rectangle(size_x: f32, size_y: f32) -> Self {
        Self::new("rectangle", format!("{},{}", size_x, size_y))
    }

    pub fn circle(radius: f32) -> Self {
        Self::new("circle", radius.to_string())
    }

    pub fn polygon(points: &[Point2]) -> Self {
        let raw = points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(",");
        Self::new("polygon", raw)
    }

    pub fn parse(&self) -> Result<ShapeParams, ZoneDataError> {
        match self.shape_type.parse::<ShapeKind>()? {
            ShapeKind::Rectangle => parse_rectangle(&self.raw_parameters),
            ShapeKind::Circle => parse_circle(&self.raw_parameters),
            ShapeKind::Polygon => parse_polygon(&self.raw_parameters),
        }
    }
}

fn parse_numbers(raw: &str) -> Result<Vec<f32>, ZoneDataError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    raw.split(',')
        .enumerate()
        .map(|(index, token)| {
            let token = token.trim();
            token
                .parse::<f32>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| ZoneDataError::InvalidNumber {
                    index,
                    token: token.to_string(),
                })
        })
        .collect()
}

fn parse_rectangle(raw: &str) -> Result<ShapeParams, ZoneDataError> {
    let values = parse_numbers(raw)?;
    let [size_x, size_y] = values[..] else {
        return Err(ZoneDataError::WrongArity {
            shape: ShapeKind::Rectangle,
            expected: "2",
            found: values.len(),
        });
    };

    if size_x <= 0.0 || size_y <= 0.0 {
        return Err(ZoneDataError::DegenerateGeometry {
            shape: ShapeKind::Rectangle,
            reason: "size must be positive on both axes",
        });
    }

    Ok(ShapeParams::Rectangle {
        size: Vector2::new(size_x, size_y),
    })
}

fn parse_circle(raw: &str) -> Result<ShapeParams, ZoneDataError> {
    let values = parse_numbers(raw)?;
    let [radius] = values[..] else {
        return Err(ZoneDataError::WrongArity {
            shape: ShapeKind::Circle,
            expected: "1",
            found: values.len(),
        });
    };

    if radius <= 0.0 {
        return Err(ZoneDataError::DegenerateGeometry {
            shape: ShapeKind::Circle,
            reason: "radius must be positive",
        });
    }

    Ok(ShapeParams::Circle { radius })
}

fn parse_polygon(raw: &str) -> Result<ShapeParams, ZoneDataError> {
    let values = parse_numbers(raw)?;
    if values.len() % 2 != 0 {
        return Err(ZoneDataError::OddCoordinateCount(values.len()));
    }
    if values.len() < 6 {
        return Err(ZoneDataError::WrongArity {
            shape: ShapeKind::Polygon,
            expected: "at least 6",
            found: values.len(),
        });
    }

    let points = values
        .chunks_exact(2)
        .map(|pair| Point2::new(pair[0], pair[1]))
        .collect();

    Ok(ShapeParams::Polygon { points })
}
