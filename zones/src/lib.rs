//! # Zone Geometry
//!
//! Planar geometry for capture zones: containment tests, bounding boxes and
//! evenly spaced perimeter samples for rectangles, circles and polygons.
//!
//! ## Coordinate Conventions
//!
//! Zones live on the world's horizontal plane. A [`Point2`] holds `(x, z)` of a
//! world position; [`Point3`] converts into it by dropping the elevation, so any
//! world position can be handed straight to [`Zone::is_inside`].
//!
//! Presets may be authored in map-image coordinates. Those are scaled by
//! [`MapScale::multiplier`] to remove the map border, while raw world
//! coordinates use a multiplier of `1.0`. [`Zone::inverse`] builds the same
//! shape under the other convention.
//!
//! ## Shapes
//!
//! | Shape     | Parameters          | Boundary        |
//! |-----------|---------------------|-----------------|
//! | rectangle | `sizeX,sizeY`       | exclusive       |
//! | circle    | `radius`            | inclusive       |
//! | polygon   | `x1,y1,x2,y2,...`   | even-odd rule   |
//!
//! Parameters arrive as the comma separated strings stored in presets
//! ([`ZoneData`]) and are parsed once when the zone is built. A zone that fails
//! to parse logs the problem and stays inert instead of failing the caller.
//!
//! ## Usage Example
//!
//! ```rust
//! use zones::{MapScale, Point2, Point3, Zone, ZoneData};
//!
//! let mut zone = Zone::new(
//!     "Flag A",
//!     Point2::new(0.0, 0.0),
//!     ZoneData::new("rectangle", "40,20"),
//!     false,
//!     MapScale::default(),
//! );
//!
//! assert!(zone.is_inside(Point3::new(5.0, 12.0, 5.0)));
//! assert_eq!(zone.bounds().area, 800.0);
//!
//! let spawn = zone.particle_spawn_points(5, 15.0);
//! assert_eq!(spawn.corners.len(), 4);
//! ```
//!
//! ## Performance Characteristics
//!
//! `is_inside` never allocates and is safe to call for every player on every
//! tick. Perimeter samples are cached per zone and recomputed only when the
//! requested sampling parameters change.

pub mod bounds;
pub mod cache;
pub mod circle;
pub mod data;
pub mod line;
pub mod point;
pub mod polygon;
pub mod rect;
pub mod scale;
pub mod shape;
pub mod zone;

pub use bounds::Bounds;
pub use cache::SampleCache;
pub use circle::CircleZone;
pub use data::{ShapeKind, ShapeParams, ZoneData, ZoneDataError};
pub use line::{normalize_spacing, Line};
pub use point::{Point2, Point3, Vector2};
pub use polygon::PolygonZone;
pub use rect::RectZone;
pub use scale::MapScale;
pub use shape::{Shape, ZoneShape};
pub use zone::{SpawnPoints, Zone};

/// Spacing below this is treated as unset.
pub const MIN_SPACING: f32 = 0.1;
/// Spacing used to fill the sample cache when a zone is built.
pub const DEFAULT_SPACING: f32 = 15.0;
pub const DEFAULT_EDGE_POINTS: u32 = 5;
pub const DEFAULT_CIRCLE_POINTS: u32 = 36;
