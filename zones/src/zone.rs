//! The zone value handed to game logic: a parsed shape plus its placement,
//! coordinate convention and perimeter sample cache.

use crate::bounds::Bounds;
use crate::cache::SampleCache;
use crate::data::{ShapeKind, ZoneData};
use crate::point::Point2;
use crate::scale::MapScale;
use crate::shape::{Shape, ZoneShape};
use log::{debug, warn};

/// Perimeter samples together with the shape's corners and center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPoints<'a> {
    pub points: &'a [Point2],
    pub corners: &'a [Point2],
    pub center: Point2,
}

/// A named planar region.
///
/// Building a zone parses its [`ZoneData`] immediately. When parsing fails the
/// failure is logged once and the zone stays inert: it contains nothing, its
/// bounds are the zero box and it has no spawn points.
#[derive(Debug, Clone)]
pub struct Zone {
    name: String,
    data: ZoneData,
    raw_center: Point2,
    center: Point2,
    map_scale: MapScale,
    uses_map_coordinates: bool,
    coordinate_multiplier: f32,
    is_inverse: bool,
    shape: Option<Shape>,
    bounds: Bounds,
    samples: SampleCache,
}

impl Zone {
    /// `raw_center` and the shape parameters are scaled by the map multiplier
    /// when `uses_map_coordinates` is set.
    pub fn new(
        name: impl Into<String>,
        raw_center: Point2,
        data: ZoneData,
        uses_map_coordinates: bool,
        map_scale: MapScale,
    ) -> Self {
        Self::build(
            name.into(),
            raw_center,
            data,
            uses_map_coordinates,
            map_scale,
            false,
        )
    }

    fn build(
        name: String,
        raw_center: Point2,
        data: ZoneData,
        uses_map_coordinates: bool,
        map_scale: MapScale,
        is_inverse: bool,
    ) -> Self {
        let coordinate_multiplier = map_scale.multiplier_for(uses_map_coordinates);
        let mut zone = Self {
            name,
            data,
            raw_center,
            center: raw_center.scale(coordinate_multiplier),
            map_scale,
            uses_map_coordinates,
            coordinate_multiplier,
            is_inverse,
            shape: None,
            bounds: Bounds::default(),
            samples: SampleCache::default(),
        };
        zone.init();
        zone
    }

    fn init(&mut self) {
        let params = match self.data.parse() {
            Ok(params) => params,
            Err(e) => {
                warn!(
                    "Failed to parse zone {} at ({}, {}) from {} \"{}\": {}",
                    self.name,
                    self.center.x,
                    self.center.y,
                    self.data.shape_type,
                    self.data.raw_parameters,
                    e
                );
                return;
            }
        };

        let shape = Shape::from_params(self.center, &params, self.coordinate_multiplier);
        self.bounds = shape.bounds();

        let (points_per_line, spacing) = shape.default_sampling();
        let points = shape.sample_perimeter(points_per_line, spacing);
        self.samples.store(points_per_line, spacing, points);
        self.shape = Some(shape);

        debug!(
            "Zone {} ready: {} at ({}, {}), bounds area {}",
            self.name,
            params.kind(),
            self.center.x,
            self.center.y,
            self.bounds.area
        );
    }

    /// Exact containment. Accepts planar points or world points (which use `x, z`).
    pub fn is_inside(&self, location: impl Into<Point2>) -> bool {
        match &self.shape {
            Some(shape) => shape.contains(location.into()),
            None => {
                debug!("Containment check on unparsed zone {}", self.name);
                false
            }
        }
    }

    /// Perimeter samples for the given parameters, recomputed only when they
    /// differ from the cached request.
    pub fn particle_spawn_points(&mut self, points_per_line: u32, spacing: f32) -> SpawnPoints<'_> {
        self.refresh_samples(points_per_line, spacing);
        SpawnPoints {
            points: self.samples.points(),
            corners: self.shape.as_ref().map_or(&[] as &[Point2], |shape| shape.corners()),
            center: self.center,
        }
    }

    /// Recomputes the sample cache if it is stale. Returns whether it did.
    pub fn refresh_samples(&mut self, points_per_line: u32, spacing: f32) -> bool {
        let Some(shape) = &self.shape else {
            return false;
        };
        if !self.samples.is_stale(points_per_line, spacing) {
            return false;
        }

        let points = shape.sample_perimeter(points_per_line, spacing);
        self.samples.store(points_per_line, spacing, points);
        true
    }

    /// The same shape under the opposite coordinate convention.
    ///
    /// Returns `None` for a zone that is itself an inverse.
    pub fn inverse(&self) -> Option<Zone> {
        if self.is_inverse {
            return None;
        }

        Some(Self::build(
            self.name.clone(),
            self.raw_center,
            self.data.clone(),
            !self.uses_map_coordinates,
            self.map_scale,
            true,
        ))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &ZoneData {
        &self.data
    }

    pub fn center(&self) -> Point2 {
        self.center
    }

    pub fn raw_center(&self) -> Point2 {
        self.raw_center
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn coordinate_multiplier(&self) -> f32 {
        self.coordinate_multiplier
    }

    pub fn uses_map_coordinates(&self) -> bool {
        self.uses_map_coordinates
    }

    pub fn is_inverse(&self) -> bool {
        self.is_inverse
    }

    pub fn parsed_successfully(&self) -> bool {
        self.shape.is_some()
    }

    pub fn shape(&self) -> Option<&Shape> {
        self.shape.as_ref()
    }

    pub fn shape_kind(&self) -> Option<ShapeKind> {
        self.shape.as_ref().map(Shape::kind)
    }

    pub fn sample_cache(&self) -> &SampleCache {
        &self.samples
    }
}
