//! The set of zones in play for the current round.
//!
//! A rotation owns one [`Zone`] per preset and, on first request, the zone's
//! inverse (the same shape under the other coordinate convention). Inverses are
//! rebuilt from the preset rather than stored, so a rotation can always be
//! reconstructed from configuration alone.

use crate::config::{ZonePreset, ZoneUseCase};
use log::{info, warn};
use zones::{MapScale, Point2, Point3, Zone};

/// World height lookup supplied by the host engine.
pub trait TerrainHeight {
    fn height_at(&self, x: f32, z: f32) -> f32;
}

/// Terrain at a constant height, for hosts without a heightmap.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatTerrain(pub f32);

impl TerrainHeight for FlatTerrain {
    fn height_at(&self, _x: f32, _z: f32) -> f32 {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct RotationZone {
    preset: ZonePreset,
    zone: Zone,
    inverse: Option<Zone>,
}

impl RotationZone {
    pub fn new(preset: ZonePreset, map_scale: MapScale) -> Self {
        let zone = preset.build(map_scale);
        Self {
            preset,
            zone,
            inverse: None,
        }
    }

    pub fn id(&self) -> u32 {
        self.preset.id
    }

    pub fn preset(&self) -> &ZonePreset {
        &self.preset
    }

    pub fn use_case(&self) -> ZoneUseCase {
        self.preset.use_case
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    pub fn zone_mut(&mut self) -> &mut Zone {
        &mut self.zone
    }

    /// The inverse zone, built once on first use.
    pub fn inverse(&mut self) -> Option<&mut Zone> {
        if self.inverse.is_none() {
            self.inverse = self.zone.inverse();
        }
        self.inverse.as_mut()
    }

    pub fn has_inverse(&self) -> bool {
        self.inverse.is_some()
    }

    /// Boundary marker positions in world space, ground height from `terrain`.
    pub fn spawn_positions(
        &mut self,
        points_per_line: u32,
        spacing: f32,
        terrain: &impl TerrainHeight,
    ) -> Vec<Point3> {
        self.zone
            .particle_spawn_points(points_per_line, spacing)
            .points
            .iter()
            .map(|p| Point3::from_planar(*p, terrain.height_at(p.x, p.y)))
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct ZoneRotation {
    zones: Vec<RotationZone>,
    map_scale: MapScale,
}

impl ZoneRotation {
    /// Builds every preset, keeping zones that failed to parse so they stay addressable by id.
    pub fn from_presets(presets: &[ZonePreset], map_scale: MapScale) -> Self {
        let zones: Vec<RotationZone> = presets
            .iter()
            .map(|preset| RotationZone::new(preset.clone(), map_scale))
            .collect();

        let failed = zones
            .iter()
            .filter(|rz| !rz.zone.parsed_successfully())
            .count();
        if failed > 0 {
            warn!("{} of {} zones failed to parse and are inactive", failed, zones.len());
        }
        info!(
            "Zone rotation ready with {} zones (map multiplier {:.4})",
            zones.len(),
            map_scale.multiplier()
        );

        Self { zones, map_scale }
    }

    pub fn map_scale(&self) -> MapScale {
        self.map_scale
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RotationZone> {
        self.zones.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut RotationZone> {
        self.zones.iter_mut()
    }

    pub fn get(&self, id: u32) -> Option<&RotationZone> {
        self.zones.iter().find(|rz| rz.id() == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut RotationZone> {
        self.zones.iter_mut().find(|rz| rz.id() == id)
    }

    /// Case-insensitive lookup by full or short name.
    pub fn find_by_name(&self, name: &str) -> Option<&RotationZone> {
        self.zones.iter().find(|rz| {
            rz.preset.name.eq_ignore_ascii_case(name)
                || rz
                    .preset
                    .short_name
                    .as_deref()
                    .is_some_and(|short| short.eq_ignore_ascii_case(name))
        })
    }

    pub fn by_use_case(&self, use_case: ZoneUseCase) -> impl Iterator<Item = &RotationZone> {
        self.zones.iter().filter(move |rz| rz.use_case() == use_case)
    }

    /// Parsed zones whose bounding box contains the point. Cheap pre-filter only.
    pub fn candidates(&self, point: Point2) -> impl Iterator<Item = &RotationZone> {
        self.zones.iter().filter(move |rz| {
            rz.zone.parsed_successfully() && rz.zone.bounds().contains(point)
        })
    }

    /// Ids of every zone that contains the point.
    pub fn zones_containing(&self, location: impl Into<Point2>) -> Vec<u32> {
        let point = location.into();
        self.candidates(point)
            .filter(|rz| rz.zone.is_inside(point))
            .map(RotationZone::id)
            .collect()
    }
}
