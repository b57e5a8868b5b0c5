use log::warn;
use serde::{Deserialize, Serialize};

/// Map-image constants used to convert preset coordinates into playable world space.
///
/// Map images include a border on every side that is not part of the playable
/// area, so map coordinates shrink by `(map_size - 2 * border) / map_size`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapScale {
    pub map_size: f32,
    pub border: f32,
}

impl Default for MapScale {
    fn default() -> Self {
        Self {
            map_size: 2048.0,
            border: 64.0,
        }
    }
}

impl MapScale {
    pub fn new(map_size: f32, border: f32) -> Self {
        Self { map_size, border }
    }

    /// Scale factor for map-image coordinates.
    ///
    /// A scale with no playable area (non-positive map size, or a border eating
    /// the whole map) leaves coordinates unscaled, so scaled shapes never flip.
    pub fn multiplier(&self) -> f32 {
        let playable = self.map_size - 2.0 * self.border;
        if !(self.map_size > 0.0 && playable > 0.0) || !playable.is_finite() {
            warn!(
                "Map size {} with border {} has no playable area, using unscaled coordinates",
                self.map_size, self.border
            );
            return 1.0;
        }
        playable / self.map_size
    }

    pub fn multiplier_for(&self, uses_map_coordinates: bool) -> f32 {
        if uses_map_coordinates {
            self.multiplier()
        } else {
            1.0
        }
    }
}
