//! Zone preset configuration
//!
//! Presets are stored as a JSON array of records, one per zone:
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "name": "Flag A",
//!     "shortName": "A",
//!     "centerX": 0.0,
//!     "centerZ": 0.0,
//!     "shapeType": "circle",
//!     "rawShapeParameters": "30",
//!     "useMapCoordinates": false,
//!     "useCase": "flag"
//!   }
//! ]
//! ```
//!
//! `shortName`, `useMapCoordinates` and `useCase` are optional.

use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use zones::{MapScale, Point2, Zone, ZoneData};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read presets from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid preset JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate zone id {0}")]
    DuplicateId(u32),
    #[error("invalid map scale: {0}")]
    InvalidMapScale(String),
}

/// What the game mode uses a zone for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ZoneUseCase {
    Flag,
    Team1Main,
    Team2Main,
    Team1Amc,
    Team2Amc,
    Lobby,
    #[default]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZonePreset {
    pub id: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    pub center_x: f32,
    pub center_z: f32,
    pub shape_type: String,
    pub raw_shape_parameters: String,
    #[serde(default)]
    pub use_map_coordinates: bool,
    #[serde(default)]
    pub use_case: ZoneUseCase,
}

impl ZonePreset {
    pub fn data(&self) -> ZoneData {
        ZoneData::new(self.shape_type.clone(), self.raw_shape_parameters.clone())
    }

    pub fn center(&self) -> Point2 {
        Point2::new(self.center_x, self.center_z)
    }

    /// Short name when present, for compact log lines.
    pub fn display_name(&self) -> &str {
        self.short_name.as_deref().unwrap_or(&self.name)
    }

    pub fn build(&self, map_scale: MapScale) -> Zone {
        Zone::new(
            self.name.clone(),
            self.center(),
            self.data(),
            self.use_map_coordinates,
            map_scale,
        )
    }
}

/// Checks that the border leaves a playable area inside the map.
pub fn validate_map_scale(map_size: f32, border: f32) -> Result<MapScale, ConfigError> {
    if !(map_size.is_finite() && map_size > 0.0) {
        return Err(ConfigError::InvalidMapScale(format!(
            "map size must be positive, got {}",
            map_size
        )));
    }
    if !(border.is_finite() && border >= 0.0 && border * 2.0 < map_size) {
        return Err(ConfigError::InvalidMapScale(format!(
            "border {} does not fit a map of size {}",
            border, map_size
        )));
    }
    Ok(MapScale::new(map_size, border))
}

pub fn parse_presets(json: &str) -> Result<Vec<ZonePreset>, ConfigError> {
    let presets: Vec<ZonePreset> = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    for preset in &presets {
        if !seen.insert(preset.id) {
            return Err(ConfigError::DuplicateId(preset.id));
        }
    }
    Ok(presets)
}

pub fn load_presets(path: &Path) -> Result<Vec<ZonePreset>, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let presets = parse_presets(&json)?;
    info!("Loaded {} zone presets from {}", presets.len(), path.display());
    Ok(presets)
}

/// Rotation used when no preset file is given.
pub fn default_presets() -> Vec<ZonePreset> {
    fn preset(
        id: u32,
        name: &str,
        short_name: &str,
        center: (f32, f32),
        shape: (&str, &str),
        use_map_coordinates: bool,
        use_case: ZoneUseCase,
    ) -> ZonePreset {
        ZonePreset {
            id,
            name: name.to_string(),
            short_name: Some(short_name.to_string()),
            center_x: center.0,
            center_z: center.1,
            shape_type: shape.0.to_string(),
            raw_shape_parameters: shape.1.to_string(),
            use_map_coordinates,
            use_case,
        }
    }

    vec![
        preset(
            1,
            "Team 1 Main Base",
            "T1",
            (-400.0, -400.0),
            ("rectangle", "120,80"),
            false,
            ZoneUseCase::Team1Main,
        ),
        preset(
            2,
            "Team 2 Main Base",
            "T2",
            (400.0, 400.0),
            ("rectangle", "120,80"),
            false,
            ZoneUseCase::Team2Main,
        ),
        preset(
            3,
            "Crossroads",
            "A",
            (-150.0, 0.0),
            ("circle", "60"),
            false,
            ZoneUseCase::Flag,
        ),
        preset(
            4,
            "Quarry",
            "B",
            (0.0, 0.0),
            ("polygon", "80,-60,220,-40,240,90,120,140,60,40"),
            true,
            ZoneUseCase::Flag,
        ),
        preset(
            5,
            "Lobby",
            "L",
            (0.0, -600.0),
            ("circle", "25"),
            false,
            ZoneUseCase::Lobby,
        ),
    ]
}
