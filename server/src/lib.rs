//! # Zone Host Library
//!
//! Hosts a rotation of capture zones for a game round. Zone presets are loaded
//! from configuration, built into [`zones::Zone`] values, and checked against
//! player positions every tick to track who is standing where.
//!
//! ## Core Responsibilities
//!
//! ### Preset Loading
//! Presets arrive as a JSON array (see [`config`]). Each one names a shape, its
//! raw parameter string, a center and whether its coordinates are in world
//! space or map-image space. Malformed files are rejected with a
//! [`config::ConfigError`]; individual zones whose shape parameters do not
//! parse are kept but inert, so a single bad preset never takes down a round.
//!
//! ### Occupancy
//! Every tick, each player is tested against each zone's bounding box and then
//! against the exact shape. Per-team counts and enter/leave transitions are
//! reported by [`occupancy::OccupancyTracker`].
//!
//! ### Boundary Markers
//! Zones expose evenly spaced perimeter points for placing visual markers.
//! [`rotation::RotationZone::spawn_positions`] lifts them onto the terrain via a
//! [`rotation::TerrainHeight`] lookup supplied by the host.
//!
//! ## Module Organization
//!
//! ### Config Module (`config`)
//! - Preset records and their JSON layout
//! - Map scale validation
//! - Built-in default rotation
//!
//! ### Rotation Module (`rotation`)
//! - One zone per preset, with its inverse built on demand
//! - Lookup by id, name and use case
//! - Bounding-box candidate pruning
//!
//! ### Game Module (`game`)
//! Simulated players with team assignment, kept inside the playable area.
//!
//! ### Occupancy Module (`occupancy`)
//! Per-zone team counts and enter/leave events between ticks.
//!
//! ### Host Module (`host`)
//! The fixed-rate tick loop tying the pieces together.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use server::config::default_presets;
//! use server::host::ZoneHost;
//! use server::rotation::ZoneRotation;
//! use std::time::Duration;
//! use zones::MapScale;
//!
//! #[tokio::main]
//! async fn main() {
//!     let rotation = ZoneRotation::from_presets(&default_presets(), MapScale::default());
//!     let mut host = ZoneHost::new(rotation, 42);
//!     host.spawn_players(8);
//!
//!     // 10Hz until Ctrl+C
//!     host.run(Duration::from_millis(100), 0).await;
//! }
//! ```
//!
//! ## Concurrency
//!
//! The host is single-threaded: one task owns the rotation, the players and the
//! tracker, and every tick runs to completion before the next one starts.
//! Zones themselves hold no interior mutability, so a rotation can be moved or
//! cloned into another task freely.

pub mod config;
pub mod game;
pub mod host;
pub mod occupancy;
pub mod rotation;
