//! Per-tick zone occupancy
//!
//! Every tick the tracker checks each player against each zone in the
//! rotation: first against the zone's bounding box, then with the exact
//! containment test. It keeps the resulting per-team counts and reports which
//! players entered or left a zone since the previous tick.

use crate::game::{Player, Team};
use crate::rotation::ZoneRotation;
use log::info;
use std::collections::HashMap;

/// Who is standing in a zone this tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneOccupancy {
    pub zone_id: u32,
    pub team1: usize,
    pub team2: usize,
    /// Player ids in ascending order.
    pub players: Vec<u32>,
}

impl ZoneOccupancy {
    pub fn total(&self) -> usize {
        self.team1 + self.team2
    }

    pub fn is_contested(&self) -> bool {
        self.team1 > 0 && self.team2 > 0
    }

    /// The team with more players present, `None` when tied or empty.
    pub fn leading_team(&self) -> Option<Team> {
        match self.team1.cmp(&self.team2) {
            std::cmp::Ordering::Greater => Some(Team::Team1),
            std::cmp::Ordering::Less => Some(Team::Team2),
            std::cmp::Ordering::Equal => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccupancyEvent {
    Entered { player_id: u32, zone_id: u32 },
    Left { player_id: u32, zone_id: u32 },
}

#[derive(Debug, Default)]
pub struct OccupancyTracker {
    zones: HashMap<u32, ZoneOccupancy>,
}

impl OccupancyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes occupancy for every zone and returns the transitions.
    ///
    /// Events are ordered by rotation order, then entries before exits, then player id.
    pub fn update<'a>(
        &mut self,
        rotation: &ZoneRotation,
        players: impl IntoIterator<Item = &'a Player>,
    ) -> Vec<OccupancyEvent> {
        let mut players: Vec<&Player> = players.into_iter().collect();
        players.sort_by_key(|player| player.id);

        let mut next = HashMap::with_capacity(rotation.len());
        let mut events = Vec::new();

        for entry in rotation.iter() {
            let zone = entry.zone();
            let bounds = zone.bounds();
            let mut occupancy = ZoneOccupancy {
                zone_id: entry.id(),
                ..Default::default()
            };

            for player in &players {
                let position = player.planar_position();
                if !zone.parsed_successfully()
                    || !bounds.contains(position)
                    || !zone.is_inside(position)
                {
                    continue;
                }
                occupancy.players.push(player.id);
                match player.team {
                    Team::Team1 => occupancy.team1 += 1,
                    Team::Team2 => occupancy.team2 += 1,
                }
            }

            let before: &[u32] = self
                .zones
                .get(&entry.id())
                .map(|previous| previous.players.as_slice())
                .unwrap_or_default();

            for &player_id in &occupancy.players {
                if before.binary_search(&player_id).is_err() {
                    info!("Player {} entered zone {}", player_id, entry.preset().display_name());
                    events.push(OccupancyEvent::Entered {
                        player_id,
                        zone_id: entry.id(),
                    });
                }
            }
            for &player_id in before {
                if occupancy.players.binary_search(&player_id).is_err() {
                    info!("Player {} left zone {}", player_id, entry.preset().display_name());
                    events.push(OccupancyEvent::Left {
                        player_id,
                        zone_id: entry.id(),
                    });
                }
            }

            next.insert(entry.id(), occupancy);
        }

        self.zones = next;
        events
    }

    pub fn occupancy(&self, zone_id: u32) -> Option<&ZoneOccupancy> {
        self.zones.get(&zone_id)
    }

    /// Zones the player was inside at the last update, ascending by id.
    pub fn zones_of_player(&self, player_id: u32) -> Vec<u32> {
        let mut ids: Vec<u32> = self
            .zones
            .values()
            .filter(|occupancy| occupancy.players.binary_search(&player_id).is_ok())
            .map(|occupancy| occupancy.zone_id)
            .collect();
        ids.sort_unstable();
        ids
    }
}
