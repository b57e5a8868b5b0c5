//! Tick loop driving the zone rotation against simulated players.

use crate::config::ZoneUseCase;
use crate::game::{GameState, Team};
use crate::occupancy::{OccupancyEvent, OccupancyTracker};
use crate::rotation::{FlatTerrain, ZoneRotation};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::time::{interval, Duration, Instant, MissedTickBehavior};
use zones::{Bounds, Point2, Point3, Vector2, DEFAULT_EDGE_POINTS, DEFAULT_SPACING};

/// Largest per-axis distance a simulated player moves in one tick.
pub const WANDER_STEP: f32 = 12.0;

pub struct ZoneHost {
    rotation: ZoneRotation,
    game_state: GameState,
    tracker: OccupancyTracker,
    rng: StdRng,
}

impl ZoneHost {
    pub fn new(rotation: ZoneRotation, seed: u64) -> Self {
        let scale = rotation.map_scale();
        let half = (scale.map_size - 2.0 * scale.border).max(0.0) / 2.0;
        let world = Bounds::new(Point2::new(-half, -half), Vector2::new(half * 2.0, half * 2.0));

        Self {
            rotation,
            game_state: GameState::new(world),
            tracker: OccupancyTracker::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn rotation(&self) -> &ZoneRotation {
        &self.rotation
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn tracker(&self) -> &OccupancyTracker {
        &self.tracker
    }

    /// Adds players with alternating teams, spawning each in its team's main base when one exists.
    pub fn spawn_players(&mut self, count: u32) {
        let first_id = self.game_state.players.keys().max().copied().unwrap_or(0) + 1;

        for player_id in first_id..first_id + count {
            let team = Team::for_player(player_id);
            let spawn = self.spawn_point(team);
            self.game_state.add_player(player_id, team, spawn);
        }
    }

    fn spawn_point(&mut self, team: Team) -> Point3 {
        let use_case = match team {
            Team::Team1 => ZoneUseCase::Team1Main,
            Team::Team2 => ZoneUseCase::Team2Main,
        };

        let base = self
            .rotation
            .by_use_case(use_case)
            .find(|entry| entry.zone().parsed_successfully())
            .map(|entry| entry.zone().center());

        match base {
            Some(center) => Point3::new(center.x, 0.0, center.y),
            None => {
                let world = self.game_state.world();
                let max = world.max();
                Point3::new(
                    self.rng.gen_range(world.origin.x..=max.x),
                    0.0,
                    self.rng.gen_range(world.origin.y..=max.y),
                )
            }
        }
    }

    /// Logs each zone's placement in both coordinate conventions and its boundary marker count.
    pub fn describe_zones(&mut self) {
        let terrain = FlatTerrain::default();

        for entry in self.rotation.iter_mut() {
            let markers = entry
                .spawn_positions(DEFAULT_EDGE_POINTS, DEFAULT_SPACING, &terrain)
                .len();
            let name = entry.preset().display_name().to_string();
            let bounds = entry.zone().bounds();

            if !entry.zone().parsed_successfully() {
                info!("Zone {}: inactive", name);
                continue;
            }

            let inverse_bounds = entry.inverse().map(|inverse| inverse.bounds()).unwrap_or_default();
            info!(
                "Zone {}: bounds ({:.1}, {:.1}) {:.1}x{:.1}, inverse ({:.1}, {:.1}) {:.1}x{:.1}, {} markers",
                name,
                bounds.origin.x,
                bounds.origin.y,
                bounds.size.x,
                bounds.size.y,
                inverse_bounds.origin.x,
                inverse_bounds.origin.y,
                inverse_bounds.size.x,
                inverse_bounds.size.y,
                markers
            );
        }
    }

    /// Advances one tick: moves players, then recomputes occupancy.
    pub fn tick(&mut self) -> Vec<OccupancyEvent> {
        self.game_state.wander(&mut self.rng, WANDER_STEP);
        let events = self
            .tracker
            .update(&self.rotation, self.game_state.players.values());

        for entry in self.rotation.iter() {
            if let Some(occupancy) = self.tracker.occupancy(entry.id()) {
                if occupancy.total() > 0 {
                    debug!(
                        "Tick {} zone {}: team1 {} team2 {}",
                        self.game_state.tick,
                        entry.preset().display_name(),
                        occupancy.team1,
                        occupancy.team2
                    );
                }
            }
        }
        events
    }

    /// Runs ticks at `tick_duration` until `max_ticks` have run (0 = forever) or Ctrl+C.
    pub async fn run(&mut self, tick_duration: Duration, max_ticks: u32) {
        let mut interval_timer = interval(tick_duration);
        interval_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        // Skip the first tick since it fires immediately
        interval_timer.tick().await;

        info!("Zone host started");
        let started = Instant::now();
        let mut ticks = 0u32;

        loop {
            tokio::select! {
                _ = interval_timer.tick() => {
                    self.tick();
                    ticks += 1;
                    if max_ticks > 0 && ticks >= max_ticks {
                        break;
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Received Ctrl+C, shutting down gracefully...");
                    break;
                }
            }
        }

        info!(
            "Zone host stopped after {} ticks in {:.2}s",
            ticks,
            started.elapsed().as_secs_f32()
        );
    }
}
