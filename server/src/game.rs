use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use zones::{Bounds, Point2, Point3};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Team1,
    Team2,
}

impl Team {
    /// Alternates teams by player id so both sides fill evenly.
    pub fn for_player(player_id: u32) -> Self {
        if player_id % 2 == 1 {
            Team::Team1
        } else {
            Team::Team2
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub team: Team,
    pub position: Point3,
}

impl Player {
    pub fn new(id: u32, team: Team, position: Point3) -> Self {
        Self { id, team, position }
    }

    pub fn planar_position(&self) -> Point2 {
        self.position.into()
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub tick: u32,
    pub players: HashMap<u32, Player>,
    world: Bounds,
}

impl GameState {
    /// `world` is the playable area players are kept inside.
    pub fn new(world: Bounds) -> Self {
        Self {
            tick: 0,
            players: HashMap::new(),
            world,
        }
    }

    pub fn world(&self) -> Bounds {
        self.world
    }

    pub fn add_player(&mut self, player_id: u32, team: Team, spawn: Point3) {
        let mut player = Player::new(player_id, team, spawn);
        self.clamp_to_world(&mut player);

        info!(
            "Added player {} ({:?}) at ({}, {})",
            player_id, team, player.position.x, player.position.z
        );
        self.players.insert(player_id, player);
    }

    pub fn remove_player(&mut self, player_id: &u32) -> Option<Player> {
        let removed = self.players.remove(player_id);
        if removed.is_some() {
            info!("Removed player {}", player_id);
        }
        removed
    }

    /// Players ordered by id, so consumers see a stable order every tick.
    pub fn players_sorted(&self) -> Vec<&Player> {
        let mut players: Vec<&Player> = self.players.values().collect();
        players.sort_by_key(|player| player.id);
        players
    }

    /// Moves every player by a random step of at most `max_step` on each axis.
    pub fn wander(&mut self, rng: &mut impl Rng, max_step: f32) {
        let world = self.world;
        let mut ids: Vec<u32> = self.players.keys().copied().collect();
        ids.sort_unstable();

        for id in ids {
            if let Some(player) = self.players.get_mut(&id) {
                if max_step > 0.0 {
                    player.position.x += rng.gen_range(-max_step..=max_step);
                    player.position.z += rng.gen_range(-max_step..=max_step);
                }
                Self::clamp(world, player);
            }
        }
        self.tick += 1;
    }

    fn clamp_to_world(&self, player: &mut Player) {
        Self::clamp(self.world, player);
    }

    fn clamp(world: Bounds, player: &mut Player) {
        let max = world.max();
        player.position.x = player.position.x.max(world.origin.x).min(max.x);
        player.position.z = player.position.z.max(world.origin.y).min(max.y);
    }
}
