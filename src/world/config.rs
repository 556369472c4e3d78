use crate::tiles::{TILE_SIZE, WATER_CHANCE, WATER_CHUNK_RADIUS, WORLD_SIZE};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Pixel size of the player sprite
pub const PLAYER_SIZE: f32 = 32.0;

/// Player movement in pixels per update tick
pub const PLAYER_SPEED: f32 = 5.0;

/// Fraction of the remaining distance the camera covers each tick
pub const CAMERA_LERP: f32 = 0.05;

/// Uniform world-to-screen scale
pub const ZOOM_LEVEL: f32 = 2.0;

/// Update ticks per second (movement and camera smoothing are per tick)
pub const TICK_RATE_HZ: f64 = 60.0;

/// How long to wait for sprites before giving up
pub const ASSET_TIMEOUT_SECS: f32 = 10.0;

/// Environment variable that pins the terrain seed
pub const SEED_ENV_VAR: &str = "TILEWORLD_SEED";

/// World and gameplay configuration
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    pub tile_size: f32,
    pub world_size: usize,
    pub player_size: f32,
    pub player_speed: f32,
    pub camera_lerp: f32,
    pub zoom: f32,
    pub water_chance: f64,
    pub water_chunk_radius: usize,
    /// Terrain seed; None draws one from entropy at generation time
    pub seed: Option<u64>,
    pub tick_rate_hz: f64,
    pub asset_timeout_secs: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            world_size: WORLD_SIZE,
            player_size: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,
            camera_lerp: CAMERA_LERP,
            zoom: ZOOM_LEVEL,
            water_chance: WATER_CHANCE,
            water_chunk_radius: WATER_CHUNK_RADIUS,
            seed: None,
            tick_rate_hz: TICK_RATE_HZ,
            asset_timeout_secs: ASSET_TIMEOUT_SECS,
        }
    }
}

impl WorldConfig {
    /// Defaults with the seed override from the environment applied
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(SEED_ENV_VAR) {
            config.apply_seed_override(&raw);
        }
        config
    }

    /// Parse a seed override; unparsable values are logged and ignored
    pub fn apply_seed_override(&mut self, raw: &str) {
        match raw.trim().parse::<u64>() {
            Ok(seed) => self.seed = Some(seed),
            Err(e) => warn!("Ignoring {}={:?}: {}", SEED_ENV_VAR, raw, e),
        }
    }
}
