use super::camera::ViewCamera;
use super::config::WorldConfig;
use crate::entities::{InputTracker, Player};
use crate::tiles::TileGrid;
use bevy::prelude::*;

/// Everything the update and render passes share: terrain, player, camera and
/// pointer state
#[derive(Resource, Debug, Clone)]
pub struct WorldState {
    pub grid: TileGrid,
    pub player: Player,
    pub camera: ViewCamera,
    pub input: InputTracker,
    pub tile_size: f32,
    /// Number of update ticks run so far
    pub ticks: u64,
}

impl WorldState {
    /// Player at the world centre, camera at the origin with an empty viewport
    pub fn new(grid: TileGrid, config: &WorldConfig) -> Self {
        let world_px = config.tile_size * grid.size() as f32;
        let center = Vec2::splat(world_px / 2.0);
        Self {
            grid,
            player: Player::new(center, config.player_speed),
            camera: ViewCamera::new(config.zoom, config.camera_lerp),
            // Keep targets on the last whole pixel inside the world
            input: InputTracker::clamped_to((world_px - 1.0).max(0.0)),
            tile_size: config.tile_size,
            ticks: 0,
        }
    }

    pub fn world_pixel_size(&self) -> f32 {
        self.tile_size * self.grid.size() as f32
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.resize(width, height);
    }

    /// Screen positions are converted with the camera as it is right now
    pub fn pointer_down(&mut self, screen: Vec2) {
        let world = self.camera.screen_to_world(screen);
        self.input.press(world);
    }

    pub fn pointer_moved(&mut self, screen: Vec2) {
        let world = self.camera.screen_to_world(screen);
        self.input.move_to(world);
    }

    pub fn pointer_up(&mut self) {
        self.input.release(&mut self.player);
    }

    /// One update tick: input, then player, then camera
    pub fn tick(&mut self) {
        self.input.tick(&mut self.player);
        self.player.tick();
        self.camera.update(self.player.position);
        self.ticks += 1;
    }
}
