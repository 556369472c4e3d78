use super::types::Player;
use bevy::prelude::*;

/// Turns pointer press/move/release into player targets.
///
/// While the pointer is held, each tick pushes the tracked world position as
/// the target if it differs from the last one pushed. Releasing the pointer
/// clears the target straight away.
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    held: bool,
    pointer_world: Option<Vec2>,
    last_pushed: Option<Vec2>,
    /// Inclusive upper bound for targets on both axes; None leaves them unclamped
    bounds: Option<f32>,
}

impl InputTracker {
    /// Tracker that keeps every target inside `[0, max]` on both axes
    pub fn clamped_to(max: f32) -> Self {
        Self {
            bounds: Some(max),
            ..default()
        }
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn pointer_world(&self) -> Option<Vec2> {
        self.pointer_world
    }

    pub fn press(&mut self, world_pos: Vec2) {
        self.held = true;
        self.pointer_world = Some(self.clamp(world_pos));
        // A fresh press always retargets, even to the previous spot
        self.last_pushed = None;
    }

    pub fn move_to(&mut self, world_pos: Vec2) {
        self.pointer_world = Some(self.clamp(world_pos));
    }

    pub fn release(&mut self, player: &mut Player) {
        self.held = false;
        self.last_pushed = None;
        player.clear_target();
    }

    /// Push the pointer position into the player if it changed since last tick
    pub fn tick(&mut self, player: &mut Player) {
        if !self.held {
            return;
        }
        let Some(pointer) = self.pointer_world else {
            return;
        };
        if self.last_pushed != Some(pointer) {
            player.set_target(pointer);
            self.last_pushed = Some(pointer);
        }
    }

    fn clamp(&self, world_pos: Vec2) -> Vec2 {
        match self.bounds {
            Some(max) => world_pos.clamp(Vec2::ZERO, Vec2::splat(max)),
            None => world_pos,
        }
    }
}
