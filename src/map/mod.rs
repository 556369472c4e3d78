mod buffer;
mod constants;
mod systems;
mod ui;

pub use buffer::*;
pub use constants::*;
pub use systems::*;
pub use ui::*;

use crate::game::{setup_world, GameState};
use bevy::prelude::*;

/// Plugin for the minimap overlay
pub struct MinimapPlugin;

impl Plugin for MinimapPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MinimapConfig>()
            .add_systems(
                OnEnter(GameState::Running),
                setup_minimap.after(setup_world),
            )
            .add_systems(
                Update,
                update_minimap_marker.run_if(in_state(GameState::Running)),
            );
    }
}

/// Configuration for the minimap overlay
#[derive(Resource, Debug, Clone)]
pub struct MinimapConfig {
    pub width: u32,
    pub height: u32,
    /// Distance from the top and right window edges
    pub margin: f32,
    pub marker_size: f32,
}

impl Default for MinimapConfig {
    fn default() -> Self {
        Self {
            width: MINIMAP_WIDTH,
            height: MINIMAP_HEIGHT,
            margin: MINIMAP_MARGIN,
            marker_size: MINIMAP_MARKER_SIZE,
        }
    }
}

impl MinimapConfig {
    /// World cells per minimap pixel
    pub fn scale(&self, world_size: usize) -> f32 {
        world_size as f32 / self.width as f32
    }
}

/// Marker component for the minimap image node
#[derive(Component)]
pub struct Minimap;

/// Marker component for the live player dot on the minimap
#[derive(Component)]
pub struct MinimapMarker;
