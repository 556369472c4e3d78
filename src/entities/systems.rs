use super::spawning::player_draw_center;
use super::PlayerSprite;
use crate::tiles::LAYER_Z_PLAYER;
use crate::world::render::world_to_translation;
use crate::world::{WorldConfig, WorldState};
use bevy::prelude::*;
use bevy::window::{CursorMoved, PrimaryWindow};

/// Feeds pointer events into the world's input tracker.
/// Positions are window logical pixels with the origin at the top-left.
pub fn track_pointer(
    buttons: Res<ButtonInput<MouseButton>>,
    mut cursor_events: MessageReader<CursorMoved>,
    window: Single<&Window, With<PrimaryWindow>>,
    mut world: ResMut<WorldState>,
) {
    for event in cursor_events.read() {
        world.pointer_moved(event.position);
    }

    if buttons.just_pressed(MouseButton::Left) {
        if let Some(cursor) = window.cursor_position() {
            world.pointer_down(cursor);
            debug!(
                "Pointer down at screen {:?} -> world {:?} (player on screen at {:?})",
                cursor,
                world.input.pointer_world(),
                world.camera.world_to_screen(world.player.position)
            );
        }
    }

    if buttons.just_released(MouseButton::Left) && world.input.is_held() {
        let dropped = world.player.target();
        world.pointer_up();
        debug!(
            "Pointer up, dropped target {:?} with player at {:?}",
            dropped, world.player.position
        );
    }
}

/// Syncs the player sprite's Transform with the player's world position
pub fn sync_player_sprite(
    world: Res<WorldState>,
    config: Res<WorldConfig>,
    mut query: Query<&mut Transform, With<PlayerSprite>>,
) {
    let center = player_draw_center(world.player.position, config.player_size);
    for mut transform in &mut query {
        transform.translation = world_to_translation(center, LAYER_Z_PLAYER);
    }
}
