use super::PlayerSprite;
use crate::tiles::LAYER_Z_PLAYER;
use crate::world::render::world_to_translation;
use bevy::prelude::*;

/// Spawns the player's sprite; its position is driven by `sync_player_sprite`
pub fn spawn_player_sprite(
    commands: &mut Commands,
    image: Handle<Image>,
    position: Vec2,
    size: f32,
) -> Entity {
    commands
        .spawn((
            PlayerSprite,
            Sprite {
                image,
                custom_size: Some(Vec2::splat(size)),
                ..default()
            },
            Transform::from_translation(world_to_translation(position, LAYER_Z_PLAYER)),
        ))
        .id()
}

/// Sprite centre for a player at `position`: the top-left corner is snapped to
/// whole pixels before drawing
pub fn player_draw_center(position: Vec2, size: f32) -> Vec2 {
    let half = Vec2::splat(size / 2.0);
    (position - half).floor() + half
}
