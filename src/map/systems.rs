use super::{
    marker_offset, spawn_minimap_ui, Minimap, MinimapBuffer, MinimapConfig, MinimapMarker,
};
use crate::world::WorldState;
use bevy::prelude::*;

/// Rasterizes the terrain once and puts the minimap on screen, replacing any
/// overlay left from an earlier world
pub fn setup_minimap(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    world: Res<WorldState>,
    config: Res<MinimapConfig>,
    existing: Query<Entity, With<Minimap>>,
) {
    for entity in &existing {
        commands.entity(entity).despawn();
    }

    let buffer = MinimapBuffer::render(&world.grid, config.width, config.height);
    let handle = images.add(buffer.to_image());
    spawn_minimap_ui(&mut commands, handle, &config);

    info!(
        "Minimap rendered at {}x{} ({:.2} tiles per pixel)",
        buffer.width(),
        buffer.height(),
        config.scale(world.grid.size())
    );
}

/// Moves the player dot to follow the player
pub fn update_minimap_marker(
    world: Res<WorldState>,
    config: Res<MinimapConfig>,
    mut marker_query: Query<&mut Node, With<MinimapMarker>>,
) {
    let offset = marker_offset(
        world.player.position,
        world.tile_size,
        config.scale(world.grid.size()),
    );
    for mut node in &mut marker_query {
        node.left = Val::Px(offset.x);
        node.top = Val::Px(offset.y);
    }
}
