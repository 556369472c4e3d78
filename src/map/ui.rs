use super::{Minimap, MinimapConfig, MinimapMarker, MINIMAP_MARKER};
use bevy::prelude::*;

/// Spawns the minimap overlay in the top-right corner with the player dot as
/// a child, so the dot is positioned relative to the minimap
pub fn spawn_minimap_ui(commands: &mut Commands, image: Handle<Image>, config: &MinimapConfig) {
    let [r, g, b, a] = MINIMAP_MARKER;

    commands
        .spawn((
            Minimap,
            ImageNode::new(image),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(config.margin),
                right: Val::Px(config.margin),
                width: Val::Px(config.width as f32),
                height: Val::Px(config.height as f32),
                ..default()
            },
            ZIndex(1000), // Ensure it's on top
        ))
        .with_children(|parent| {
            parent.spawn((
                MinimapMarker,
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(0.0),
                    top: Val::Px(0.0),
                    width: Val::Px(config.marker_size),
                    height: Val::Px(config.marker_size),
                    ..default()
                },
                BackgroundColor(Color::srgba_u8(r, g, b, a)),
            ));
        });
}
