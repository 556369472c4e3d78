use super::assets::SpriteHandles;
use super::state::WorldState;
use crate::tiles::{TilePos, LAYER_Z_TERRAIN};
use bevy::prelude::*;
use std::collections::HashMap;
use std::ops::Range;

/// Marker component for terrain sprite entities
#[derive(Component)]
pub struct TileSprite;

/// Tracks which cells currently have a sprite entity
#[derive(Resource, Debug, Default)]
pub struct TileSpriteManager {
    pub active: HashMap<TilePos, Entity>,
}

impl TileSpriteManager {
    pub fn is_spawned(&self, pos: &TilePos) -> bool {
        self.active.contains_key(pos)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }
}

/// Tile index ranges covered by the viewport, intersected with `[0, world_size)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleTiles {
    pub x: Range<usize>,
    pub y: Range<usize>,
}

impl VisibleTiles {
    pub fn contains(&self, pos: &TilePos) -> bool {
        self.x.contains(&pos.x) && self.y.contains(&pos.y)
    }

    pub fn len(&self) -> usize {
        self.x.len() * self.y.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = TilePos> + '_ {
        self.y
            .clone()
            .flat_map(move |y| self.x.clone().map(move |x| TilePos::new(x, y)))
    }
}

/// Cull the grid to the tiles under a viewport whose top-left is `origin`
pub fn visible_tile_range(
    origin: Vec2,
    viewport: Vec2,
    tile_size: f32,
    world_size: usize,
) -> VisibleTiles {
    let axis = |start: f32, extent: f32| -> Range<usize> {
        let first = (start / tile_size).floor().max(0.0);
        let last = ((start + extent) / tile_size).ceil().min(world_size as f32);
        if last <= first {
            return 0..0;
        }
        first as usize..last as usize
    };
    VisibleTiles {
        x: axis(origin.x, viewport.x),
        y: axis(origin.y, viewport.y),
    }
}

/// World pixel coordinates (y down) to a Bevy translation (y up)
pub fn world_to_translation(world: Vec2, z: f32) -> Vec3 {
    Vec3::new(world.x, -world.y, z)
}

/// Position the 2D camera so its view's top-left lands on the floored camera
/// origin, at the configured zoom
pub fn sync_camera_transform(
    world: Res<WorldState>,
    mut camera_query: Query<(&mut Transform, &mut Projection), With<Camera2d>>,
) {
    let Ok((mut transform, mut projection)) = camera_query.single_mut() else {
        return;
    };

    let camera = &world.camera;
    let center = camera.render_origin() + camera.viewport / 2.0;
    let z = transform.translation.z;
    transform.translation = world_to_translation(center, z);

    let scale = 1.0 / camera.zoom;
    if let Projection::Orthographic(ortho) = projection.bypass_change_detection() {
        if ortho.scale != scale {
            ortho.scale = scale;
            projection.set_changed();
        }
    }
}

/// Spawn sprites for tiles that scrolled into view and despawn the ones that
/// scrolled out, so exactly the visible range is drawn
pub fn stream_visible_tiles(
    mut commands: Commands,
    world: Res<WorldState>,
    handles: Res<SpriteHandles>,
    mut manager: ResMut<TileSpriteManager>,
) {
    let visible = visible_tile_range(
        world.camera.render_origin(),
        world.camera.viewport,
        world.tile_size,
        world.grid.size(),
    );

    let mut despawned = 0;
    manager.active.retain(|pos, entity| {
        let keep = visible.contains(pos);
        if !keep {
            commands.entity(*entity).despawn();
            despawned += 1;
        }
        keep
    });

    let mut spawned = 0;
    for pos in visible.iter() {
        if manager.is_spawned(&pos) {
            continue;
        }
        let Some(kind) = world.grid.get(pos.x, pos.y) else {
            continue;
        };

        let entity = commands
            .spawn((
                TileSprite,
                Sprite {
                    image: handles.for_tile(kind),
                    custom_size: Some(Vec2::splat(world.tile_size)),
                    ..default()
                },
                Transform::from_translation(world_to_translation(
                    pos.center(world.tile_size),
                    LAYER_Z_TERRAIN,
                )),
            ))
            .id();
        manager.active.insert(pos, entity);
        spawned += 1;
    }

    if spawned > 0 || despawned > 0 {
        debug!(
            "Tiles visible x={:?} y={:?} ({}): +{} -{} ({} live)",
            visible.x,
            visible.y,
            visible.len(),
            spawned,
            despawned,
            manager.len()
        );
    }

    #[cfg(feature = "debug_tiles")]
    if spawned > 0 || despawned > 0 {
        print_visible_grid(&world, &visible);
    }
}

/// Print an ASCII picture of the visible tiles ('~' water, '.' grass)
#[cfg(feature = "debug_tiles")]
fn print_visible_grid(world: &WorldState, visible: &VisibleTiles) {
    let mut grid = String::new();
    grid.push_str(&format!(
        "\nVisible tiles x={:?} y={:?}\n",
        visible.x, visible.y
    ));
    for y in visible.y.clone() {
        for x in visible.x.clone() {
            let symbol = match world.grid.get(x, y) {
                Some(kind) if kind.is_water() => '~',
                Some(_) => '.',
                None => ' ',
            };
            grid.push(symbol);
        }
        grid.push('\n');
    }
    info!("{}", grid);
}
