use crate::entities::{spawn_player_sprite, sync_player_sprite, track_pointer, MovementState};
use crate::world::assets::{check_sprites_loaded, load_sprites};
use crate::world::render::{stream_visible_tiles, sync_camera_transform};
use crate::world::{
    SpriteHandles, TerrainGenerator, TerrainParams, TileSpriteManager, WorldConfig, WorldState,
};
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

/// Nothing is updated or drawn until every sprite has loaded
#[derive(States, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GameState {
    #[default]
    Loading,
    Running,
}

/// Wires the loading gate, the fixed-rate update and the per-frame render sync
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<WorldConfig>() {
            app.insert_resource(WorldConfig::from_env());
        }
        let config = app.world().resource::<WorldConfig>().clone();
        info!("World config: {:?}", config);

        app.init_state::<GameState>()
            .insert_resource(ClearColor(Color::BLACK))
            .add_plugins(WorldTickPlugin {
                tick_rate_hz: config.tick_rate_hz,
            })
            .init_resource::<TileSpriteManager>()
            .add_systems(Startup, (setup_camera, load_sprites))
            .add_systems(
                Update,
                check_sprites_loaded.run_if(in_state(GameState::Loading)),
            )
            .add_systems(OnEnter(GameState::Running), setup_world)
            .add_systems(
                Update,
                (
                    handle_resize,
                    track_pointer,
                    sync_camera_transform,
                    stream_visible_tiles,
                    sync_player_sprite,
                )
                    .chain()
                    .run_if(in_state(GameState::Running)),
            );
    }
}

/// Runs the world update at a fixed rate, only once the game is running
pub struct WorldTickPlugin {
    pub tick_rate_hz: f64,
}

impl Plugin for WorldTickPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(self.tick_rate_hz))
            .add_systems(
                FixedUpdate,
                tick_world.run_if(in_state(GameState::Running)),
            );
    }
}

fn setup_camera(mut commands: Commands, config: Res<WorldConfig>) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / config.zoom,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(0.0, 0.0, 999.0),
    ));
}

/// Generates the terrain and builds the world state once sprites are ready
pub fn setup_world(
    mut commands: Commands,
    config: Res<WorldConfig>,
    handles: Res<SpriteHandles>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let mut generator = match config.seed {
        Some(seed) => TerrainGenerator::new(seed),
        None => TerrainGenerator::from_entropy(),
    };
    let grid = generator.generate(&TerrainParams {
        size: config.world_size,
        water_chance: config.water_chance,
        max_chunk_radius: config.water_chunk_radius,
    });

    info!("Generated terrain with seed {}: {}", generator.seed(), grid.stats());
    match grid.fingerprint() {
        Ok(fingerprint) => info!("Terrain fingerprint {:08x}", fingerprint),
        Err(e) => warn!("Could not fingerprint terrain: {}", e),
    }

    let mut world = WorldState::new(grid, &config);
    info!(
        "Player spawned at {:?} in a {}px world",
        world.player.position,
        world.world_pixel_size()
    );
    if let Ok(window) = windows.single() {
        world.resize(window.width(), window.height());
    }

    spawn_player_sprite(
        &mut commands,
        handles.player.clone(),
        world.player.position,
        config.player_size,
    );
    commands.insert_resource(world);
}

/// One fixed-rate update: input, player, camera
fn tick_world(mut world: ResMut<WorldState>) {
    let was_moving = world.player.state() == MovementState::Moving;
    world.tick();

    if was_moving && world.player.state() == MovementState::Idle {
        let position = world.player.position;
        debug!(
            "Player arrived at {:?} on {:?} after {} ticks",
            position,
            world.grid.get_at_world(position, world.tile_size),
            world.ticks
        );
    }
}

fn handle_resize(mut resize_events: MessageReader<WindowResized>, mut world: ResMut<WorldState>) {
    for event in resize_events.read() {
        world.resize(event.width, event.height);
        debug!(
            "Window resized to {}x{}, viewport {:?}",
            event.width, event.height, world.camera.viewport
        );
    }
}
