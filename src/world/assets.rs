use super::config::WorldConfig;
use crate::error::WorldError;
use crate::game::GameState;
use crate::tiles::{TileKind, GRASS_SPRITE_PATH, PLAYER_SPRITE_PATH, WATER_SPRITE_PATH};
use bevy::asset::LoadState;
use bevy::prelude::*;

/// Handles to the three sprites the world is drawn with
#[derive(Resource, Debug, Clone)]
pub struct SpriteHandles {
    pub grass: Handle<Image>,
    pub water: Handle<Image>,
    pub player: Handle<Image>,
}

impl SpriteHandles {
    pub fn for_tile(&self, kind: TileKind) -> Handle<Image> {
        match kind {
            TileKind::Grass => self.grass.clone(),
            TileKind::Water => self.water.clone(),
        }
    }

    fn entries(&self) -> [(&'static str, &Handle<Image>); 3] {
        [
            (GRASS_SPRITE_PATH, &self.grass),
            (WATER_SPRITE_PATH, &self.water),
            (PLAYER_SPRITE_PATH, &self.player),
        ]
    }
}

/// Tracks how long we've been waiting on sprites
#[derive(Resource, Debug, Default)]
pub struct AssetGate {
    pub waited_secs: f32,
}

/// Load progress of a single sprite
#[derive(Debug, Clone, PartialEq)]
pub enum SpriteLoad {
    Pending,
    Ready,
    Failed(String),
}

impl From<LoadState> for SpriteLoad {
    fn from(state: LoadState) -> Self {
        match state {
            LoadState::Loaded => SpriteLoad::Ready,
            LoadState::Failed(err) => SpriteLoad::Failed(err.to_string()),
            _ => SpriteLoad::Pending,
        }
    }
}

/// Join over all sprite loads.
///
/// Ok(true) once every sprite is ready, Ok(false) while any is still pending,
/// and an error as soon as one fails or the wait exceeds `timeout_secs`.
pub fn evaluate_gate(
    loads: &[(&str, SpriteLoad)],
    waited_secs: f32,
    timeout_secs: f32,
) -> Result<bool, WorldError> {
    if let Some((path, SpriteLoad::Failed(reason))) = loads
        .iter()
        .find(|(_, load)| matches!(load, SpriteLoad::Failed(_)))
    {
        return Err(WorldError::AssetFailed {
            path: path.to_string(),
            reason: reason.clone(),
        });
    }

    let pending: Vec<String> = loads
        .iter()
        .filter(|(_, load)| *load == SpriteLoad::Pending)
        .map(|(path, _)| path.to_string())
        .collect();

    if pending.is_empty() {
        return Ok(true);
    }
    if waited_secs >= timeout_secs {
        return Err(WorldError::AssetTimeout {
            waited_secs,
            pending,
        });
    }
    Ok(false)
}

/// Startup: kick off loading of every sprite
pub fn load_sprites(mut commands: Commands, assets: Res<AssetServer>) {
    let handles = SpriteHandles {
        grass: assets.load(GRASS_SPRITE_PATH),
        water: assets.load(WATER_SPRITE_PATH),
        player: assets.load(PLAYER_SPRITE_PATH),
    };
    commands.insert_resource(handles);
    commands.init_resource::<AssetGate>();
    info!("Loading sprites");
}

/// Opens the gate into `GameState::Running` once every sprite has loaded;
/// exits the app on failure or timeout instead of hanging on a blank window
pub fn check_sprites_loaded(
    time: Res<Time>,
    assets: Res<AssetServer>,
    handles: Res<SpriteHandles>,
    config: Res<WorldConfig>,
    mut gate: ResMut<AssetGate>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<AppExit>,
) {
    gate.waited_secs += time.delta_secs();

    let loads: Vec<(&str, SpriteLoad)> = handles
        .entries()
        .into_iter()
        .map(|(path, handle)| (path, SpriteLoad::from(assets.load_state(handle.id()))))
        .collect();

    match evaluate_gate(&loads, gate.waited_secs, config.asset_timeout_secs) {
        Ok(true) => {
            info!("All {} sprites loaded in {:.2}s", loads.len(), gate.waited_secs);
            next_state.set(GameState::Running);
        }
        Ok(false) => {}
        Err(e) => {
            error!("{}", e);
            exit.write(AppExit::error());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_waits_for_all() {
        let loads = [
            ("grass", SpriteLoad::Ready),
            ("water", SpriteLoad::Pending),
            ("player", SpriteLoad::Ready),
        ];
        assert!(!evaluate_gate(&loads, 0.5, 10.0).unwrap());

        let loads = [
            ("grass", SpriteLoad::Ready),
            ("water", SpriteLoad::Ready),
            ("player", SpriteLoad::Ready),
        ];
        assert!(evaluate_gate(&loads, 0.5, 10.0).unwrap());
    }

    #[test]
    fn test_gate_fails_fast() {
        let loads = [
            ("grass", SpriteLoad::Ready),
            ("water", SpriteLoad::Failed("missing file".to_string())),
            ("player", SpriteLoad::Pending),
        ];
        match evaluate_gate(&loads, 0.0, 10.0) {
            Err(WorldError::AssetFailed { path, reason }) => {
                assert_eq!(path, "water");
                assert_eq!(reason, "missing file");
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_gate_times_out() {
        let loads = [
            ("grass", SpriteLoad::Ready),
            ("water", SpriteLoad::Pending),
            ("player", SpriteLoad::Pending),
        ];
        match evaluate_gate(&loads, 10.0, 10.0) {
            Err(WorldError::AssetTimeout { pending, .. }) => {
                assert_eq!(pending, vec!["water".to_string(), "player".to_string()]);
            }
            other => panic!("expected timeout, got {:?}", other),
        }
    }

    #[test]
    fn test_loaded_sprites_beat_the_clock() {
        let loads = [("grass", SpriteLoad::Ready)];
        assert!(evaluate_gate(&loads, 99.0, 10.0).unwrap());
    }
}
