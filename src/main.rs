use bevy::{log::LogPlugin, prelude::*};

mod entities;
mod error;
mod game;
mod map;
mod tiles;
mod world;

use game::GamePlugin;
use map::MinimapPlugin;

/// Default log filter; RUST_LOG takes precedence
const LOG_FILTER: &str = "info,wgpu=error,naga=warn";

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(ImagePlugin::default_nearest())
                .set(LogPlugin {
                    filter: LOG_FILTER.to_string(),
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Tile World".to_string(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins((GamePlugin, MinimapPlugin))
        .run();
}
