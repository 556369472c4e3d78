pub mod assets;
pub mod camera;
pub mod config;
pub mod generator;
pub mod render;
pub mod state;

// Re-export commonly used items
pub use assets::SpriteHandles;
pub use config::WorldConfig;
pub use generator::{TerrainGenerator, TerrainParams};
pub use render::TileSpriteManager;
pub use state::WorldState;
