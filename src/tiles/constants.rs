/// Pixel size of each tile (sprites are drawn at this size before zoom)
pub const TILE_SIZE: f32 = 32.0;

/// Side length of the square world in tiles
pub const WORLD_SIZE: usize = 250;

// Terrain generation
/// Per-cell probability of seeding a water blob
pub const WATER_CHANCE: f64 = 0.005;

/// Largest blob radius in tiles (radius is drawn from 1..=this)
pub const WATER_CHUNK_RADIUS: usize = 3;

/// Z-positions for drawable layers in world space
pub const LAYER_Z_TERRAIN: f32 = 0.0;
pub const LAYER_Z_PLAYER: f32 = 1.0;

// Sprite asset paths, relative to the assets/ directory
pub const GRASS_SPRITE_PATH: &str = "sprites/terrain/grass.png";
pub const WATER_SPRITE_PATH: &str = "sprites/terrain/water.png";
pub const PLAYER_SPRITE_PATH: &str = "sprites/player/player.png";
