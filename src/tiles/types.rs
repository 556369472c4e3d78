use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Terrain kind held by a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TileKind {
    #[default]
    Grass,
    Water,
}

impl TileKind {
    pub fn is_water(&self) -> bool {
        matches!(self, TileKind::Water)
    }
}

/// Tile position in grid coordinates (column, row)
///
/// Rows grow downward, matching world pixel coordinates where y points down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TilePos {
    pub x: usize,
    pub y: usize,
}

impl TilePos {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Convert from world position (in pixels) to tile position
    /// Returns None for negative coordinates, which lie left of or above the grid
    pub fn from_world(world_pos: Vec2, tile_size: f32) -> Option<Self> {
        let x = (world_pos.x / tile_size).floor();
        let y = (world_pos.y / tile_size).floor();
        if x < 0.0 || y < 0.0 || !x.is_finite() || !y.is_finite() {
            return None;
        }
        Some(Self::new(x as usize, y as usize))
    }

    /// World position of the tile's top-left corner (in pixels)
    pub fn to_world(&self, tile_size: f32) -> Vec2 {
        Vec2::new(self.x as f32 * tile_size, self.y as f32 * tile_size)
    }

    /// World position of the tile's centre (in pixels)
    pub fn center(&self, tile_size: f32) -> Vec2 {
        self.to_world(tile_size) + Vec2::splat(tile_size / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_world() {
        let tile_size = 32.0;

        // Origin tile
        let pos = TilePos::from_world(Vec2::new(0.0, 0.0), tile_size);
        assert_eq!(pos, Some(TilePos::new(0, 0)));

        // Last pixel of the first tile
        let pos = TilePos::from_world(Vec2::new(31.9, 31.9), tile_size);
        assert_eq!(pos, Some(TilePos::new(0, 0)));

        let pos = TilePos::from_world(Vec2::new(64.0, 96.5), tile_size);
        assert_eq!(pos, Some(TilePos::new(2, 3)));

        // Negative positions are outside the grid
        assert_eq!(TilePos::from_world(Vec2::new(-1.0, 10.0), tile_size), None);
        assert_eq!(TilePos::from_world(Vec2::new(10.0, -0.5), tile_size), None);
    }

    #[test]
    fn test_to_world_and_center() {
        let pos = TilePos::new(3, 5);
        assert_eq!(pos.to_world(32.0), Vec2::new(96.0, 160.0));
        assert_eq!(pos.center(32.0), Vec2::new(112.0, 176.0));
    }
}
