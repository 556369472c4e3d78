use super::types::{TileKind, TilePos};
use crate::error::WorldError;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Square terrain grid, stored row-major (`index = y * size + x`)
///
/// The grid is built once by the generator and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    size: usize,
    tiles: Vec<TileKind>,
}

impl TileGrid {
    /// Create a grid with every cell set to `kind`
    pub fn filled(size: usize, kind: TileKind) -> Self {
        Self {
            size,
            tiles: vec![kind; size * size],
        }
    }

    /// Create an all-grass grid
    pub fn new(size: usize) -> Self {
        Self::filled(size, TileKind::Grass)
    }

    /// Side length in tiles
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.size && y < self.size).then(|| y * self.size + x)
    }

    /// Get the tile at (x, y), or None outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<TileKind> {
        self.index(x, y).map(|i| self.tiles[i])
    }

    /// Set the tile at (x, y); returns false outside the grid
    pub fn set(&mut self, x: usize, y: usize, kind: TileKind) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.tiles[i] = kind;
                true
            }
            None => false,
        }
    }

    /// Get the tile under a world pixel position
    pub fn get_at_world(&self, world_pos: Vec2, tile_size: f32) -> Option<TileKind> {
        let pos = TilePos::from_world(world_pos, tile_size)?;
        self.get(pos.x, pos.y)
    }

    /// Iterate cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (TilePos, TileKind)> + '_ {
        let size = self.size;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, &kind)| (TilePos::new(i % size, i / size), kind))
    }

    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|&&t| t == kind).count()
    }

    /// CRC32 of the bincode encoding; equal grids always share a fingerprint
    pub fn fingerprint(&self) -> Result<u32, WorldError> {
        let bytes = bincode::serialize(self)?;
        Ok(crc32fast::hash(&bytes))
    }

    pub fn stats(&self) -> TerrainStats {
        TerrainStats {
            size: self.size,
            water_tiles: self.iter().filter(|(_, kind)| kind.is_water()).count(),
            grass_tiles: self.count(TileKind::Grass),
        }
    }
}

/// Tile counts for a generated grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerrainStats {
    pub size: usize,
    pub grass_tiles: usize,
    pub water_tiles: usize,
}

impl TerrainStats {
    pub fn water_percent(&self) -> f32 {
        let total = self.grass_tiles + self.water_tiles;
        if total == 0 {
            return 0.0;
        }
        self.water_tiles as f32 / total as f32 * 100.0
    }
}

impl std::fmt::Display for TerrainStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{0}x{0} tiles, Grass: {1}, Water: {2} ({3:.1}%)",
            self.size,
            self.grass_tiles,
            self.water_tiles,
            self.water_percent()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_get_set() {
        let mut grid = TileGrid::new(10);

        assert_eq!(grid.get(5, 7), Some(TileKind::Grass));
        assert!(grid.set(5, 7, TileKind::Water));
        assert_eq!(grid.get(5, 7), Some(TileKind::Water));

        // Neighbours untouched
        assert_eq!(grid.get(7, 5), Some(TileKind::Grass));

        // Out of bounds
        assert!(!grid.set(10, 0, TileKind::Water));
        assert_eq!(grid.get(10, 0), None);
        assert_eq!(grid.get(0, 10), None);
    }

    #[test]
    fn test_get_at_world() {
        let mut grid = TileGrid::new(4);
        grid.set(1, 2, TileKind::Water);

        assert_eq!(
            grid.get_at_world(Vec2::new(40.0, 70.0), 32.0),
            Some(TileKind::Water)
        );
        assert_eq!(
            grid.get_at_world(Vec2::new(0.0, 0.0), 32.0),
            Some(TileKind::Grass)
        );

        // Off-grid lookups never index past the end
        assert_eq!(grid.get_at_world(Vec2::new(128.0, 0.0), 32.0), None);
        assert_eq!(grid.get_at_world(Vec2::new(-5.0, 0.0), 32.0), None);
    }

    #[test]
    fn test_iter_is_row_major() {
        let grid = TileGrid::new(3);
        let positions: Vec<TilePos> = grid.iter().map(|(pos, _)| pos).collect();

        assert_eq!(positions.len(), 9);
        assert_eq!(positions[0], TilePos::new(0, 0));
        assert_eq!(positions[1], TilePos::new(1, 0));
        assert_eq!(positions[3], TilePos::new(0, 1));
        assert_eq!(positions[8], TilePos::new(2, 2));
    }

    #[test]
    fn test_fingerprint_tracks_content() {
        let a = TileGrid::new(8);
        let mut b = TileGrid::new(8);

        assert_eq!(a.fingerprint().unwrap(), b.fingerprint().unwrap());

        b.set(3, 3, TileKind::Water);
        assert_ne!(a.fingerprint().unwrap(), b.fingerprint().unwrap());
    }

    #[test]
    fn test_stats() {
        let mut grid = TileGrid::new(10);
        grid.set(0, 0, TileKind::Water);
        grid.set(9, 9, TileKind::Water);

        let stats = grid.stats();
        assert_eq!(stats.size, 10);
        assert_eq!(stats.water_tiles, 2);
        assert_eq!(stats.grass_tiles, 98);
        assert!((stats.water_percent() - 2.0).abs() < 1e-4);
    }
}
