use crate::tiles::{TileGrid, TileKind};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Parameters for water-blob terrain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainParams {
    pub size: usize,
    /// Per-cell probability of seeding a blob
    pub water_chance: f64,
    /// Blob radius is drawn from 1..=max_chunk_radius
    pub max_chunk_radius: usize,
}

/// Generates grass terrain sprinkled with square water blobs
pub struct TerrainGenerator {
    rng: ChaCha8Rng,
    seed: u64,
}

impl TerrainGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from OS entropy; the drawn seed is kept so the world can be recreated
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Visit every cell row by row; each roll under `water_chance` stamps a blob
    /// centred on that cell. Blobs may overlap, water is never reverted.
    pub fn generate(&mut self, params: &TerrainParams) -> TileGrid {
        let mut grid = TileGrid::new(params.size);
        let max_radius = params.max_chunk_radius.max(1);

        for y in 0..params.size {
            for x in 0..params.size {
                if self.rng.gen::<f64>() < params.water_chance {
                    let radius = self.roll_radius(max_radius);
                    stamp_blob(&mut grid, x, y, radius);
                }
            }
        }

        grid
    }

    /// Blob radius, uniform over `1..=max_radius`
    fn roll_radius(&mut self, max_radius: usize) -> usize {
        self.rng.gen_range(1..=max_radius)
    }
}

/// Set every cell within the square of `radius` around (cx, cy) to water,
/// clipped to the grid
pub fn stamp_blob(grid: &mut TileGrid, cx: usize, cy: usize, radius: usize) {
    let size = grid.size();
    if size == 0 {
        return;
    }
    let x_range = cx.saturating_sub(radius)..=(cx + radius).min(size - 1);
    let y_range = cy.saturating_sub(radius)..=(cy + radius).min(size - 1);

    for y in y_range {
        for x in x_range.clone() {
            grid.set(x, y, TileKind::Water);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::{WATER_CHANCE, WATER_CHUNK_RADIUS};

    fn params(size: usize) -> TerrainParams {
        TerrainParams {
            size,
            water_chance: WATER_CHANCE,
            max_chunk_radius: WATER_CHUNK_RADIUS,
        }
    }

    #[test]
    fn test_grid_dimensions() {
        for size in [1, 16, 250] {
            let grid = TerrainGenerator::new(7).generate(&params(size));
            assert_eq!(grid.size(), size);
            assert_eq!(grid.iter().count(), size * size);
            assert_eq!(
                grid.count(TileKind::Grass) + grid.count(TileKind::Water),
                size * size
            );
        }
    }

    #[test]
    fn test_same_seed_same_world() {
        let a = TerrainGenerator::new(1234).generate(&params(250));
        let b = TerrainGenerator::new(1234).generate(&params(250));

        assert_eq!(a, b);
        assert_eq!(a.fingerprint().unwrap(), b.fingerprint().unwrap());
    }

    #[test]
    fn test_extreme_chances() {
        let mut p = params(32);

        p.water_chance = 0.0;
        let dry = TerrainGenerator::new(3).generate(&p);
        assert_eq!(dry.count(TileKind::Water), 0);

        p.water_chance = 1.0;
        let wet = TerrainGenerator::new(3).generate(&p);
        assert_eq!(wet.count(TileKind::Grass), 0);
    }

    #[test]
    fn test_no_single_cell_puddles() {
        // Smallest blob is 3x3 (2x2 when clipped at a corner)
        let mut p = params(64);
        p.water_chance = 0.02;
        let grid = TerrainGenerator::new(99).generate(&p);
        assert!(grid.count(TileKind::Water) > 0);

        for (pos, kind) in grid.iter() {
            if !kind.is_water() {
                continue;
            }
            let has_water_neighbour = (-1i64..=1)
                .flat_map(|dy| (-1i64..=1).map(move |dx| (dx, dy)))
                .filter(|&offset| offset != (0, 0))
                .any(|(dx, dy)| {
                    let nx = pos.x as i64 + dx;
                    let ny = pos.y as i64 + dy;
                    nx >= 0
                        && ny >= 0
                        && grid.get(nx as usize, ny as usize) == Some(TileKind::Water)
                });
            assert!(has_water_neighbour, "isolated water tile at {:?}", pos);
        }
    }

    #[test]
    fn test_radius_covers_full_range() {
        let mut generator = TerrainGenerator::new(5);
        let radii: Vec<usize> = (0..1000)
            .map(|_| generator.roll_radius(WATER_CHUNK_RADIUS))
            .collect();

        assert!(radii.iter().all(|r| (1..=WATER_CHUNK_RADIUS).contains(r)));
        assert!(radii.contains(&1));
        assert!(radii.contains(&WATER_CHUNK_RADIUS));
    }

    #[test]
    fn test_max_radius_blob_is_seven_wide() {
        let mut grid = TileGrid::new(20);
        stamp_blob(&mut grid, 10, 10, WATER_CHUNK_RADIUS);

        assert_eq!(grid.count(TileKind::Water), 49);
        assert_eq!(grid.get(7, 7), Some(TileKind::Water));
        assert_eq!(grid.get(13, 13), Some(TileKind::Water));
        assert_eq!(grid.get(6, 10), Some(TileKind::Grass));
        assert_eq!(grid.get(10, 14), Some(TileKind::Grass));
    }

    #[test]
    fn test_stamp_blob_clips_at_corner() {
        let mut grid = TileGrid::new(10);
        stamp_blob(&mut grid, 0, 0, 2);

        assert_eq!(grid.count(TileKind::Water), 9);
        assert_eq!(grid.get(2, 2), Some(TileKind::Water));
        assert_eq!(grid.get(3, 0), Some(TileKind::Grass));
        assert_eq!(grid.get(0, 3), Some(TileKind::Grass));
    }

    #[test]
    fn test_stamp_blob_interior() {
        let mut grid = TileGrid::new(10);
        stamp_blob(&mut grid, 5, 5, 1);

        assert_eq!(grid.count(TileKind::Water), 9);
        for (pos, kind) in grid.iter() {
            let square_distance = pos.x.abs_diff(5).max(pos.y.abs_diff(5));
            assert_eq!(kind.is_water(), square_distance <= 1);
        }
    }

    #[test]
    fn test_stamp_blob_never_reverts_water() {
        let mut grid = TileGrid::new(10);
        grid.set(9, 9, TileKind::Water);
        stamp_blob(&mut grid, 0, 0, 1);

        assert_eq!(grid.get(9, 9), Some(TileKind::Water));
        assert_eq!(grid.count(TileKind::Water), 5);
    }
}
