use super::constants::{MINIMAP_BACKGROUND, MINIMAP_GRASS, MINIMAP_WATER};
use crate::tiles::{TileGrid, TileKind};
use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

/// Minimap colour for a tile kind
pub fn tile_color(kind: TileKind) -> [u8; 4] {
    match kind {
        TileKind::Grass => MINIMAP_GRASS,
        TileKind::Water => MINIMAP_WATER,
    }
}

/// Minimap pixel a grid cell lands on: `floor(cell / scale)`
pub fn pixel_for_cell(cell: usize, scale: f32) -> u32 {
    (cell as f32 / scale).floor() as u32
}

/// Offset of the player marker inside the minimap
pub fn marker_offset(player: Vec2, tile_size: f32, scale: f32) -> Vec2 {
    (player / (tile_size * scale)).floor()
}

/// Static RGBA8 raster of the terrain, rendered once after generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimapBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl MinimapBuffer {
    /// Nearest downsampling: each cell overwrites the pixel it maps to, so with
    /// more cells than pixels the last cell written wins
    pub fn render(grid: &TileGrid, width: u32, height: u32) -> Self {
        let mut buffer = Self {
            width,
            height,
            pixels: MINIMAP_BACKGROUND.repeat((width * height) as usize),
        };

        let scale = grid.size() as f32 / width as f32;
        for (pos, kind) in grid.iter() {
            let px = pixel_for_cell(pos.x, scale);
            let py = pixel_for_cell(pos.y, scale);
            buffer.put(px, py, tile_color(kind));
        }

        buffer
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[i..i + 4]);
        Some(rgba)
    }

    fn put(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = ((y * self.width + x) * 4) as usize;
        self.pixels[i..i + 4].copy_from_slice(&rgba);
    }

    /// Upload as a texture for the UI
    pub fn to_image(&self) -> Image {
        Image::new(
            Extent3d {
                width: self.width,
                height: self.height,
                depth_or_array_layers: 1,
            },
            TextureDimension::D2,
            self.pixels.clone(),
            TextureFormat::Rgba8UnormSrgb,
            RenderAssetUsages::default(),
        )
    }
}
