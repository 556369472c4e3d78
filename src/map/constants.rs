/// Minimap size in pixels, independent of window and world size
pub const MINIMAP_WIDTH: u32 = 200;
pub const MINIMAP_HEIGHT: u32 = 200;

/// Gap between the minimap and the window's top-right corner
pub const MINIMAP_MARGIN: f32 = 20.0;

/// Side of the square player marker in pixels
pub const MINIMAP_MARKER_SIZE: f32 = 2.0;

/// Minimap colours (RGBA8)
pub const MINIMAP_GRASS: [u8; 4] = [0x4C, 0xAF, 0x50, 0xFF]; // #4CAF50
pub const MINIMAP_WATER: [u8; 4] = [0x21, 0x96, 0xF3, 0xFF]; // #2196F3
pub const MINIMAP_BACKGROUND: [u8; 4] = [0x00, 0x00, 0x00, 0xFF];
pub const MINIMAP_MARKER: [u8; 4] = [0xFF, 0x00, 0x00, 0xFF]; // #FF0000
